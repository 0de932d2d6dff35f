use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, Logger, TeeLogger};
use crate::infrastructure::services::ConsoleLogger;

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;
pub mod view_state;

/// Wire logging and the clock, then mount the dashboard
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // Console plus the in-page debug panel
    let console = if cfg!(debug_assertions) {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    };
    let sinks: Vec<Box<dyn Logger>> = vec![Box::new(console), Box::new(app::debug_log())];
    domain::logging::init_logger(Box::new(TeeLogger::new(sinks)));

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    crate::log_info!(LogComponent::Presentation("Initialize"), "🚀 FX adviser initialized");

    leptos::mount_to_body(app::App);
}
