//! Browser-facing adapters: console logging, configuration, the Gemini client
//! and the demo market feed.

pub mod config;
pub mod http;
pub mod mock_market_data;
pub mod services;
