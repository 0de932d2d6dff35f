//! Domain layer: session calculator, market data and trade signal models.
//! No browser APIs here apart from what `chrono` reads for the clock.

pub mod errors;
pub mod logging;
pub mod market_data;
pub mod session;
pub mod signal;
