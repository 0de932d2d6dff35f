use crate::domain::logging::LogComponent;
use crate::log_debug;
use crate::domain::market_data::{MarketDataSource, MarketState};
use crate::domain::session::MarketInstant;

/// Use Case: pull a fresh market snapshot from the configured source
pub struct RefreshMarketDataUseCase<S: MarketDataSource> {
    source: S,
    refresh_count: u64,
}

impl<S: MarketDataSource> RefreshMarketDataUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source, refresh_count: 0 }
    }

    pub fn execute(&mut self, instant: &MarketInstant) -> MarketState {
        self.refresh_count += 1;
        log_debug!(LogComponent::Application("RefreshMarketData"), "🔄 Refresh #{}", self.refresh_count);
        self.source.snapshot(instant)
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }
}
