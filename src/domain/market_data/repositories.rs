use super::value_objects::MarketState;
use crate::domain::session::MarketInstant;

/// Source of market snapshots; the dashboard ships a mock, real feeds plug in here
pub trait MarketDataSource {
    fn snapshot(&mut self, instant: &MarketInstant) -> MarketState;
}
