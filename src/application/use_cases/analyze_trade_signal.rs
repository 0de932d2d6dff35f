use crate::domain::errors::SignalError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{CurrencyPair, MarketState};
use crate::domain::session::{DEFAULT_KILL_ZONE, HourWindow, MarketInstant};
use crate::domain::signal::{AnalysisRequest, SessionContext, SignalProvider, TradeSignal};

/// Use Case: ask the analysis backend for a verdict on one pair
#[derive(Clone)]
pub struct AnalyzeTradeSignalUseCase<P: SignalProvider> {
    provider: P,
    kill_zone: HourWindow,
}

impl<P: SignalProvider> AnalyzeTradeSignalUseCase<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, kill_zone: DEFAULT_KILL_ZONE }
    }

    pub fn with_kill_zone(mut self, kill_zone: HourWindow) -> Self {
        self.kill_zone = kill_zone;
        self
    }

    /// Request assembled from the snapshot and the session context at `instant`
    pub fn build_request(&self, pair: CurrencyPair, state: &MarketState, instant: &MarketInstant) -> AnalysisRequest {
        AnalysisRequest::new(pair, state.clone(), SessionContext::at(instant, &self.kill_zone))
    }

    pub async fn execute(
        &self,
        pair: CurrencyPair,
        state: &MarketState,
        instant: &MarketInstant,
    ) -> Result<TradeSignal, SignalError> {
        let request = self.build_request(pair, state, instant);
        get_logger().info(
            LogComponent::Application("AnalyzeTradeSignal"),
            &format!(
                "🧠 Analyzing {} (kill zone: {}, volatility: {}%)",
                request.pair, request.context.is_kill_zone, request.context.volatility_score
            ),
        );
        self.provider.request_signal(&request).await
    }
}
