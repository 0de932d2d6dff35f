use super::value_objects::{AnalysisRequest, TradeSignal};
use crate::domain::errors::SignalError;

/// Remote analysis backend producing a trade signal for one request
#[allow(async_fn_in_trait)]
pub trait SignalProvider {
    async fn request_signal(&self, request: &AnalysisRequest) -> Result<TradeSignal, SignalError>;
}
