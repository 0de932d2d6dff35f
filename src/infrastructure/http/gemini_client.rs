use gloo_net::http::Request;

use super::gemini_payload::{generate_content_body, parse_generate_content_response};
use crate::domain::errors::SignalError;
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::domain::signal::{AnalysisRequest, SignalProvider, TradeSignal};
use crate::infrastructure::config::AdviserConfig;

/// Gemini REST client producing trade signals
#[derive(Clone)]
pub struct GeminiSignalClient {
    config: AdviserConfig,
}

impl GeminiSignalClient {
    pub fn new(config: AdviserConfig) -> Self {
        Self { config }
    }

    fn api_key(&self) -> Result<&str, SignalError> {
        self.config.api_key.as_deref().ok_or(SignalError::MissingCredential)
    }

    async fn post(&self, request: &AnalysisRequest) -> Result<TradeSignal, SignalError> {
        let api_key = self.api_key()?;
        let body = generate_content_body(request)?;
        let url = self.config.generate_content_url();

        get_logger().info(
            LogComponent::Infrastructure("Gemini"),
            &format!("📡 Requesting analysis for {} via {}", request.pair, self.config.model),
        );

        let response = Request::post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .map_err(|e| SignalError::Unexpected(format!("failed to encode request: {e:?}")))?
            .send()
            .await
            .map_err(|e| SignalError::Network(format!("{e:?}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SignalError::Network(format!("failed to read body: {e:?}")))?;

        if !response.ok() {
            return Err(SignalError::from_status(status, &text));
        }

        parse_generate_content_response(&text)
    }
}

impl SignalProvider for GeminiSignalClient {
    async fn request_signal(&self, request: &AnalysisRequest) -> Result<TradeSignal, SignalError> {
        match self.post(request).await {
            Ok(signal) => {
                get_logger().info(
                    LogComponent::Infrastructure("Gemini"),
                    &format!("✅ {} verdict: {} ({})", signal.pair, signal.action, signal.rounded_score()),
                );
                Ok(signal)
            }
            Err(err) => {
                get_logger().log_with_metadata(
                    LogLevel::Error,
                    LogComponent::Infrastructure("Gemini"),
                    &format!("❌ Analysis failed [{}]: {}", err.category(), err),
                    err.detail().unwrap_or("-"),
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::CurrencyPair;
    use crate::domain::signal::SessionContext;
    use crate::infrastructure::mock_market_data::MockMarketDataSource;
    use crate::domain::market_data::MarketDataSource;
    use crate::domain::session::MarketInstant;

    #[test]
    fn missing_key_fails_before_any_request() {
        let client = GeminiSignalClient::new(AdviserConfig::default());
        let instant = MarketInstant::at_local(9, 0);
        let request = AnalysisRequest::new(
            CurrencyPair::new("EURUSD").unwrap(),
            MockMarketDataSource::with_seed(1).snapshot(&instant),
            SessionContext { is_kill_zone: false, volatility_score: 75 },
        );
        let result = futures::executor::block_on(client.request_signal(&request));
        assert_eq!(result, Err(SignalError::MissingCredential));
    }
}
