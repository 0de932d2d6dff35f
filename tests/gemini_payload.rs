use fx_adviser_wasm::domain::errors::SignalError;
use fx_adviser_wasm::domain::market_data::{CurrencyPair, MarketDataSource};
use fx_adviser_wasm::domain::session::{DEFAULT_KILL_ZONE, MarketInstant};
use fx_adviser_wasm::domain::signal::{AnalysisRequest, SessionContext, SignalAction, SignalQuality};
use fx_adviser_wasm::infrastructure::http::gemini_payload::{
    generate_content_body, parse_generate_content_response, parse_trade_signal,
};
use fx_adviser_wasm::infrastructure::mock_market_data::MockMarketDataSource;
use serde_json::json;

const SIGNAL_JSON: &str = r#"{
    "pair": "EURUSD",
    "score": 82,
    "action": "STRONG BUY",
    "reasoning": ["Dollar weakening", "ADR has room"],
    "quality": "Safe",
    "tp": 1.0950,
    "sl": 1.0850,
    "smtDivergence": true,
    "adrExhausted": false
}"#;

fn envelope(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
    .to_string()
}

fn sample_request() -> AnalysisRequest {
    let instant = MarketInstant::at_local(15, 0);
    let state = MockMarketDataSource::with_seed(7).snapshot(&instant);
    AnalysisRequest::new(CurrencyPair::new("eurusd").unwrap(), state, SessionContext::at(&instant, &DEFAULT_KILL_ZONE))
}

#[test]
fn session_context_wire_shape() {
    let context = SessionContext::at(&MarketInstant::at_local(15, 0), &DEFAULT_KILL_ZONE);
    insta::assert_json_snapshot!(context, @r#"
    {
      "isKillZone": true,
      "volatilityScore": 90
    }
    "#);
}

#[test]
fn body_carries_prompt_and_schema() {
    let body = generate_content_body(&sample_request()).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("/api/analyze/EURUSD"));
    assert!(prompt.contains("KillZone: true"));
    assert!(prompt.contains("VolatilityPulse: 90%"));
    assert!(prompt.contains("\"liquidityZones\""));
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    assert_eq!(body["generationConfig"]["responseSchema"]["required"].as_array().unwrap().len(), 9);
    assert!(body["systemInstruction"]["parts"][0]["text"].as_str().unwrap().contains("SMT Divergence"));
}

#[test]
fn parses_valid_response() {
    let signal = parse_generate_content_response(&envelope(SIGNAL_JSON)).unwrap();
    assert_eq!(signal.pair, "EURUSD");
    assert_eq!(signal.action, SignalAction::StrongBuy);
    assert_eq!(signal.quality, SignalQuality::Safe);
    assert_eq!(signal.rounded_score(), 82);
    assert!(signal.smt_divergence);
    assert_eq!(signal.reasoning.len(), 2);
}

#[test]
fn accepts_fenced_json() {
    let fenced = format!("```json\n{SIGNAL_JSON}\n```");
    let signal = parse_generate_content_response(&envelope(&fenced)).unwrap();
    assert_eq!(signal.action, SignalAction::StrongBuy);
}

#[test]
fn clamps_out_of_range_score() {
    let text = SIGNAL_JSON.replace("\"score\": 82", "\"score\": 140");
    assert_eq!(parse_trade_signal(&text).unwrap().rounded_score(), 100);
}

#[test]
fn empty_payloads_are_malformed() {
    assert!(matches!(parse_generate_content_response(""), Err(SignalError::MalformedResponse(_))));
    assert!(matches!(parse_generate_content_response(&envelope("   ")), Err(SignalError::MalformedResponse(_))));
}

#[test]
fn missing_candidates_are_malformed() {
    let body = json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
    assert!(matches!(parse_generate_content_response(&body), Err(SignalError::MalformedResponse(_))));
}

#[test]
fn invalid_json_is_malformed() {
    assert!(matches!(parse_generate_content_response("<html>502</html>"), Err(SignalError::MalformedResponse(_))));
    let err = parse_generate_content_response(&envelope("{\"pair\": \"EURUSD\"")).unwrap_err();
    assert_eq!(err.to_string(), "Malformed Response: Backend returned an unreadable payload.");
}

#[test]
fn unknown_action_is_rejected() {
    let text = SIGNAL_JSON.replace("STRONG BUY", "HODL");
    assert!(matches!(parse_trade_signal(&text), Err(SignalError::MalformedResponse(_))));
}
