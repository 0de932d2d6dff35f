//! Wire format of the Gemini `generateContent` call.

use serde_json::{Value, json};

use crate::domain::errors::SignalError;
use crate::domain::signal::{AnalysisRequest, SYSTEM_INSTRUCTION, TradeSignal};

const REQUIRED_FIELDS: [&str; 9] =
    ["pair", "score", "action", "reasoning", "quality", "tp", "sl", "smtDivergence", "adrExhausted"];

/// Structured-output schema mirroring `TradeSignal`
pub fn trade_signal_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "pair": { "type": "STRING" },
            "score": { "type": "NUMBER" },
            "action": {
                "type": "STRING",
                "enum": ["STRONG BUY", "BUY", "WAIT", "SELL", "STRONG SELL"]
            },
            "reasoning": { "type": "ARRAY", "items": { "type": "STRING" } },
            "quality": { "type": "STRING", "enum": ["Safe", "Unsafe"] },
            "tp": { "type": "NUMBER" },
            "sl": { "type": "NUMBER" },
            "smtDivergence": { "type": "BOOLEAN" },
            "adrExhausted": { "type": "BOOLEAN" }
        },
        "required": REQUIRED_FIELDS
    })
}

pub fn generate_content_body(request: &AnalysisRequest) -> Result<Value, SignalError> {
    let prompt = request
        .prompt()
        .map_err(|e| SignalError::Unexpected(format!("failed to serialize market state: {e}")))?;

    Ok(json!({
        "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": trade_signal_schema()
        }
    }))
}

/// Concatenated text parts of the first candidate.
pub fn extract_candidate_text(value: &Value) -> Result<String, SignalError> {
    let parts = value
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .ok_or_else(|| SignalError::MalformedResponse("missing `candidates[0].content.parts`".into()))?;

    let text: String = parts.iter().filter_map(|p| p.get("text").and_then(|t| t.as_str())).collect();

    if text.trim().is_empty() {
        return Err(SignalError::MalformedResponse("backend returned empty payload".into()));
    }
    Ok(text)
}

/// Drop a surrounding Markdown code fence if the model added one.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

pub fn parse_trade_signal(text: &str) -> Result<TradeSignal, SignalError> {
    serde_json::from_str::<TradeSignal>(strip_code_fence(text))
        .map(TradeSignal::normalized)
        .map_err(|e| SignalError::MalformedResponse(format!("invalid trade signal JSON: {e}")))
}

/// Full response body to a trade signal.
pub fn parse_generate_content_response(body: &str) -> Result<TradeSignal, SignalError> {
    if body.trim().is_empty() {
        return Err(SignalError::MalformedResponse("empty response body".into()));
    }
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SignalError::MalformedResponse(format!("response is not JSON: {e}")))?;
    parse_trade_signal(&extract_candidate_text(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn schema_requires_every_field() {
        let schema = trade_signal_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 9);
        for field in REQUIRED_FIELDS {
            assert!(schema["properties"].get(field).is_some(), "{field} missing");
        }
    }
}
