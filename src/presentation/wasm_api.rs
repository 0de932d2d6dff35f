use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

use crate::domain::errors::{AppError, ValidationError};
use crate::domain::logging::LogComponent;
use crate::domain::session::{
    DEFAULT_KILL_ZONE, HourWindow, MarketInstant, SessionSnapshot, current_local_time, default_sessions,
    volatility_score,
};

/// Session calculator exposed to JavaScript callers
#[wasm_bindgen]
pub struct SessionApi {
    kill_zone: HourWindow,
}

#[wasm_bindgen]
impl SessionApi {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { kill_zone: DEFAULT_KILL_ZONE }
    }

    /// Calculator with a custom kill zone on the UTC+1 clock
    #[wasm_bindgen(js_name = withKillZone)]
    pub fn with_kill_zone(start_hour: u32, end_hour: u32) -> Result<SessionApi, JsValue> {
        let kill_zone = HourWindow::new(start_hour, end_hour).map_err(|e| to_js(e.into()))?;
        Ok(Self { kill_zone })
    }

    /// Current `SessionSnapshot` as a plain JS object
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        self.evaluate(current_local_time())
    }

    /// Snapshot for an arbitrary epoch-millisecond timestamp.
    ///
    /// NaN and infinities are rejected; finite values outside years
    /// 0000-9999 are clamped to the nearest representable instant.
    #[wasm_bindgen(js_name = snapshotAt)]
    pub fn snapshot_at(&self, epoch_millis: f64) -> Result<JsValue, JsValue> {
        if !epoch_millis.is_finite() {
            return Err(to_js(ValidationError::NonFiniteTimestamp.into()));
        }
        self.evaluate(MarketInstant::from_utc_millis(epoch_millis as i64))
    }

    pub fn volatility(&self) -> u8 {
        volatility_score(&current_local_time())
    }
}

impl SessionApi {
    fn evaluate(&self, instant: MarketInstant) -> Result<JsValue, JsValue> {
        let snapshot = SessionSnapshot::evaluate(instant, default_sessions(), &self.kill_zone);
        JsValue::from_serde(&snapshot).map_err(|e| {
            crate::log_error!(LogComponent::Presentation("SessionApi"), "❌ Snapshot serialization failed: {}", e);
            JsValue::from_str(&e.to_string())
        })
    }
}

impl Default for SessionApi {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(error: AppError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
