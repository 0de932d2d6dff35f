use fx_adviser_wasm::domain::logging::TimeProvider;
use fx_adviser_wasm::infrastructure::services::BrowserTimeProvider;
use fx_adviser_wasm::presentation::SessionApi;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn snapshot_at_exposes_camel_case_fields() {
    // 2024-01-01T14:00:00Z is 15:00 on the UTC+1 clock
    let api = SessionApi::new();
    let value = api.snapshot_at(1_704_117_600_000.0).unwrap();
    let get = |key: &str| js_sys::Reflect::get(&value, &JsValue::from_str(key)).unwrap();
    assert_eq!(get("killZoneActive"), JsValue::TRUE);
    assert_eq!(get("overlapActive"), JsValue::TRUE);
    assert_eq!(get("volatilityScore").as_f64(), Some(90.0));
    assert_eq!(get("localTime").as_string().as_deref(), Some("15:00:00"));
}

#[wasm_bindgen_test]
fn volatility_is_a_known_band() {
    assert!([20, 40, 75, 90].contains(&SessionApi::new().volatility()));
}

#[wasm_bindgen_test]
fn browser_clock_formats_time_of_day() {
    let provider = BrowserTimeProvider::new();
    let formatted = provider.format_timestamp(provider.current_timestamp());
    assert_eq!(formatted.len(), "00:00:00.000".len());
    assert_eq!(&formatted[2..3], ":");
}

#[wasm_bindgen_test]
fn custom_kill_zone_is_validated() {
    assert!(SessionApi::with_kill_zone(8, 11).is_ok());
    let err = SessionApi::with_kill_zone(8, 30).err().unwrap();
    assert_eq!(err.as_string().as_deref(), Some("Validation Error: hour 30 is outside 0-23"));
}

#[wasm_bindgen_test]
fn snapshot_at_rejects_nan_and_clamps_far_future() {
    let api = SessionApi::new();
    let err = api.snapshot_at(f64::NAN).err().unwrap();
    assert_eq!(
        err.as_string().as_deref(),
        Some("Validation Error: timestamp must be a finite number of milliseconds")
    );
    assert!(api.snapshot_at(f64::INFINITY).is_err());

    let far = api.snapshot_at(1e300).unwrap();
    let local = js_sys::Reflect::get(&far, &JsValue::from_str("localTime")).unwrap();
    // 9999-12-31T23:59:59.999Z on the UTC+1 clock
    assert_eq!(local.as_string().as_deref(), Some("00:59:59"));
}
