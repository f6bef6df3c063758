use wasm_bindgen::prelude::*;

use super::converters;
use crate::domain::format;
use crate::platform::Platform;

/// Renders an amount with the Russian ruble conventions, e.g. `1 234,50 ₽`.
/// Non-finite amounts are rejected.
#[wasm_bindgen]
pub fn format_currency(amount: f64) -> Result<String, JsValue> {
    format::format_currency(amount).map_err(|error| {
        Platform::new().logger().warn(&error.to_string());
        converters::to_js_error(error)
    })
}

/// Renders a date-like string with the Russian short-date convention,
/// e.g. `15.01.2024`. Unparseable input is rejected rather than rendered
/// as a sentinel, so callers can substitute their own placeholder.
#[wasm_bindgen]
pub fn format_date(input: &str) -> Result<String, JsValue> {
    format::format_date(input).map_err(|error| {
        Platform::new().logger().warn(&error.to_string());
        converters::to_js_error(error)
    })
}
