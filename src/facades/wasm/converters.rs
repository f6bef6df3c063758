use serde::de::DeserializeOwned;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

use crate::domain::alert::Severity;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Deserializes an optional JS config object; `undefined`/`null` fall back
/// to the type's defaults.
pub fn from_js_config<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_value(value).map_err(to_js_error)
}

/// Parses an optional severity string; omitted means `info`.
pub fn severity_from_js(value: Option<String>) -> Result<Severity, JsValue> {
    match value {
        Some(raw) => raw.parse().map_err(to_js_error),
        None => Ok(Severity::default()),
    }
}
