#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod global;
pub mod platform;
pub mod ports;

// Re-exports for embedders and testing
pub use domain::alert::{Alert, AlertError, AlertId, Notifier, NotifierConfig, Severity};
pub use domain::format::{
    format_currency, format_currency_with, format_date, format_date_with, FormatError, Locale,
};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
