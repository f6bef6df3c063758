use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::converters;
use crate::adapters::wasm::{BrowserTimers, DomAlertHost};
use crate::domain::alert::{AlertId, Notifier, NotifierConfig};
use crate::platform::Platform;

thread_local! {
    // The page-wide notifier behind `show_alert`, resolved against the
    // default container on first use.
    static PAGE_NOTIFIER: RefCell<Option<Notifier>> = const { RefCell::new(None) };
}

fn build_notifier(config: &NotifierConfig) -> Result<Notifier, JsValue> {
    let host =
        DomAlertHost::from_selector(&config.container_selector).map_err(converters::to_js_error)?;
    Ok(Notifier::with_duration(
        Platform::new(),
        Rc::new(host),
        Rc::new(BrowserTimers::new()),
        config.auto_dismiss_ms,
    ))
}

/// Shows a transient alert banner in the page's default container.
///
/// `severity` is one of `"info"`, `"success"`, `"warning"`, `"danger"`;
/// omitted means `"info"`. The message is rendered as markup, so callers
/// must sanitize untrusted input.
#[wasm_bindgen]
pub fn show_alert(message: &str, severity: Option<String>) -> Result<(), JsValue> {
    let severity = converters::severity_from_js(severity)?;
    PAGE_NOTIFIER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(build_notifier(&NotifierConfig::default())?);
        }
        if let Some(notifier) = slot.as_ref() {
            notifier
                .notify(message, severity)
                .map_err(converters::to_js_error)?;
        }
        Ok(())
    })
}

/// Alert surface bound to one container, for pages that want an explicit
/// instance instead of the `show_alert` page-wide default.
#[wasm_bindgen]
pub struct AlertCenter {
    notifier: Notifier,
}

#[wasm_bindgen]
impl AlertCenter {
    /// `config` is an optional `{ containerSelector, autoDismissMs }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<AlertCenter, JsValue> {
        let config: NotifierConfig = converters::from_js_config(config)?;
        Ok(Self {
            notifier: build_notifier(&config)?,
        })
    }

    /// Like [`show_alert`], and returns the banner's id for `dismiss`.
    pub fn notify(&self, message: &str, severity: Option<String>) -> Result<u64, JsValue> {
        let severity = converters::severity_from_js(severity)?;
        let id = self
            .notifier
            .notify(message, severity)
            .map_err(converters::to_js_error)?;
        Ok(id.value())
    }

    /// Removes the banner immediately; pending auto-removal is cancelled.
    pub fn dismiss(&self, id: u64) -> bool {
        self.notifier.dismiss(AlertId::new(id))
    }

    /// Number of banners currently on screen.
    pub fn mounted(&self) -> usize {
        self.notifier.mounted()
    }
}
