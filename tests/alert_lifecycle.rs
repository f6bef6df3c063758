#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;

mod test_utils;

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::Element;

use vestnik::adapters::wasm::{BrowserTimers, DomAlertHost};
use vestnik::facades::wasm::alerts::{show_alert, AlertCenter};
use vestnik::platform::Platform;
use vestnik::{Notifier, Severity};

wasm_bindgen_test_configure!(run_in_browser);

fn notifier_for(container: &Element, auto_dismiss_ms: u32) -> Notifier {
    Notifier::with_duration(
        Platform::new(),
        Rc::new(DomAlertHost::new(container.clone())),
        Rc::new(BrowserTimers::new()),
        auto_dismiss_ms,
    )
}

#[wasm_bindgen_test]
fn notify_mounts_banner_with_severity_class() {
    let container = test_utils::install_container("div", None);
    let notifier = notifier_for(&container, 5000);

    notifier
        .notify("Заявка сохранена", Severity::Success)
        .unwrap();

    assert_eq!(container.child_element_count(), 1);
    let banner = container.first_element_child().expect("banner");
    assert!(banner.class_name().contains("alert"));
    assert!(banner.class_name().contains("alert-success"));
    assert!(banner.inner_html().contains("Заявка сохранена"));
    assert!(banner.query_selector(".btn-close").unwrap().is_some());

    test_utils::remove_container(&container);
}

#[wasm_bindgen_test]
fn newest_banner_is_prepended() {
    let container = test_utils::install_container("div", None);
    let notifier = notifier_for(&container, 5000);

    notifier.notify("первое", Severity::Info).unwrap();
    notifier.notify("второе", Severity::Warning).unwrap();

    let top = container.first_element_child().expect("top banner");
    assert!(top.inner_html().contains("второе"));

    test_utils::remove_container(&container);
}

#[wasm_bindgen_test]
async fn banner_is_removed_after_display_duration() {
    let container = test_utils::install_container("div", None);
    let notifier = notifier_for(&container, 100);

    notifier.notify("скоро исчезнет", Severity::Info).unwrap();
    assert_eq!(container.child_element_count(), 1);

    TimeoutFuture::new(250).await;
    assert_eq!(container.child_element_count(), 0);
    assert_eq!(notifier.mounted(), 0);

    test_utils::remove_container(&container);
}

#[wasm_bindgen_test]
async fn banner_survives_until_the_deadline() {
    let container = test_utils::install_container("div", None);
    let notifier = notifier_for(&container, 300);

    notifier.notify("ещё видно", Severity::Info).unwrap();
    TimeoutFuture::new(50).await;

    assert_eq!(container.child_element_count(), 1);

    test_utils::remove_container(&container);
}

#[wasm_bindgen_test]
async fn clicking_the_dismiss_control_removes_immediately() {
    let container = test_utils::install_container("div", None);
    let notifier = notifier_for(&container, 100);

    notifier.notify("закрыть вручную", Severity::Danger).unwrap();
    let button = container
        .query_selector(".btn-close")
        .unwrap()
        .expect("dismiss control");

    test_utils::click(&button);
    assert_eq!(container.child_element_count(), 0);
    assert_eq!(notifier.pending(), 0, "auto-removal must be cancelled");

    // The original deadline passing afterwards must stay a no-op.
    TimeoutFuture::new(250).await;
    assert_eq!(container.child_element_count(), 0);

    test_utils::remove_container(&container);
}

#[wasm_bindgen_test]
fn alert_center_uses_the_configured_container() {
    let container = test_utils::install_container("div", Some("notices"));

    let config = js_sys::Object::new();
    js_sys::Reflect::set(
        &config,
        &JsValue::from_str("containerSelector"),
        &JsValue::from_str("#notices"),
    )
    .unwrap();
    js_sys::Reflect::set(
        &config,
        &JsValue::from_str("autoDismissMs"),
        &JsValue::from_f64(100.0),
    )
    .unwrap();

    let center = AlertCenter::new(config.into()).unwrap();
    let id = center.notify("из конфигурации", None).unwrap();

    assert_eq!(center.mounted(), 1);
    assert_eq!(container.child_element_count(), 1);

    assert!(center.dismiss(id));
    assert!(!center.dismiss(id));
    assert_eq!(center.mounted(), 0);

    test_utils::remove_container(&container);
}

#[wasm_bindgen_test]
fn alert_center_rejects_a_missing_container() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(
        &config,
        &JsValue::from_str("containerSelector"),
        &JsValue::from_str("#no-such-container"),
    )
    .unwrap();
    assert!(AlertCenter::new(config.into()).is_err());
}

#[wasm_bindgen_test]
fn show_alert_targets_the_default_container() {
    // Stays in the page: the page-wide notifier keeps this container.
    let main = test_utils::install_container("main", None);

    show_alert("Данные обновлены", Some("warning".to_string())).unwrap();

    let banner = main.query_selector(".alert-warning").unwrap();
    assert!(banner.is_some(), "banner should land in <main>");

    assert!(show_alert("x", Some("fatal".to_string())).is_err());
}
