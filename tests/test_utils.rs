#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub fn document() -> Document {
    web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
}

/// Appends a fresh container element to the page body and returns it.
pub fn install_container(tag: &str, id: Option<&str>) -> Element {
    let document = document();
    let container = document.create_element(tag).expect("create container");
    if let Some(id) = id {
        container.set_id(id);
    }
    document
        .body()
        .expect("no body")
        .append_child(&container)
        .expect("append container");
    container
}

pub fn remove_container(container: &Element) {
    container.remove();
}

/// Simulates the user clicking an element.
pub fn click(element: &Element) {
    element
        .clone()
        .dyn_into::<web_sys::HtmlElement>()
        .expect("clickable element")
        .click();
}
