use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::domain::alert::{Alert, AlertError, AlertId};
use crate::global;
use crate::ports::alert_host::AlertHostPort;

/// Browser host: renders alert banners into a container element of the page.
///
/// Each banner is a `div.alert.alert-{severity}.alert-dismissible` carrying
/// the message markup and a `button.btn-close` dismiss control, inserted as
/// the container's first child so the newest banner sits on top.
pub struct DomAlertHost {
    container: Element,
    entries: RefCell<HashMap<AlertId, MountedAlert>>,
}

struct MountedAlert {
    element: Element,
    // Keeps the dismiss listener alive while the element is mounted.
    _on_dismiss: Closure<dyn FnMut()>,
}

impl DomAlertHost {
    /// Resolves the container once. The element must already be in the page.
    pub fn from_selector(selector: &str) -> Result<Self, AlertError> {
        Ok(Self::new(global::resolve_container(selector)?))
    }

    pub fn new(container: Element) -> Self {
        Self {
            container,
            entries: RefCell::new(HashMap::new()),
        }
    }

    fn build_element(&self, alert: &Alert) -> Result<(Element, Element), AlertError> {
        let document = global::document()?;

        let element = document.create_element("div").map_err(js_error)?;
        element.set_class_name(&format!(
            "alert {} alert-dismissible fade show",
            alert.severity.css_class()
        ));
        element.set_id(&format!("alert-{}", alert.id));
        element.set_attribute("role", "alert").map_err(js_error)?;
        // Rendered as markup on purpose; callers sanitize untrusted input.
        element.set_inner_html(&alert.message);

        let button = document.create_element("button").map_err(js_error)?;
        button.set_attribute("type", "button").map_err(js_error)?;
        button.set_class_name("btn-close");
        button
            .set_attribute("data-bs-dismiss", "alert")
            .map_err(js_error)?;
        button
            .set_attribute("aria-label", "Close")
            .map_err(js_error)?;
        element.append_child(&button).map_err(js_error)?;

        Ok((element, button))
    }
}

impl AlertHostPort for DomAlertHost {
    fn mount(&self, alert: &Alert, on_dismiss: Box<dyn Fn()>) -> Result<(), AlertError> {
        let (element, button) = self.build_element(alert)?;

        let listener = Closure::wrap(Box::new(move || on_dismiss()) as Box<dyn FnMut()>);
        button
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(js_error)?;

        self.container
            .insert_before(&element, self.container.first_child().as_ref())
            .map_err(js_error)?;

        self.entries.borrow_mut().insert(
            alert.id,
            MountedAlert {
                element,
                _on_dismiss: listener,
            },
        );
        Ok(())
    }

    fn unmount(&self, id: AlertId) -> bool {
        match self.entries.borrow_mut().remove(&id) {
            Some(entry) => {
                entry.element.remove();
                true
            }
            None => false,
        }
    }

    fn mounted(&self) -> usize {
        self.entries.borrow().len()
    }
}

fn js_error(err: JsValue) -> AlertError {
    AlertError::mount_failed(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
