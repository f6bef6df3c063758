use web_sys::{Document, Element, Window};

use crate::domain::alert::AlertError;

pub fn window() -> Result<Window, AlertError> {
    web_sys::window().ok_or_else(|| AlertError::host_unavailable("no Window in this scope"))
}

pub fn document() -> Result<Document, AlertError> {
    window()?
        .document()
        .ok_or_else(|| AlertError::host_unavailable("Window has no Document"))
}

/// Resolves the alert container. The element must already be in the page;
/// a missing container is a precondition violation surfaced at notifier
/// construction, not something `notify` recovers from later.
pub fn resolve_container(selector: &str) -> Result<Element, AlertError> {
    document()?
        .query_selector(selector)
        .map_err(|_| AlertError::container_not_found(selector))?
        .ok_or_else(|| AlertError::container_not_found(selector))
}
