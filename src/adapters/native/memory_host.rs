use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::domain::alert::{Alert, AlertError, AlertId, Severity};
use crate::ports::alert_host::AlertHostPort;

/// In-memory host standing in for the page container in native tests.
///
/// Keeps entries in display order (newest first, matching the first-child
/// insertion of the browser host) and counts removals so double-removal
/// bugs are observable.
#[derive(Default)]
pub struct MemoryAlertHost {
    entries: RefCell<Vec<MemoryAlert>>,
    dismissers: RefCell<HashMap<AlertId, Box<dyn Fn()>>>,
    removals: Cell<usize>,
}

struct MemoryAlert {
    id: AlertId,
    message: String,
    severity: Severity,
}

impl MemoryAlertHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: AlertId) -> bool {
        self.entries.borrow().iter().any(|entry| entry.id == id)
    }

    /// Messages in display order, newest first.
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }

    pub fn severity_of(&self, id: AlertId) -> Option<Severity> {
        self.entries
            .borrow()
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.severity)
    }

    /// How many unmounts actually removed something.
    pub fn removals(&self) -> usize {
        self.removals.get()
    }

    /// Simulates the user activating the alert's dismiss control.
    pub fn click_dismiss(&self, id: AlertId) -> bool {
        let dismisser = self.dismissers.borrow_mut().remove(&id);
        match dismisser {
            Some(dismiss) => {
                dismiss();
                true
            }
            None => false,
        }
    }
}

impl AlertHostPort for MemoryAlertHost {
    fn mount(&self, alert: &Alert, on_dismiss: Box<dyn Fn()>) -> Result<(), AlertError> {
        self.entries.borrow_mut().insert(
            0,
            MemoryAlert {
                id: alert.id,
                message: alert.message.clone(),
                severity: alert.severity,
            },
        );
        self.dismissers.borrow_mut().insert(alert.id, on_dismiss);
        Ok(())
    }

    fn unmount(&self, id: AlertId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        let removed = entries.len() != before;
        drop(entries);

        self.dismissers.borrow_mut().remove(&id);
        if removed {
            self.removals.set(self.removals.get() + 1);
        }
        removed
    }

    fn mounted(&self) -> usize {
        self.entries.borrow().len()
    }
}
