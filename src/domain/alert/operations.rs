use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::platform::Platform;
use crate::ports::{AlertHostPort, TimerHandle, TimerPort};

use super::error::AlertError;
use super::types::{Alert, AlertId, Severity, DEFAULT_AUTO_DISMISS_MS};

/// Creates transient alert banners in a host container and removes them
/// again, either when their display time runs out or when the user dismisses
/// them.
///
/// The container is an explicit dependency resolved at construction; the
/// deferred auto-removal is held as a cancellable timer handle keyed by the
/// alert's id, so manual dismissal cancels the pending callback instead of
/// racing it.
#[derive(Clone)]
pub struct Notifier {
    inner: Rc<Inner>,
}

struct Inner {
    platform: Platform,
    host: Rc<dyn AlertHostPort>,
    timers: Rc<dyn TimerPort>,
    auto_dismiss_ms: u32,
    next_id: Cell<u64>,
    pending: RefCell<HashMap<AlertId, Box<dyn TimerHandle>>>,
}

impl Notifier {
    pub fn new(platform: Platform, host: Rc<dyn AlertHostPort>, timers: Rc<dyn TimerPort>) -> Self {
        Self::with_duration(platform, host, timers, DEFAULT_AUTO_DISMISS_MS)
    }

    pub fn with_duration(
        platform: Platform,
        host: Rc<dyn AlertHostPort>,
        timers: Rc<dyn TimerPort>,
        auto_dismiss_ms: u32,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                platform,
                host,
                timers,
                auto_dismiss_ms,
                next_id: Cell::new(1),
                pending: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Mounts a new banner as the first child of the container and schedules
    /// its automatic removal. The message is rendered as markup, not escaped.
    pub fn notify(&self, message: &str, severity: Severity) -> Result<AlertId, AlertError> {
        let inner = &self.inner;
        let id = AlertId::new(inner.next_id.get());
        inner.next_id.set(id.value() + 1);

        let alert = Alert {
            id,
            message: message.to_owned(),
            severity,
            created_at_ms: inner.platform.clock().now(),
        };

        let weak = Rc::downgrade(inner);
        inner.host.mount(
            &alert,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    dismiss(&inner, id);
                }
            }),
        )?;

        let weak = Rc::downgrade(inner);
        let handle = inner.timers.schedule(
            inner.auto_dismiss_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    expire(&inner, id);
                }
            }),
        );
        inner.pending.borrow_mut().insert(id, handle);

        inner
            .platform
            .logger()
            .log(&format!("alert {id} mounted ({severity})"));
        Ok(id)
    }

    /// Removes the banner immediately, cancelling its pending auto-removal.
    /// Unknown or already-removed ids return `false`.
    pub fn dismiss(&self, id: AlertId) -> bool {
        dismiss(&self.inner, id)
    }

    /// Number of banners currently mounted in the container.
    pub fn mounted(&self) -> usize {
        self.inner.host.mounted()
    }

    /// Number of auto-removal timers that have not fired or been cancelled.
    pub fn pending(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    pub fn auto_dismiss_ms(&self) -> u32 {
        self.inner.auto_dismiss_ms
    }
}

fn dismiss(inner: &Rc<Inner>, id: AlertId) -> bool {
    if let Some(handle) = inner.pending.borrow_mut().remove(&id) {
        handle.cancel();
    }
    let removed = inner.host.unmount(id);
    if removed {
        inner.platform.logger().log(&format!("alert {id} dismissed"));
    }
    removed
}

fn expire(inner: &Rc<Inner>, id: AlertId) {
    inner.pending.borrow_mut().remove(&id);
    if inner.host.unmount(id) {
        inner.platform.logger().log(&format!("alert {id} expired"));
    }
}
