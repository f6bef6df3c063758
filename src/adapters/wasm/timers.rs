use gloo_timers::callback::Timeout;

use crate::ports::timer::{TimerHandle, TimerPort};

/// Timer adapter over the browser's cooperative event loop (`setTimeout`).
#[derive(Clone, Copy)]
pub struct BrowserTimers;

impl BrowserTimers {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerPort for BrowserTimers {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Box<dyn TimerHandle> {
        Box::new(BrowserTimerHandle {
            timeout: Timeout::new(delay_ms, callback),
        })
    }
}

/// Cancels via `clearTimeout`; dropping the handle cancels too, which is why
/// the notifier keeps handles alive until they fire or are dismissed.
struct BrowserTimerHandle {
    timeout: Timeout,
}

impl TimerHandle for BrowserTimerHandle {
    fn cancel(self: Box<Self>) {
        self.timeout.cancel();
    }
}
