/// Handle for a scheduled callback that has not fired yet.
///
/// Manual dismissal cancels the pending auto-removal through this handle
/// instead of relying on the callback tolerating an already-removed alert.
pub trait TimerHandle {
    /// Cancels the pending callback. On adapters where the underlying timer
    /// is tied to the handle's lifetime, dropping the handle cancels too.
    fn cancel(self: Box<Self>);
}

/// Port for deferring work on the host's cooperative timer queue.
///
/// - WASM: `setTimeout` via `gloo-timers`
/// - Native: a manual queue driven by a virtual clock (tests)
pub trait TimerPort {
    /// Runs `callback` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Box<dyn TimerHandle>;
}
