use once_cell::sync::Lazy;

use crate::ports::clock::ClockPort;

#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::Clock;
#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::Clock;

pub static CLOCK: Lazy<Clock> = Lazy::new(Clock::new);

/// Returns a reference to the global clock instance
#[inline]
pub fn clock() -> &'static dyn ClockPort {
    &*CLOCK
}
