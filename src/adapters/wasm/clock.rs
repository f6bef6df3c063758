use web_sys::Performance;

use crate::ports::clock::ClockPort;

#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }

    fn performance(&self) -> Option<Performance> {
        web_sys::window().and_then(|window| window.performance())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        match self.performance() {
            Some(performance) => performance.now(),
            // Scopes without the Performance API still have Date.
            None => js_sys::Date::now(),
        }
    }

    fn is_available(&self) -> bool {
        self.performance().is_some()
    }
}
