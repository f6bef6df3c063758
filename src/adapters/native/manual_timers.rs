use std::cell::RefCell;
use std::rc::Rc;

use crate::ports::timer::{TimerHandle, TimerPort};

/// Deterministic timer queue driven by an explicit virtual clock.
///
/// Callbacks fire when [`ManualTimers::advance`] moves the clock past their
/// deadline, in deadline order (ties fire in scheduling order). Stands in
/// for the browser event loop in native tests.
#[derive(Clone, Default)]
pub struct ManualTimers {
    state: Rc<RefCell<State>>,
}

#[derive(Default)]
struct State {
    now_ms: f64,
    next_id: u64,
    queue: Vec<Scheduled>,
}

struct Scheduled {
    id: u64,
    due_ms: f64,
    callback: Box<dyn FnOnce()>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> f64 {
        self.state.borrow().now_ms
    }

    /// Number of callbacks that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Moves the virtual clock forward by `delta_ms`, firing every callback
    /// that comes due along the way. Callbacks may schedule or cancel other
    /// timers; a callback scheduled inside `advance` still fires in the same
    /// call if its deadline falls before the target time.
    pub fn advance(&self, delta_ms: f64) {
        let target = self.state.borrow().now_ms + delta_ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, scheduled)| scheduled.due_ms <= target)
                    .min_by(|(_, a), (_, b)| {
                        a.due_ms.total_cmp(&b.due_ms).then(a.id.cmp(&b.id))
                    })
                    .map(|(index, _)| index);
                match due {
                    Some(index) => {
                        let scheduled = state.queue.remove(index);
                        state.now_ms = scheduled.due_ms;
                        Some(scheduled.callback)
                    }
                    None => None,
                }
            };
            match next {
                // Invoked outside the borrow so the callback can reach
                // back into the queue.
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().now_ms = target;
    }
}

impl TimerPort for ManualTimers {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Box<dyn TimerHandle> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due_ms = state.now_ms + f64::from(delay_ms);
        state.queue.push(Scheduled {
            id,
            due_ms,
            callback,
        });
        Box::new(ManualTimerHandle {
            state: Rc::clone(&self.state),
            id,
        })
    }
}

struct ManualTimerHandle {
    state: Rc<RefCell<State>>,
    id: u64,
}

impl TimerHandle for ManualTimerHandle {
    fn cancel(self: Box<Self>) {
        self.state
            .borrow_mut()
            .queue
            .retain(|scheduled| scheduled.id != self.id);
    }
}
