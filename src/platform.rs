/// Platform - Dependency injection container for the ambient ports.
///
/// Stateless ports are carried as `&'static` references, so the container
/// stays `Copy` and cheap to hand to every notifier.

use crate::ports::{ClockPort, LoggerPort};

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
