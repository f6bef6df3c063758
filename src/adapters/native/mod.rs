/// Native adapters - implementations for native Rust (non-WASM).
///
/// The manual timer queue and the in-memory host exist so the alert
/// lifecycle can be exercised without a live document or real elapsed time.

pub mod clock;
pub mod console_logger;
pub mod manual_timers;
pub mod memory_host;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use manual_timers::ManualTimers;
pub use memory_host::MemoryAlertHost;
