/// WASM adapters - implementations using browser APIs.

pub mod clock;
pub mod console_logger;
pub mod dom_host;
pub mod timers;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use dom_host::DomAlertHost;
pub use timers::BrowserTimers;
