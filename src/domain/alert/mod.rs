pub mod error;
pub mod operations;
pub mod types;

pub use error::AlertError;
pub use operations::Notifier;
pub use types::{
    Alert, AlertId, NotifierConfig, Severity, DEFAULT_AUTO_DISMISS_MS, DEFAULT_CONTAINER_SELECTOR,
};
