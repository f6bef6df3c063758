use std::fmt;

#[derive(Debug, Clone)]
pub enum AlertError {
    HostUnavailable(String),
    ContainerNotFound(String),
    MountFailed(String),
    UnknownSeverity(String),
}

impl fmt::Display for AlertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertError::HostUnavailable(msg) => write!(f, "Host unavailable: {msg}"),
            AlertError::ContainerNotFound(selector) => {
                write!(f, "Alert container not found for selector {selector:?}")
            }
            AlertError::MountFailed(msg) => write!(f, "Failed to mount alert: {msg}"),
            AlertError::UnknownSeverity(raw) => write!(
                f,
                "Unknown severity {raw:?}, expected one of info, success, warning, danger"
            ),
        }
    }
}

impl std::error::Error for AlertError {}

impl AlertError {
    pub fn host_unavailable(message: impl Into<String>) -> Self {
        AlertError::HostUnavailable(message.into())
    }

    pub fn container_not_found(selector: impl Into<String>) -> Self {
        AlertError::ContainerNotFound(selector.into())
    }

    pub fn mount_failed(message: impl Into<String>) -> Self {
        AlertError::MountFailed(message.into())
    }

    pub fn unknown_severity(raw: impl Into<String>) -> Self {
        AlertError::UnknownSeverity(raw.into())
    }
}
