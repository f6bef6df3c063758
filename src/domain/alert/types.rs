use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::AlertError;

/// How long a banner stays on screen without user interaction.
pub const DEFAULT_AUTO_DISMISS_MS: u32 = 5000;

/// The page region alerts are prepended into when no selector is configured.
pub const DEFAULT_CONTAINER_SELECTOR: &str = "main";

/// Visual category of an alert banner, mapped one-to-one onto the
/// `alert-*` stylesheet classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "alert-info",
            Severity::Success => "alert-success",
            Severity::Warning => "alert-warning",
            Severity::Danger => "alert-danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = AlertError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            "danger" => Ok(Severity::Danger),
            _ => Err(AlertError::unknown_severity(raw)),
        }
    }
}

/// Identity of a mounted alert; keys the pending-timer table and the host's
/// mounted-element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    pub fn new(value: u64) -> Self {
        AlertId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transient user-facing message. Lives in the host container until its
/// timer fires or the user dismisses it; never persisted.
#[derive(Debug, Clone)]
pub struct Alert {
    pub id: AlertId,
    /// Rendered as markup, not escaped. Callers sanitize untrusted input.
    pub message: String,
    pub severity: Severity,
    pub created_at_ms: f64,
}

/// Notifier settings, deserializable from a plain JS object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotifierConfig {
    pub container_selector: String,
    pub auto_dismiss_ms: u32,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            auto_dismiss_ms: DEFAULT_AUTO_DISMISS_MS,
        }
    }
}
