use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    InvalidAmount(String),
    InvalidDate(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidAmount(msg) => write!(f, "Invalid amount: {msg}"),
            FormatError::InvalidDate(msg) => write!(f, "Invalid date: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

impl FormatError {
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        FormatError::InvalidAmount(message.into())
    }

    pub fn invalid_date(message: impl Into<String>) -> Self {
        FormatError::InvalidDate(message.into())
    }
}
