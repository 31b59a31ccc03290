use thiserror::Error;

/// Malformed hex color constant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("hex color must be 6 characters, got {0}")]
    Length(usize),
    #[error("incorrect hex character {digit:?} at index {index}")]
    InvalidDigit { digit: char, index: usize },
}

/// Invalid value supplied through the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be an unsigned integer, got {value:?}")]
    NotANumber { key: &'static str, value: String },
    #[error("{0} must be positive")]
    NotPositive(&'static str),
}

/// A draw call that the backend rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{op} failed: {reason}")]
    Draw { op: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("failed to create window: {0}")]
    Create(String),
}
