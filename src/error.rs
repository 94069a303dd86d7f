//! Error types for level generation and reporting.

use thiserror::Error;

/// Errors that can occur while building or reporting a level set.
#[derive(Error, Debug)]
pub enum LevelError {
    /// Invalid level count, growth constant or thickness table.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LevelError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type for level operations.
pub type Result<T> = std::result::Result<T, LevelError>;

/// Fail with a configuration error unless `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LevelError::configuration(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}
