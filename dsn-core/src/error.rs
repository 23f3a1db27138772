//! Error types for DSN parsing.
//!
//! Error messages never carry the input string. A DSN usually embeds a
//! password, so only the parser's own diagnostic is kept as context.

use thiserror::Error;

/// Main error type for dsn operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DsnError {
    /// The input could not be interpreted as a DSN
    #[error("invalid DSN format: {context}")]
    InvalidFormat { context: String },

    /// Logging or other process-level setup failed
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Convenience type alias for Results with DsnError
pub type Result<T> = std::result::Result<T, DsnError>;

impl DsnError {
    /// Creates a format error with the given context
    pub fn invalid_format(context: impl Into<String>) -> Self {
        Self::InvalidFormat {
            context: context.into(),
        }
    }

    /// Creates a format error from an underlying parser failure
    ///
    /// Only the error's message is kept; the error value itself is dropped.
    pub fn parse_failed<E>(error: &E) -> Self
    where
        E: std::error::Error,
    {
        Self::invalid_format(error.to_string())
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns true for [`DsnError::InvalidFormat`]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}
