//! Error types for repair-quote
//!
//! The wizard controller itself never fails; these errors cover the shell
//! around it: configuration, the submission log, exports and the terminal.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    /// Settings could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// A line of the submission log is not a valid submission
    #[error("Submission log line {line} is corrupt: {reason}")]
    CorruptLog { line: usize, reason: String },

    /// Invalid command line input
    #[error("Validation error: {0}")]
    Validation(String),

    /// An id that is not in one of the catalogs
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    #[error("Export error: {0}")]
    Export(String),

    #[error("Terminal error: {0}")]
    Tui(String),
}

impl QuoteError {
    fn not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    pub fn device_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Device", identifier)
    }

    pub fn issue_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Issue", identifier)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for QuoteError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for repair-quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;
