//! Errors for the fallible edges of rendering: JSON text and file input.
//! The formatters themselves never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Record error: {0}")]
    Record(#[from] tempo_records::RecordError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown record kind: {0}")]
    UnknownKind(String),
}

/// Result type alias for rendering operations.
pub type FormatResult<T> = Result<T, FormatError>;
