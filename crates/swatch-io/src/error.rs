//! Error types for palette I/O.

use std::io;
use thiserror::Error;

/// Palette decode/encode error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input is not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is not valid UTF-8 text.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Well-formed document that is not a palette of the expected kind.
    #[error("format error: {0}")]
    Format(String),

    /// Unknown palette format name or extension.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for palette I/O.
pub type IoResult<T> = Result<T, IoError>;
