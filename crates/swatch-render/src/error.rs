//! Error types for rasterization.

use thiserror::Error;

/// Rasterization error.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Requested surface is empty or exceeds the supported size.
    #[error("cannot create {width}x{height} surface: {reason}")]
    InvalidSurface {
        /// Requested width.
        width: u64,
        /// Requested height.
        height: u64,
        /// Why the size was refused.
        reason: String,
    },

    /// Pixel buffer could not be reserved.
    #[error("failed to allocate {bytes} bytes for surface")]
    Allocation {
        /// Requested size in bytes.
        bytes: usize,
    },

    /// PNG encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Deferred encode worker went away without a result.
    #[error("encode worker failed: {0}")]
    Worker(String),
}

/// Result type for rasterization.
pub type RenderResult<T> = Result<T, RenderError>;
