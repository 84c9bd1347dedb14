//! Deferred PNG encoding.
//!
//! Drawing is synchronous; only the final surface-to-bytes step runs on a
//! worker thread. The job owns the finished surface, so later changes to
//! the palette cannot leak into a pending encode.

use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::{png, RenderError, RenderResult, Surface};

/// One-shot handle to an in-flight PNG encode.
///
/// Yields the full byte stream or a [`RenderError`]; there are no partial
/// results and no cancellation.
#[derive(Debug)]
pub struct EncodeJob {
    handle: JoinHandle<RenderResult<Vec<u8>>>,
}

impl EncodeJob {
    /// Starts encoding `surface` on a worker thread.
    pub fn spawn(surface: Surface) -> RenderResult<Self> {
        let handle = thread::Builder::new()
            .name("swatch-encode".into())
            .spawn(move || {
                let bytes = png::encode(&surface)?;
                debug!(bytes = bytes.len(), "PNG encode finished");
                Ok(bytes)
            })
            .map_err(|e| RenderError::Worker(e.to_string()))?;
        Ok(Self { handle })
    }

    /// Blocks until the encode completes.
    pub fn wait(self) -> RenderResult<Vec<u8>> {
        self.handle
            .join()
            .map_err(|_| RenderError::Worker("encode thread panicked".into()))?
    }
}
