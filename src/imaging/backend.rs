//! Preview backend trait and shared types.
//!
//! [`ImageBackend`] defines the two operations the pipeline needs: identify
//! (header-only dimension read) and preview (decode, resize, encode). The
//! production implementation is [`RustBackend`](super::rust_backend::RustBackend);
//! tests use the recording [`MockBackend`](tests::MockBackend).

use super::params::PreviewParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for preview backends.
pub trait ImageBackend {
    /// Read image dimensions without decoding pixel data.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode, resize to the given dimensions, and encode the preview.
    fn preview(&self, params: &PreviewParams) -> Result<(), BackendError>;
}
