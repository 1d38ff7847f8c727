//! Parameter types for preview operations.
//!
//! These structs describe *what* to encode, not *how*: the interface between
//! [`operations`](super::operations) (which decides dimensions and naming)
//! and the [`backend`](super::backend) (which does the pixel work). The
//! split lets tests drive the orchestration against a mock backend.

use std::path::PathBuf;

/// Quality setting for lossy JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(85)
    }
}

/// Full specification of one preview encode.
///
/// `width`/`height` are the final output dimensions — the fit against the
/// preview bounds has already been computed by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}
