//! High-level preview operations.
//!
//! Combines the pure fit calculation with backend execution: callers hand
//! over a source, a target directory, and the admitted file name, and get
//! back the written preview path.

use super::backend::{BackendError, ImageBackend};
use super::calculations::fit_within;
use super::params::{PreviewParams, Quality};
use std::path::{Path, PathBuf};

/// Configuration for preview generation.
///
/// Defaults match the collection layout previews are made for: a
/// three-wide grid of 400×300 cells at JPEG quality 85.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: Quality,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_width: 400,
            max_height: 300,
            quality: Quality::default(),
        }
    }
}

/// Create a bounded preview of `source` as `preview_dir/file_name`.
///
/// The preview carries the admitted name, not the source name, so the
/// full-size file and its preview pair up across the two directories.
/// Aspect ratio is preserved; sources already within bounds are re-encoded
/// at their original size (no upscaling, no cropping).
pub fn create_preview(
    backend: &impl ImageBackend,
    source: &Path,
    preview_dir: &Path,
    file_name: &str,
    config: &PreviewConfig,
) -> Result<PathBuf, BackendError> {
    let dims = backend.identify(source)?;
    let (width, height) = fit_within(
        (dims.width, dims.height),
        (config.max_width, config.max_height),
    );

    let output = preview_dir.join(file_name);
    backend.preview(&PreviewParams {
        source: source.to_path_buf(),
        output: output.clone(),
        width,
        height,
        quality: config.quality,
    })?;

    Ok(output)
}
