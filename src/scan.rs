//! Source batch enumeration.
//!
//! Lists the candidate images of a source directory in a stable order so
//! that repeated runs over an unchanged batch admit files identically.
//! Only the extensions the collection accepts are considered (JPEG under
//! its two spellings, any letter case); everything else in the directory
//! is ignored. An empty result is not an error — it just means there is
//! nothing to import.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("source directory does not exist: {0}")]
    Missing(PathBuf),
    #[error("source path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const ACCEPTED_EXTENSIONS: &[&str] = &["jpeg", "jpg"];

/// Return the source files to import, sorted lexicographically by name.
///
/// The sort is on the raw file name bytes, giving a total, deterministic
/// admission order. Subdirectories are not descended into; a batch is a
/// flat drop of files.
pub fn enumerate(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::Missing(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| is_accepted(p))
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|a| ext.eq_ignore_ascii_case(a))
        })
}
