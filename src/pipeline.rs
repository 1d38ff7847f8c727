//! The sequential admission pipeline.
//!
//! One run is a single pass: scan the destination for the highest serial in
//! use, enumerate the source batch in stable order, then admit each item —
//! copy under the next serial, optionally stamp the photographer into its
//! EXIF, always derive a preview — and finally merge the admitted names into
//! the persistent index.
//!
//! ## Failure policy
//!
//! The copy is the admission itself and has no local recovery: a failed copy
//! aborts the run. Stamping and preview generation are best-effort
//! enhancements — each failure is contained to its item and recorded as a
//! warning on that item's [`ItemOutcome`], never aborting the batch. Index
//! failures are contained to the merge stage: the files on disk stay
//! admitted even when the index update does not persist.
//!
//! Execution is strictly sequential. The serial namespace and the index are
//! shared state with no locking; one operator runs one import at a time
//! against a given destination.

use crate::allocator;
use crate::config::ImportConfig;
use crate::exif;
use crate::imaging::{self, ImageBackend, PreviewConfig, Quality};
use crate::index::{self, MergeReport};
use crate::naming;
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Subdirectory of the destination holding admitted full-size files.
pub const IMAGES_SUBDIR: &str = "images";
/// Subdirectory of the destination holding previews.
pub const PREVIEWS_SUBDIR: &str = "thumbs";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to copy {source_name} to {dest}: {cause}")]
    Copy {
        source_name: String,
        dest: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

/// What to import, where to, and the optional extras.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Stamped into each admitted file's EXIF Artist tag when set.
    pub photographer: Option<String>,
    /// Index document to merge admitted names into, when set.
    pub index_file: Option<PathBuf>,
}

/// Per-item result: the admission itself plus any enhancement warnings.
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    pub source_name: String,
    pub admitted_name: String,
    pub serial: u32,
    pub stamp_warning: Option<String>,
    pub preview_warning: Option<String>,
}

impl ItemOutcome {
    pub fn is_clean(&self) -> bool {
        self.stamp_warning.is_none() && self.preview_warning.is_none()
    }
}

/// Outcome of a whole run, for the caller to render.
#[derive(Debug)]
pub struct ImportReport {
    /// Highest serial already in the destination when the run started.
    pub base_serial: u32,
    pub items: Vec<ItemOutcome>,
    /// Set when an index merge ran.
    pub index: Option<MergeReport>,
    /// Set when the index merge failed (files stay admitted regardless).
    pub index_warning: Option<String>,
}

impl ImportReport {
    pub fn admitted_count(&self) -> usize {
        self.items.len()
    }

    pub fn warning_count(&self) -> usize {
        let item_warnings: usize = self
            .items
            .iter()
            .map(|i| {
                usize::from(i.stamp_warning.is_some()) + usize::from(i.preview_warning.is_some())
            })
            .sum();
        item_warnings
            + usize::from(self.index_warning.is_some())
            + usize::from(
                self.index
                    .as_ref()
                    .is_some_and(|m| m.load_warning.is_some()),
            )
    }
}

/// Run one import pass.
///
/// Serials are assigned in enumeration order, contiguously from one past
/// the destination's highest existing serial. An empty source batch is a
/// successful run with zero admissions (and no index merge).
pub fn run(
    backend: &impl ImageBackend,
    opts: &ImportOptions,
    config: &ImportConfig,
) -> Result<ImportReport, ImportError> {
    let images_dir = opts.dest.join(IMAGES_SUBDIR);
    let previews_dir = opts.dest.join(PREVIEWS_SUBDIR);
    let prefix = &config.series.prefix;

    let base_serial = allocator::highest_serial(&images_dir, prefix)?;
    let sources = scan::enumerate(&opts.source)?;

    let preview_config = PreviewConfig {
        max_width: config.previews.max_width,
        max_height: config.previews.max_height,
        quality: Quality::new(config.previews.quality),
    };

    let mut items = Vec::with_capacity(sources.len());
    let mut serial = base_serial;

    for source in &sources {
        serial += 1;
        let item = admit(
            backend,
            source,
            &images_dir,
            &previews_dir,
            serial,
            prefix,
            opts.photographer.as_deref(),
            &preview_config,
        )?;
        items.push(item);
    }

    let (index, index_warning) = match &opts.index_file {
        Some(path) if !items.is_empty() => {
            let admitted: Vec<String> = items.iter().map(|i| i.admitted_name.clone()).collect();
            match index::merge(path, &admitted) {
                Ok(report) => (Some(report), None),
                Err(e) => (
                    None,
                    Some(format!("could not update index {}: {e}", path.display())),
                ),
            }
        }
        _ => (None, None),
    };

    Ok(ImportReport {
        base_serial,
        items,
        index,
        index_warning,
    })
}

/// Admit one item: copy (fatal on failure), then stamp and preview
/// (each contained to a warning).
#[allow(clippy::too_many_arguments)]
fn admit(
    backend: &impl ImageBackend,
    source: &Path,
    images_dir: &Path,
    previews_dir: &Path,
    serial: u32,
    prefix: &str,
    photographer: Option<&str>,
    preview_config: &PreviewConfig,
) -> Result<ItemOutcome, ImportError> {
    let admitted_name = naming::format_serial(prefix, serial);
    let dest = images_dir.join(&admitted_name);
    let source_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());

    std::fs::copy(source, &dest).map_err(|cause| ImportError::Copy {
        source_name: source_name.clone(),
        dest: dest.clone(),
        cause,
    })?;

    let stamp_warning = photographer.and_then(|artist| {
        exif::stamp_artist(&dest, artist)
            .err()
            .map(|e| format!("could not update EXIF data for {admitted_name}: {e}"))
    });

    // The preview decodes the source, not the freshly stamped copy.
    let preview_warning = imaging::create_preview(
        backend,
        source,
        previews_dir,
        &admitted_name,
        preview_config,
    )
    .err()
    .map(|e| format!("could not create preview for {source_name}: {e}"));

    Ok(ItemOutcome {
        source_name,
        admitted_name,
        serial,
        stamp_warning,
        preview_warning,
    })
}
