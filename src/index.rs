//! Persistent TOML index of admitted files.
//!
//! The index is an append-only record of every filename ever admitted into
//! the collection, one `{ file = "..." }` entry per item under the top-level
//! `entries` array. The file may carry unrelated top-level keys (site
//! metadata, captions, whatever the rest of the pipeline keeps there) —
//! a merge loads the whole document, appends, and writes it all back, so
//! everything it doesn't understand survives verbatim as data.
//!
//! A missing index starts empty. An existing but unparsable index also
//! starts empty — prior entries are lost, which is deliberate but never
//! silent: the load failure travels in [`MergeReport::load_warning`] and is
//! surfaced to the operator. The admitted files on disk remain the ground
//! truth either way.

use std::path::Path;
use thiserror::Error;
use toml::Table;
use toml::Value;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("index key 'entries' exists but is not an array")]
    EntriesNotArray,
    #[error("failed to serialize index: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Key of the entry list within the index document.
const ENTRIES_KEY: &str = "entries";
/// Key of the filename within each entry.
const FILE_KEY: &str = "file";

/// Outcome of a merge, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Entries in the document after the merge.
    pub entries_total: usize,
    /// Entries appended by this merge.
    pub appended: usize,
    /// Set when an existing index could not be parsed and was replaced
    /// by an empty document.
    pub load_warning: Option<String>,
}

/// Append `admitted` filenames to the index at `path` and write it back.
///
/// Entries are appended in slice order after all existing entries. The
/// write is atomic: the document is serialized to a sibling temporary file
/// and renamed over the target, so a crash mid-write can't leave a
/// truncated index.
pub fn merge(path: &Path, admitted: &[String]) -> Result<MergeReport, IndexError> {
    let (mut doc, load_warning) = load_or_empty(path)?;

    let entries = doc
        .entry(ENTRIES_KEY.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    let entries = entries.as_array_mut().ok_or(IndexError::EntriesNotArray)?;

    for file in admitted {
        let mut entry = Table::new();
        entry.insert(FILE_KEY.to_string(), Value::String(file.clone()));
        entries.push(Value::Table(entry));
    }
    let entries_total = entries.len();

    write_atomic(path, &toml::to_string(&doc)?)?;

    Ok(MergeReport {
        entries_total,
        appended: admitted.len(),
        load_warning,
    })
}

/// Load the existing document, or an empty one when the file is missing.
/// Parse failures fall back to empty with a warning.
fn load_or_empty(path: &Path) -> Result<(Table, Option<String>), IndexError> {
    if !path.exists() {
        return Ok((Table::new(), None));
    }

    let content = std::fs::read_to_string(path)?;
    match content.parse::<Table>() {
        Ok(table) => Ok((table, None)),
        Err(e) => Ok((
            Table::new(),
            Some(format!(
                "could not parse existing index {}: {e}; starting over",
                path.display()
            )),
        )),
    }
}

/// Write via temp file + rename in the same directory.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)
}
