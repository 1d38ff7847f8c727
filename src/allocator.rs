//! Serial allocation by destination scan.
//!
//! The next free serial is re-derived from the destination directory on every
//! run: the collection's filenames are the only counter state. This keeps the
//! property that destination content alone determines the next identifier —
//! there is no hidden counter file to fall out of sync, and re-running after
//! a partial batch picks up exactly where the admitted files left off.

use crate::naming;
use std::io;
use std::path::Path;

/// Return the highest serial in use for `prefix` under `dir`.
///
/// A missing directory and a directory with no matching names both yield 0
/// (the first admitted serial is then 1). Names that don't match the series
/// pattern are ignored, not errors. Only regular files are considered.
///
/// Read-only and deterministic: the same directory contents always produce
/// the same answer.
pub fn highest_serial(dir: &Path, prefix: &str) -> io::Result<u32> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut max = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if let Some(serial) = name.to_str().and_then(|n| naming::parse_serial(prefix, n)) {
            max = max.max(serial);
        }
    }

    Ok(max)
}
