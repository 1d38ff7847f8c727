//! # Photo Intake
//!
//! A batch importer for photo collections. Each run copies a source batch of
//! JPEGs into a destination collection, renaming every file to the next free
//! serial in the collection's filename series (`IMG-0001.jpeg`, ...),
//! optionally stamping the photographer into EXIF, deriving a bounded
//! preview per image, and appending the admitted names to a TOML index.
//!
//! # Architecture: One Sequential Pass
//!
//! ```text
//! 1. Discover    images/            →  highest serial in use
//! 2. Enumerate   batch/             →  sorted source list
//! 3. Admit       copy + stamp + preview, one serial per item
//! 4. Merge       admitted names     →  index.toml
//! ```
//!
//! The destination's own filenames are the counter: the next serial is
//! re-derived by scanning `images/` at the start of every run, so there is
//! no hidden state to drift and repeated imports continue numbering where
//! the previous batch stopped. Execution is strictly sequential — the
//! serial namespace and the index are shared state, and the tool assumes a
//! single operator running one import at a time.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`allocator`] | Scans the destination for the highest serial in use |
//! | [`scan`] | Enumerates the source batch in stable, sorted order |
//! | [`exif`] | Stamps the Artist tag into a JPEG's APP1 segment in place |
//! | [`imaging`] | Bounded preview generation: fit math, backend trait, JPEG encode |
//! | [`index`] | Loads, appends to, and atomically rewrites the TOML index |
//! | [`pipeline`] | The admission loop tying the stages together |
//! | [`naming`] | The `PREFIX-NNNN.jpeg` filename convention |
//! | [`config`] | Optional `import.toml` in the destination root |
//! | [`output`] | CLI report rendering |
//!
//! # Failure Containment
//!
//! The copy *is* the admission: a copy failure aborts the run. Everything
//! layered on top — EXIF stamping, preview generation, the index merge — is
//! best-effort: failures are contained to the affected item (or to the
//! merge stage) and reported as warnings, never unwinding admissions that
//! already happened. A batch with a corrupt frame still imports the other
//! frames.

pub mod allocator;
pub mod config;
pub mod exif;
pub mod imaging;
pub mod index;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
