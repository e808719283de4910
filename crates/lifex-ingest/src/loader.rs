//! Format dispatch: file suffix to loader implementation.
//!
//! New formats are added by appending a `(suffix, reader)` pair to
//! [`READERS`]; existing loaders never change for that.

use std::path::Path;

use tracing::debug;

use lifex_model::{PipelineError, RawTable, Result};

use crate::delimited::{CsvReader, TsvReader};
use crate::zipped_json::ZippedJsonReader;

/// A storage encoding that can produce a [`RawTable`].
///
/// Implementations are stateless: every call re-reads from disk.
pub trait SourceReader: Sync + std::fmt::Debug {
    fn load(&self, path: &Path) -> Result<RawTable>;
}

/// Suffix lookup table. Suffixes are lowercase without the leading dot.
static READERS: &[(&str, &'static dyn SourceReader)] = &[
    ("tsv", &TsvReader),
    ("csv", &CsvReader),
    ("zip", &ZippedJsonReader),
];

/// All supported suffixes in registration order, dot-prefixed, for error
/// messages: `.tsv, .csv, .zip`.
pub fn supported_extensions() -> String {
    let listed: Vec<String> = READERS
        .iter()
        .map(|(suffix, _)| format!(".{suffix}"))
        .collect();
    listed.join(", ")
}

/// Returns the loader registered for the path's suffix, case-insensitively.
pub fn reader_for(path: &Path) -> Result<&'static dyn SourceReader> {
    let extension = path
        .extension()
        .and_then(|suffix| suffix.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    READERS
        .iter()
        .find(|(suffix, _)| *suffix == extension)
        .map(|(_, reader)| *reader)
        .ok_or_else(|| PipelineError::UnsupportedFormat {
            extension: format!(".{extension}"),
            supported: supported_extensions(),
        })
}

/// Loads a raw table from `path`, dispatching on the file suffix.
pub fn load_table(path: &Path) -> Result<RawTable> {
    let reader = reader_for(path)?;
    let table = reader.load(path)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded raw table"
    );
    Ok(table)
}
