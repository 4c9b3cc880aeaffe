//! The load, extract, write pipeline.

use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::extract::extract_all;
use crate::loader::load;
use crate::options::ExportOptions;
use crate::writer::write_rows;

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output: PathBuf,
    /// Rows written, not counting the header
    pub rows: usize,
    /// Units skipped because they were set to `null`
    pub disabled: usize,
}

/// Export the units in `input` to a CSV file at `output`.
///
/// Nothing is created at `output` unless `input` loads successfully.
pub fn export(
    input: &Path,
    output: &Path,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    let document = load(input, options.tags)?;
    let rows = extract_all(&document);
    write_rows(output, &rows, options)?;

    Ok(ExportSummary {
        output: output.to_path_buf(),
        rows: rows.len(),
        disabled: document.disabled_count(),
    })
}
