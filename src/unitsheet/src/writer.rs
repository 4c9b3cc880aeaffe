//! CSV output.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::ExportError;
use crate::extract::{ExportRow, COLUMNS};
use crate::options::ExportOptions;

/// Write the header and `rows` to `path`, creating parent directories first.
///
/// The header is written even when there are no rows. The file is flushed
/// before returning; on error it is closed with whatever was written so far.
pub fn write_rows(
    path: &Path,
    rows: &[ExportRow],
    options: &ExportOptions,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ExportError::write(path, e))?;
    }

    let file = fs::File::create(path).map_err(|e| ExportError::write(path, e))?;
    write_to(file, rows, options).map_err(|e| ExportError::write(path, e))?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "wrote csv");
    Ok(())
}

/// Write the header and `rows` to any writer
pub fn write_to<W: io::Write>(
    out: W,
    rows: &[ExportRow],
    options: &ExportOptions,
) -> io::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .terminator(options.line_ending.into())
        .from_writer(out);

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()
}
