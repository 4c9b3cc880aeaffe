//! Errors reported by the export pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures of a single export run.
///
/// Each variant belongs to exactly one pipeline stage: the loader reports
/// [`InputNotFound`](Self::InputNotFound) and [`Parse`](Self::Parse), the
/// writer reports [`Write`](Self::Write).
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Input file not found at {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse YAML file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to write CSV file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub(crate) fn parse(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ExportError::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        ExportError::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}
