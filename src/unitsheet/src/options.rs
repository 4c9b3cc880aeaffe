//! Export settings.

use crate::tags::TagPolicy;

/// Record terminator used by the CSV writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl From<LineEnding> for csv::Terminator {
    fn from(ending: LineEnding) -> Self {
        match ending {
            LineEnding::Crlf => csv::Terminator::CRLF,
            LineEnding::Lf => csv::Terminator::Any(b'\n'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Field delimiter, a single ASCII byte
    pub delimiter: u8,
    pub line_ending: LineEnding,
    pub tags: TagPolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            delimiter: b',',
            line_ending: LineEnding::default(),
            tags: TagPolicy::default(),
        }
    }
}
