//! # unitsheet
//!
//! Player unit definition export library - YAML loading, field extraction,
//! and CSV writing.
//!
//! A unit file is a YAML mapping from unit name to unit definition. Units set
//! to `null` are disabled and skipped. Every other unit becomes one CSV row
//! with the columns `name, tier, health, cost, description`.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = unitsheet::export(
//!     Path::new("assets/data/player.yaml"),
//!     Path::new("exports/player.csv"),
//!     &unitsheet::ExportOptions::default(),
//! )?;
//! println!("Wrote {} units", summary.rows);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod export;
pub mod extract;
pub mod loader;
pub mod options;
pub mod tags;
pub mod writer;

// Re-export commonly used items
#[doc(inline)]
pub use document::{Components, Document, UnitEntry, UnitRecord};
#[doc(inline)]
pub use error::ExportError;
#[doc(inline)]
pub use export::{export, ExportSummary};
#[doc(inline)]
pub use extract::{extract, extract_all, ExportRow, COLUMNS, HEALTH_UNAVAILABLE};
#[doc(inline)]
pub use options::{ExportOptions, LineEnding};
#[doc(inline)]
pub use tags::{TagPolicy, UnitTag};
