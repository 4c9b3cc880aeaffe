//! Export command handler

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use unitsheet::{ExportOptions, LineEnding, TagPolicy};

use crate::cli::Cli;

/// Output path used when none is given: the input with a `.csv` extension
pub fn default_output(input: &Path) -> PathBuf {
    input.with_extension("csv")
}

fn options_from(cli: &Cli) -> ExportOptions {
    ExportOptions {
        delimiter: cli.delimiter,
        line_ending: if cli.lf {
            LineEnding::Lf
        } else {
            LineEnding::Crlf
        },
        tags: if cli.allow_unknown_tags {
            TagPolicy::Lenient
        } else {
            TagPolicy::Strict
        },
    }
}

/// Run the export described by the command line
pub fn handle(cli: &Cli) -> Result<()> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input));

    if output == cli.input {
        bail!(
            "Output path {} is the input file; pass an explicit OUTPUT",
            output.display()
        );
    }

    tracing::debug!(
        input = %cli.input.display(),
        output = %output.display(),
        "exporting units"
    );

    let summary = unitsheet::export(&cli.input, &output, &options_from(cli))
        .with_context(|| format!("Failed to export {}", cli.input.display()))?;

    if !cli.quiet {
        println!(
            "Successfully wrote {} units to {}",
            summary.rows,
            summary.output.display()
        );
        if summary.disabled > 0 {
            println!("  Skipped {} disabled units", summary.disabled);
        }
    }

    Ok(())
}
