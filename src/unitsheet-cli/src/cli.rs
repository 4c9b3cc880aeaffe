//! CLI argument definitions for unitsheet

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "unitsheet")]
#[command(about = "Export player unit definitions from YAML to CSV", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the unit definition file (e.g. player.yaml)
    pub input: PathBuf,

    /// Path of the CSV file to write (defaults to INPUT with a .csv extension)
    pub output: Option<PathBuf>,

    /// Field delimiter, a single ASCII character
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// End rows with \n instead of \r\n
    #[arg(long)]
    pub lf: bool,

    /// Collapse tags other than !Basic and !FoodProducer instead of failing
    #[arg(long)]
    pub allow_unknown_tags: bool,

    /// Log each pipeline stage to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not print the summary line on success
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() && !matches!(*b, b'"' | b'\r' | b'\n') => Ok(*b),
        [_] => Err(format!("'{}' cannot be used as a delimiter", s.escape_default())),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{}'",
            s.escape_default()
        )),
    }
}
