mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    commands::export::handle(&cli)
}
