//! draftindex CLI: builds `index.json` for a year of markdown drafts.
//!
//! Scans `<base>/year-drafts/<year>/`, reads each document's header block,
//! and writes an ordered listing next to the drafts.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
