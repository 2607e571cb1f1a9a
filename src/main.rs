//! decisio - Decision evidence miner
//!
//! decisio provides:
//! - Manifest-driven reading of a project's historical files
//! - Heading-section extraction for Markdown documents
//! - Signal-line extraction for every other text format
//! - A single consolidated Markdown evidence report

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod extract;
mod flows;

fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "decisio=debug"
    } else {
        "decisio=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    cli::run(cli)
}
