//! CLI wiring: argument parsing, logging setup, and command dispatch.

mod args;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::cli::args::{Cli, Commands};

/// Parses arguments and runs the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Index(cmd) => commands::index::run(&cmd),
        Commands::Extract(cmd) => commands::extract::run(&cmd),
        Commands::Search(cmd) => commands::search::run(&cmd),
    }
}

/// Installs the log subscriber on stderr, keeping stdout for results.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
