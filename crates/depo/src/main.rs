//! Command-line interface for the depo testimony search tool.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    cli::run()
}
