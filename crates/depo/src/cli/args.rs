//! Clap argument definitions for the `depo` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "depo")]
#[command(about = "Testimony search over witness depositions")]
pub struct Cli {
    /// Verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `depo` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract and index a witness corpus into a packed blob
    Index(IndexCommand),

    /// Show the testimony items extracted from one witness file
    Extract(ExtractCommand),

    /// Query a packed index
    Search(SearchCommand),
}

/// Arguments for `depo index`.
#[derive(Args, Debug, Clone)]
pub struct IndexCommand {
    /// Directory of witness corpus files (NN_Name.json)
    #[arg(long)]
    pub corpus: PathBuf,

    /// Output path for the packed index blob
    #[arg(long)]
    pub out: PathBuf,
}

/// Arguments for `depo extract`.
#[derive(Args, Debug, Clone)]
pub struct ExtractCommand {
    /// Witness corpus file
    pub file: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `depo search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query text; wrap in double quotes for exact-phrase matching
    pub query: String,

    /// Data directory containing the packed index blob
    #[arg(long)]
    pub data: PathBuf,

    /// Blob path relative to the data directory
    #[arg(long, default_value = "witnesses/full-index.bin")]
    pub index: String,

    /// Maximum results to display
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
