//! CLI argument parsing for frontier
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod commands;
pub mod output;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

pub use args::{GraphSourceArgs, PairArgs};
pub use commands::{Algorithm, Commands, ValidateCommands};
pub use output::OutputFormat;

/// Frontier - BFS and UCS frontier disciplines checked against an exhaustive oracle
#[derive(Parser, Debug)]
#[command(name = "frontier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events (search summaries, phase timings)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log filter, e.g. `trace` or `frontier_core::harness=debug`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Experiment config file (defaults to ./frontier.toml when present)
    #[arg(long, global = true, env = "FRONTIER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
