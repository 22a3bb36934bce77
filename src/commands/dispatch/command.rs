//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use frontier_core::config::ExperimentConfig;
use frontier_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a ExperimentConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a ExperimentConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("frontier {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("BFS and UCS frontier disciplines checked against an exhaustive oracle.");
        println!();
        println!("Run `frontier --help` for usage information.");
        Ok(())
    }
}
