//! Command dispatch logic for frontier

use std::time::Instant;

use crate::cli::Cli;
use frontier_core::config::ExperimentConfig;
use frontier_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = ExperimentConfig::load(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    frontier_core::trace_time!(ctx.start, "command");
    result
}
