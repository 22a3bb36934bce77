//! Command implementations for all frontier commands

use crate::cli::{Commands, ValidateCommands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{generate, info, render, search, validate};
use frontier_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Info(args) => info::execute(ctx, args),
            Commands::Bfs(args) => search::execute_bfs(ctx, args),
            Commands::Ucs(args) => search::execute_ucs(ctx, args),
            Commands::Validate(sub) => sub.command.execute(ctx),
            Commands::Generate(args) => generate::execute(ctx, args),
            Commands::Render(args) => render::execute(ctx, args),
        }
    }
}

impl Command for ValidateCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            ValidateCommands::Bfs(args) => validate::execute_bfs(ctx, args),
            ValidateCommands::Ucs(args) => validate::execute_ucs(ctx, args),
        }
    }
}
