//! `frontier bfs` / `frontier ucs` - single-pair comparisons
//!
//! - `bfs`: lazy and eager BFS, paths and insertion counts side by side
//! - `ucs`: both UCS variants plus the backtracking oracle, paths and costs

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::commands::SearchArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::source::{resolve_graph, resolve_pair};
use frontier_core::error::Result;
use frontier_core::harness::{compare_bfs, compare_ucs};

use self::format::{output_bfs_human, output_bfs_json, output_ucs_human, output_ucs_json};

/// Execute the bfs command
pub fn execute_bfs(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let start = Instant::now();
    let loaded = resolve_graph(&args.source, ctx.config.ucs.graph.as_deref())?;
    let (from, to) = resolve_pair(&args.pair, &ctx.config.ucs, &loaded.graph)?;

    let comparison = compare_bfs(&loaded.graph, from, to)?;
    if ctx.cli.verbose {
        debug!(elapsed = ?start.elapsed(), "compare_bfs");
    }

    match ctx.cli.format {
        OutputFormat::Json => output_bfs_json(&loaded, &comparison),
        OutputFormat::Human => {
            output_bfs_human(ctx.cli, &loaded, &comparison);
            Ok(())
        }
    }
}

/// Execute the ucs command
pub fn execute_ucs(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let start = Instant::now();
    let loaded = resolve_graph(&args.source, ctx.config.ucs.graph.as_deref())?;
    let (from, to) = resolve_pair(&args.pair, &ctx.config.ucs, &loaded.graph)?;

    let comparison = compare_ucs(&loaded.graph, from, to)?;
    if ctx.cli.verbose {
        debug!(elapsed = ?start.elapsed(), "compare_ucs");
    }

    match ctx.cli.format {
        OutputFormat::Json => output_ucs_json(&loaded, &comparison),
        OutputFormat::Human => {
            output_ucs_human(ctx.cli, &loaded, &comparison);
            Ok(())
        }
    }
}
