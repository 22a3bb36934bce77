//! `frontier validate` - the two validation protocols
//!
//! - `validate bfs`: random connected graph, random pairs, lazy vs eager BFS
//! - `validate ucs`: every pair of a weighted graph, re-expanding UCS vs oracle
//!
//! Flags override `frontier.toml`, which overrides the built-in defaults.
//! A failed check surfaces as an error and a non-zero exit.

mod human;
mod json;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::cli::commands::{ValidateBfsArgs, ValidateUcsArgs};
use crate::cli::{GraphSourceArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::source::resolve_graph;
use frontier_core::error::Result;
use frontier_core::graph::RandomGraphBuilder;
use frontier_core::harness::{validate_bfs, validate_ucs};

/// Effective BFS protocol settings after merging flags and config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsSettings {
    pub nodes: u32,
    pub extra_edges: usize,
    pub trials: usize,
    pub seed: u64,
}

impl BfsSettings {
    fn resolve(ctx: &CommandContext, args: &ValidateBfsArgs) -> Self {
        let config = &ctx.config.bfs;
        let nodes = args.nodes.unwrap_or(config.nodes);
        Self {
            nodes,
            extra_edges: args
                .extra_edges
                .or(config.extra_edges)
                .unwrap_or(3 * nodes as usize),
            trials: args.trials.unwrap_or(config.trials),
            seed: args.seed.or(config.seed).unwrap_or_else(rand::random),
        }
    }
}

pub fn execute_bfs(ctx: &CommandContext, args: &ValidateBfsArgs) -> Result<()> {
    let settings = BfsSettings::resolve(ctx, args);
    info!(?settings, "validate bfs");

    let start = Instant::now();
    let graph = RandomGraphBuilder::new(settings.nodes)
        .extra_edges(settings.extra_edges)
        .seed(settings.seed)
        .build()?;
    frontier_core::trace_time!(start, "build_graph", edges = graph.edge_count());

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let report = validate_bfs(&graph, settings.trials, &mut rng)?;
    frontier_core::trace_time!(start, "validate_bfs");

    match ctx.cli.format {
        OutputFormat::Json => json::output_bfs(&settings, &report),
        OutputFormat::Human => {
            human::output_bfs(ctx.cli, &settings, &report);
            Ok(())
        }
    }
}

pub fn execute_ucs(ctx: &CommandContext, args: &ValidateUcsArgs) -> Result<()> {
    let source = GraphSourceArgs {
        graph: args.graph.clone(),
        ..Default::default()
    };
    let loaded = resolve_graph(&source, ctx.config.ucs.graph.as_deref())?;

    let start = Instant::now();
    let report = validate_ucs(&loaded.graph)?;
    frontier_core::trace_time!(start, "validate_ucs", pairs = report.pairs);

    match ctx.cli.format {
        OutputFormat::Json => json::output_ucs(&loaded.name, &report),
        OutputFormat::Human => {
            human::output_ucs(ctx.cli, &loaded.name, &report);
            Ok(())
        }
    }
}
