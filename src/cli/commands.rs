//! Main CLI commands enum

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use super::args::{GraphSourceArgs, PairArgs};
use super::parse::parse_node_count;

/// Top-level frontier commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the shape of a graph
    Info(InfoArgs),

    /// Compare lazy and eager BFS on one pair
    Bfs(SearchArgs),

    /// Compare both UCS variants with the backtracking oracle on one pair
    Ucs(SearchArgs),

    /// Run a validation protocol
    Validate(ValidateSubcommand),

    /// Print a random connected graph as an edge list
    Generate(GenerateArgs),

    /// Print a graph (and optionally a search tree) as Graphviz DOT
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub source: GraphSourceArgs,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub pair: PairArgs,

    #[command(flatten)]
    pub source: GraphSourceArgs,
}

#[derive(Args, Debug)]
pub struct ValidateSubcommand {
    #[command(subcommand)]
    pub command: ValidateCommands,
}

/// Validation protocols
#[derive(Subcommand, Debug)]
pub enum ValidateCommands {
    /// Lazy and eager BFS must return identical paths on random pairs
    Bfs(ValidateBfsArgs),

    /// Re-expanding UCS must match the oracle's cost on every pair
    Ucs(ValidateUcsArgs),
}

#[derive(Args, Debug)]
pub struct ValidateBfsArgs {
    /// Nodes in the random graph
    #[arg(long, value_parser = parse_node_count)]
    pub nodes: Option<u32>,

    /// Edges added on top of the spanning tree
    #[arg(long)]
    pub extra_edges: Option<usize>,

    /// Random (start, goal) trials
    #[arg(long)]
    pub trials: Option<usize>,

    /// Seed for graph and trials
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct ValidateUcsArgs {
    /// Weighted edge-list file (cube fixture when absent)
    #[arg(long, short = 'g')]
    pub graph: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of nodes
    #[arg(long, value_parser = parse_node_count)]
    pub nodes: u32,

    /// Edges added on top of the spanning tree (default: 3 * nodes)
    #[arg(long)]
    pub extra_edges: Option<usize>,

    /// Draw weights uniformly from 1..=MAX_WEIGHT
    #[arg(long, default_value_t = 1)]
    pub max_weight: u64,

    #[arg(long)]
    pub seed: Option<u64>,
}

/// Search drawn by `render`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Ucs,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub pair: PairArgs,

    #[command(flatten)]
    pub source: GraphSourceArgs,

    /// Highlight this search's tree and path (pair defaults to the [ucs] config)
    #[arg(long, value_enum)]
    pub algorithm: Option<Algorithm>,
}
