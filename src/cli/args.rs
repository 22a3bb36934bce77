use std::path::PathBuf;

use clap::Args;

use super::parse::{parse_node_count, parse_node_id};
use frontier_core::graph::NodeId;

/// Where a command gets its graph from
#[derive(Args, Debug, Clone, Default)]
pub struct GraphSourceArgs {
    /// Edge-list file (`a b [weight]` per line)
    #[arg(long, short = 'g')]
    pub graph: Option<PathBuf>,

    /// Generate a random connected graph with this many nodes
    #[arg(long, conflicts_with = "graph", value_parser = parse_node_count)]
    pub random: Option<u32>,

    /// Seed for the random graph (requires --random)
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,
}

/// Start and goal nodes
#[derive(Args, Debug, Clone, Default)]
pub struct PairArgs {
    /// Start node
    #[arg(long, short, value_parser = parse_node_id)]
    pub start: Option<NodeId>,

    /// Goal node
    #[arg(long, short = 'G', value_parser = parse_node_id)]
    pub goal: Option<NodeId>,
}
