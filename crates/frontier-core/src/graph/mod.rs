//! Graph abstraction and graph sources
//!
//! Provides the undirected weighted graph the search engines run over:
//! - `Graph` with insertion-ordered nodes and neighbor lists
//! - `GraphProvider` trait, the read-only seam consumed by the engines
//! - Edge-list loading, seeded random connected graphs and the cube fixture

pub mod fixtures;
pub mod generate;
pub mod load;
pub mod summary;
pub mod traversal;
pub mod types;

pub use fixtures::cube_graph;
pub use generate::{sample_pair, RandomGraphBuilder};
pub use load::{load_edge_list, parse_edge_list};
pub use summary::GraphSummary;
pub use traversal::GraphProvider;
pub use types::{Graph, Neighbor, NodeId, Weight};
