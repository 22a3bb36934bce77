//! Validation harness
//!
//! Drives the engines over many (start, goal) pairs on one shared graph and
//! turns any disagreement into a hard error:
//! - `bfs`: lazy vs eager BFS must return identical paths
//! - `ucs`: re-expanding UCS must match the backtracking oracle's cost

pub mod bfs;
pub mod report;
pub mod ucs;

pub use bfs::{compare_bfs, validate_bfs};
pub use report::{BfsComparison, BfsReport, Divergence, Route, UcsComparison, UcsReport};
pub use ucs::{compare_ucs, validate_ucs, ORACLE_NODE_LIMIT};

use crate::error::{FrontierError, Result};
use crate::graph::{Graph, NodeId};

/// Fail with `NodeNotFound` unless both endpoints are in the graph
pub(crate) fn ensure_endpoints(graph: &Graph, start: NodeId, goal: NodeId) -> Result<()> {
    for id in [start, goal] {
        if !graph.contains(id) {
            return Err(FrontierError::node_not_found(id));
        }
    }
    Ok(())
}
