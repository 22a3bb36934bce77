//! Uniform-cost search in two frontier disciplines
//!
//! Both variants share `SearchState::relax`: an edge lowers the neighbor's
//! cost and re-points its parent only when the route is strictly cheaper.
//!
//! - `ucs_re_expanding`: pushes every relaxed neighbor, expanded or not, and
//!   stops when the goal is popped. Popping always yields the cheapest
//!   remaining tentative cost, so the first pop of the goal is optimal.
//! - `ucs_non_re_expanding`: marks a node visited the first time it is seen
//!   and never pushes it again, and returns as soon as the goal shows up as a
//!   neighbor. Nodes improved after their first push keep their stale
//!   priority, and the goal may be returned through a more expensive route.
//!   This variant is kept as the suboptimal reference.

use std::collections::HashSet;

use tracing::trace;

use crate::graph::{GraphProvider, NodeId};
use crate::search::path::reconstruct_path;
use crate::search::queue::PriorityQueue;
use crate::search::types::{Cost, SearchState, UcsOutcome};

/// Optimal UCS that lets nodes re-enter the frontier
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn ucs_re_expanding(graph: &dyn GraphProvider, start: NodeId, goal: NodeId) -> UcsOutcome {
    let mut state = SearchState::for_start(start);
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue = PriorityQueue::new();
    queue.push(start, Cost::ZERO);

    while let Some(node) = queue.pop() {
        if !visited.insert(node) {
            continue;
        }

        if node == goal {
            trace!(cost = %state.cost(goal), "goal popped");
            let path = reconstruct_path(&state, goal);
            return UcsOutcome { path, state };
        }

        for neighbor in graph.neighbors(node) {
            let priority = state.relax(node, neighbor);
            queue.push(neighbor.id, priority);
        }
    }

    trace!("frontier exhausted");
    UcsOutcome {
        path: Vec::new(),
        state,
    }
}

/// UCS that never re-inserts a node once it has been seen.
///
/// Like `bfs_lazy` it has no `start == goal` check and only returns
/// `[start]` once the start is met again as a neighbor.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn ucs_non_re_expanding(
    graph: &dyn GraphProvider,
    start: NodeId,
    goal: NodeId,
) -> UcsOutcome {
    let mut state = SearchState::for_start(start);
    let mut visited: HashSet<NodeId> = HashSet::from([start]);
    let mut queue = PriorityQueue::new();
    queue.push(start, Cost::ZERO);

    while let Some(node) = queue.pop() {
        for neighbor in graph.neighbors(node) {
            let priority = state.relax(node, neighbor);

            if neighbor.id == goal {
                trace!(cost = %state.cost(goal), via = %node, "goal discovered");
                let path = reconstruct_path(&state, goal);
                return UcsOutcome { path, state };
            }

            if visited.insert(neighbor.id) {
                queue.push(neighbor.id, priority);
            }
        }
    }

    trace!("frontier exhausted");
    UcsOutcome {
        path: Vec::new(),
        state,
    }
}
