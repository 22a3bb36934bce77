//! Breadth-first search in two frontier disciplines
//!
//! - `bfs_eager`: every neighbor is appended to the frontier, expanded or
//!   not; duplicates are skipped when dequeued.
//! - `bfs_lazy`: a node is marked visited the moment it is enqueued and is
//!   never enqueued twice; the goal is detected as a neighbor and never
//!   enqueued itself.
//!
//! Both expand nodes level by level in the same order and record the same
//! first-discoverer parents, so they return identical paths. Only the
//! insertion count differs.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::graph::{GraphProvider, NodeId};
use crate::search::path::reconstruct_path;
use crate::search::types::{BfsOutcome, SearchState};

/// Record `node` as the parent of `neighbor` unless the neighbor was already
/// visited or already has a parent
fn record_first_parent(
    state: &mut SearchState,
    node: NodeId,
    neighbor: NodeId,
    visited: &HashSet<NodeId>,
) {
    if !visited.contains(&neighbor) && state.parent(neighbor).is_none() {
        state.set_parent(neighbor, node);
    }
}

/// BFS that re-adds already expanded nodes to the frontier
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn bfs_eager(graph: &dyn GraphProvider, start: NodeId, goal: NodeId) -> BfsOutcome {
    let mut state = SearchState::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);
    let mut insertions = 1;

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }

        if node == goal {
            let path = reconstruct_path(&state, goal);
            trace!(insertions, hops = path.len() - 1, "goal dequeued");
            return BfsOutcome {
                path,
                insertions,
                state,
            };
        }

        for neighbor in graph.neighbors(node) {
            record_first_parent(&mut state, node, neighbor.id, &visited);
            queue.push_back(neighbor.id);
            insertions += 1;
        }
    }

    trace!(insertions, "frontier exhausted");
    BfsOutcome {
        path: Vec::new(),
        insertions,
        state,
    }
}

/// BFS that never puts a visited node back on the frontier.
///
/// There is no `start == goal` check: the start is only found again as a
/// neighbor of a later node, so the search expands the start and part of
/// the next level before returning `[start]` (or returns an empty path when
/// the start has no neighbors).
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn bfs_lazy(graph: &dyn GraphProvider, start: NodeId, goal: NodeId) -> BfsOutcome {
    let mut state = SearchState::new();
    let mut visited: HashSet<NodeId> = HashSet::from([start]);
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);
    let mut insertions = 1;

    while let Some(node) = queue.pop_front() {
        for neighbor in graph.neighbors(node) {
            record_first_parent(&mut state, node, neighbor.id, &visited);

            if neighbor.id == goal {
                let path = reconstruct_path(&state, goal);
                trace!(insertions, hops = path.len() - 1, "goal discovered");
                return BfsOutcome {
                    path,
                    insertions,
                    state,
                };
            }

            if visited.insert(neighbor.id) {
                queue.push_back(neighbor.id);
                insertions += 1;
            }
        }
    }

    trace!(insertions, "frontier exhausted");
    BfsOutcome {
        path: Vec::new(),
        insertions,
        state,
    }
}
