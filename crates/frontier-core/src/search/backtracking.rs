//! Exhaustive shortest-path oracle
//!
//! Enumerates every simple path from start to goal by depth-first
//! backtracking and keeps the cheapest. Exponential in the graph size: it
//! exists to validate the UCS engines on small graphs and nothing else.

use serde::Serialize;

use crate::graph::{GraphProvider, NodeId, Weight};

/// Minimum-cost simple path found by the oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OraclePath {
    pub path: Vec<NodeId>,
    pub cost: Weight,
}

/// Cheapest simple path between `start` and `goal`, or `None` if there is none.
///
/// Among equally cheap paths the first one enumerated (in neighbor order) wins.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn backtracking_shortest_path(
    graph: &dyn GraphProvider,
    start: NodeId,
    goal: NodeId,
) -> Option<OraclePath> {
    extend(graph, start, goal, Vec::new(), 0).map(|(path, cost)| OraclePath { path, cost })
}

/// Extend `prefix` with `current` and search onward. `prefix` is owned by
/// this call; each recursive branch gets its own copy.
fn extend(
    graph: &dyn GraphProvider,
    current: NodeId,
    goal: NodeId,
    prefix: Vec<NodeId>,
    cost: Weight,
) -> Option<(Vec<NodeId>, Weight)> {
    let mut path = prefix;
    path.push(current);

    if current == goal {
        return Some((path, cost));
    }

    let mut shortest: Option<(Vec<NodeId>, Weight)> = None;
    for neighbor in graph.neighbors(current) {
        if path.contains(&neighbor.id) {
            continue;
        }
        let branch_cost = cost.saturating_add(neighbor.weight);
        if let Some(candidate) = extend(graph, neighbor.id, goal, path.clone(), branch_cost) {
            let better = shortest
                .as_ref()
                .is_none_or(|(_, best)| candidate.1 < *best);
            if better {
                shortest = Some(candidate);
            }
        }
    }
    shortest
}
