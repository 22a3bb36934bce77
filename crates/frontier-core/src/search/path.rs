//! Path reconstruction and path cost accounting

use crate::error::{FrontierError, Result};
use crate::graph::{GraphProvider, NodeId, Weight};
use crate::search::types::SearchState;

/// Follow parent links back from `goal` and return `[start, ..., goal]`.
///
/// Only call this once the search has reached `goal`. The walk is capped
/// at one step per annotated node, so a corrupted chain cannot loop.
pub fn reconstruct_path(state: &SearchState, goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(parent) = state.parent(current) {
        if path.len() > state.len() {
            break;
        }
        path.push(parent);
        current = parent;
    }

    path.reverse();
    path
}

/// Total edge weight along a path.
///
/// `None` for an empty path or when two consecutive nodes are not adjacent.
pub fn path_cost(graph: &dyn GraphProvider, path: &[NodeId]) -> Option<Weight> {
    if path.is_empty() {
        return None;
    }
    path.windows(2)
        .map(|pair| graph.weight(pair[0], pair[1]))
        .sum()
}

/// Check that every hop is an edge and that parent links follow the path order
pub fn verify_path(graph: &dyn GraphProvider, state: &SearchState, path: &[NodeId]) -> Result<()> {
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if graph.weight(from, to).is_none() {
            return Err(FrontierError::invalid_value(
                "path",
                format!("{} -> {} is not an edge", from, to),
            ));
        }
        if state.parent(to) != Some(from) {
            return Err(FrontierError::invalid_value(
                "path",
                format!(
                    "parent of {} is {:?}, expected {}",
                    to,
                    state.parent(to),
                    from
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{parse_edge_list, Neighbor};

    #[test]
    fn test_reconstruct_follows_parents() {
        let mut state = SearchState::for_start(NodeId(1));
        state.set_parent(NodeId(2), NodeId(1));
        state.set_parent(NodeId(3), NodeId(2));
        state.set_parent(NodeId(4), NodeId(3));

        assert_eq!(
            reconstruct_path(&state, NodeId(4)),
            vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)]
        );
        assert_eq!(reconstruct_path(&state, NodeId(1)), vec![NodeId(1)]);
    }

    #[test]
    fn test_reconstruct_terminates_on_cycle() {
        let mut state = SearchState::new();
        state.set_parent(NodeId(1), NodeId(2));
        state.set_parent(NodeId(2), NodeId(1));

        let path = reconstruct_path(&state, NodeId(1));
        assert!(path.len() <= 3);
    }

    #[test]
    fn test_path_cost() {
        let graph = parse_edge_list("1 2 4\n2 3 5\n").unwrap();
        assert_eq!(path_cost(&graph, &[NodeId(1), NodeId(2), NodeId(3)]), Some(9));
        assert_eq!(path_cost(&graph, &[NodeId(2)]), Some(0));
        assert_eq!(path_cost(&graph, &[]), None);
        assert_eq!(path_cost(&graph, &[NodeId(1), NodeId(3)]), None);
    }

    #[test]
    fn test_verify_path() {
        let graph = parse_edge_list("1 2 1\n2 3 1\n1 3 1\n").unwrap();
        let mut state = SearchState::for_start(NodeId(1));
        state.relax(NodeId(1), Neighbor { id: NodeId(2), weight: 1 });
        state.relax(NodeId(2), Neighbor { id: NodeId(3), weight: 1 });

        assert!(verify_path(&graph, &state, &[NodeId(1), NodeId(2), NodeId(3)]).is_ok());
        assert!(verify_path(&graph, &state, &[NodeId(1), NodeId(3)]).is_err());
    }
}
