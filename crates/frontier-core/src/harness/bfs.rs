use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::error::{FrontierError, Result};
use crate::graph::{sample_pair, Graph, NodeId};
use crate::harness::ensure_endpoints;
use crate::harness::report::{BfsComparison, BfsReport};
use crate::search::{bfs_eager, bfs_lazy};

/// Run both BFS variants on one pair
pub fn compare_bfs(graph: &Graph, start: NodeId, goal: NodeId) -> Result<BfsComparison> {
    ensure_endpoints(graph, start, goal)?;

    let lazy = bfs_lazy(graph, start, goal);
    let eager = bfs_eager(graph, start, goal);

    Ok(BfsComparison {
        start,
        goal,
        lazy_path: lazy.path,
        lazy_insertions: lazy.insertions,
        eager_path: eager.path,
        eager_insertions: eager.insertions,
    })
}

/// Unweighted BFS protocol.
///
/// Samples `trials` random pairs with `start != goal` and requires both
/// variants to return the same path, and the eager variant to insert at
/// least as often as the lazy one.
#[tracing::instrument(skip(graph, rng), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn validate_bfs<R: Rng + ?Sized>(
    graph: &Graph,
    trials: usize,
    rng: &mut R,
) -> Result<BfsReport> {
    if !graph.is_connected() {
        warn!("graph is not connected; unreachable pairs will return empty paths");
    }

    let mut report = BfsReport {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        trials: 0,
        lazy_insertions: 0,
        eager_insertions: 0,
        last: None,
    };

    for trial in 0..trials {
        let (start, goal) = sample_pair(graph, rng)?;
        let comparison = compare_bfs(graph, start, goal)?;
        trace!(
            trial,
            start = %start,
            goal = %goal,
            lazy = comparison.lazy_insertions,
            eager = comparison.eager_insertions,
            "trial"
        );

        if !comparison.identical() {
            return Err(FrontierError::BfsMismatch {
                trial,
                start,
                goal,
                lazy: comparison.lazy_path,
                eager: comparison.eager_path,
            });
        }
        if comparison.eager_insertions < comparison.lazy_insertions {
            return Err(FrontierError::InsertionInvariant {
                start,
                goal,
                eager: comparison.eager_insertions,
                lazy: comparison.lazy_insertions,
            });
        }

        report.trials += 1;
        report.lazy_insertions += comparison.lazy_insertions;
        report.eager_insertions += comparison.eager_insertions;
        report.last = Some(comparison);
    }

    debug!(
        lazy = report.lazy_insertions,
        eager = report.eager_insertions,
        "insertion totals"
    );
    info!(trials = report.trials, "bfs variants agree on every trial");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{parse_edge_list, RandomGraphBuilder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_compare_bfs_rejects_unknown_nodes() {
        let graph = parse_edge_list("1 2\n").unwrap();
        assert!(matches!(
            compare_bfs(&graph, NodeId(1), NodeId(9)),
            Err(FrontierError::NodeNotFound { id }) if id == NodeId(9)
        ));
    }

    #[test]
    fn test_validate_bfs_counts_trials() {
        let graph = RandomGraphBuilder::new(100).seed(5).build().unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let report = validate_bfs(&graph, 50, &mut rng).unwrap();

        assert_eq!(report.trials, 50);
        assert!(report.eager_insertions > report.lazy_insertions);
        assert!(report.mean_eager_insertions() > report.mean_lazy_insertions());
        let last = report.last.unwrap();
        assert!(last.identical());
        assert_ne!(last.start, last.goal);
    }

    #[test]
    fn test_validate_bfs_zero_trials() {
        let graph = RandomGraphBuilder::new(10).seed(1).build().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let report = validate_bfs(&graph, 0, &mut rng).unwrap();
        assert_eq!(report.trials, 0);
        assert!(report.last.is_none());
    }

    #[test]
    fn test_validate_bfs_needs_two_nodes() {
        let graph = Graph::with_nodes(1);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(validate_bfs(&graph, 3, &mut rng).is_err());
    }
}
