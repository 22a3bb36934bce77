use tracing::{debug, info};

use crate::bail_invalid;
use crate::error::{FrontierError, Result};
use crate::graph::{Graph, NodeId};
use crate::harness::ensure_endpoints;
use crate::harness::report::{Divergence, Route, UcsComparison, UcsReport};
use crate::search::{
    backtracking_shortest_path, path_cost, ucs_non_re_expanding, ucs_re_expanding, Cost,
};

/// Largest graph the exhaustive oracle is run on
pub const ORACLE_NODE_LIMIT: usize = 24;

fn route(graph: &Graph, path: Vec<NodeId>) -> Route {
    let cost = path_cost(graph, &path);
    Route { path, cost }
}

fn as_cost(route: &Route) -> Cost {
    route.cost.map(Cost::new).unwrap_or(Cost::INFINITY)
}

fn ensure_oracle_sized(graph: &Graph) -> Result<()> {
    if graph.node_count() > ORACLE_NODE_LIMIT {
        bail_invalid!(
            "graph for exhaustive oracle",
            format!(
                "{} nodes (limit {})",
                graph.node_count(),
                ORACLE_NODE_LIMIT
            )
        );
    }
    Ok(())
}

fn oracle_route(graph: &Graph, start: NodeId, goal: NodeId) -> Route {
    match backtracking_shortest_path(graph, start, goal) {
        Some(best) => Route {
            path: best.path,
            cost: Some(best.cost),
        },
        None => Route {
            path: Vec::new(),
            cost: None,
        },
    }
}

/// Run both UCS variants and the oracle on one pair
pub fn compare_ucs(graph: &Graph, start: NodeId, goal: NodeId) -> Result<UcsComparison> {
    ensure_endpoints(graph, start, goal)?;
    ensure_oracle_sized(graph)?;

    let non_re_expanding = route(graph, ucs_non_re_expanding(graph, start, goal).path);
    let re_expanding = route(graph, ucs_re_expanding(graph, start, goal).path);
    let oracle = oracle_route(graph, start, goal);

    Ok(UcsComparison {
        start,
        goal,
        non_re_expanding,
        re_expanding,
        oracle,
    })
}

/// Weighted UCS protocol.
///
/// For every unordered pair `(a, b)` with `a < b` the re-expanding UCS path
/// must cost exactly what the oracle's cheapest path costs. Paths may differ
/// when several cheapest paths exist. Pairs on which the non-re-expanding
/// variant misses the optimum are collected but never fail the run.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn validate_ucs(graph: &Graph) -> Result<UcsReport> {
    ensure_oracle_sized(graph)?;

    let mut nodes = graph.nodes().to_vec();
    nodes.sort();

    let mut report = UcsReport {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        pairs: 0,
        divergences: Vec::new(),
    };

    for (i, &start) in nodes.iter().enumerate() {
        for &goal in &nodes[i + 1..] {
            let comparison = compare_ucs(graph, start, goal)?;

            if !comparison.re_expanding_optimal() {
                return Err(FrontierError::CostMismatch {
                    start,
                    goal,
                    ucs: as_cost(&comparison.re_expanding),
                    oracle: as_cost(&comparison.oracle),
                });
            }

            if !comparison.non_re_expanding_optimal() {
                debug!(
                    start = %start,
                    goal = %goal,
                    found = %as_cost(&comparison.non_re_expanding),
                    optimal = %as_cost(&comparison.oracle),
                    "non-re-expanding ucs missed the optimum"
                );
                report.divergences.push(Divergence {
                    start,
                    goal,
                    found: comparison.non_re_expanding,
                    optimal: comparison.oracle,
                });
            }

            report.pairs += 1;
        }
    }

    info!(
        pairs = report.pairs,
        divergences = report.divergences.len(),
        "re-expanding ucs matches the oracle on every pair"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{cube_graph, parse_edge_list, RandomGraphBuilder};

    #[test]
    fn test_compare_ucs_on_cube() {
        let comparison = compare_ucs(&cube_graph(), NodeId(1), NodeId(2)).unwrap();

        assert_eq!(comparison.oracle.cost, Some(3));
        assert_eq!(comparison.re_expanding.cost, Some(3));
        assert_eq!(comparison.non_re_expanding.cost, Some(10));
        assert!(comparison.re_expanding_optimal());
        assert!(!comparison.non_re_expanding_optimal());
    }

    #[test]
    fn test_validate_ucs_on_cube() {
        let report = validate_ucs(&cube_graph()).unwrap();

        assert_eq!(report.pairs, 28);
        assert!(report
            .divergences
            .iter()
            .any(|d| d.start == NodeId(1) && d.goal == NodeId(2)));
        assert!(report
            .divergences
            .iter()
            .all(|d| d.found.cost > d.optimal.cost || d.found.cost.is_none()));
    }

    #[test]
    fn test_validate_ucs_handles_disconnected_pairs() {
        let graph = parse_edge_list("1 2 1\n3 4 1\n").unwrap();
        let report = validate_ucs(&graph).unwrap();
        assert_eq!(report.pairs, 6);
        assert!(report.divergences.is_empty());
    }

    #[test]
    fn test_validate_ucs_rejects_large_graphs() {
        let graph = RandomGraphBuilder::new(ORACLE_NODE_LIMIT as u32 + 1)
            .seed(2)
            .build()
            .unwrap();
        assert!(matches!(
            validate_ucs(&graph),
            Err(FrontierError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_compare_ucs_unknown_node() {
        assert!(matches!(
            compare_ucs(&cube_graph(), NodeId(1), NodeId(99)),
            Err(FrontierError::NodeNotFound { .. })
        ));
    }
}
