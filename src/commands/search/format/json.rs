//! JSON output formatting for the search commands

use crate::commands::source::LoadedGraph;
use frontier_core::error::Result;
use frontier_core::harness::{BfsComparison, UcsComparison};

fn graph_json(loaded: &LoadedGraph) -> serde_json::Value {
    let mut obj = serde_json::json!({
        "name": loaded.name,
        "nodes": loaded.graph.node_count(),
        "edges": loaded.graph.edge_count(),
    });
    if let (Some(seed), Some(obj_mut)) = (loaded.seed, obj.as_object_mut()) {
        obj_mut.insert("seed".to_string(), serde_json::json!(seed));
    }
    obj
}

/// Output a BFS comparison in JSON format
pub fn output_bfs_json(loaded: &LoadedGraph, comparison: &BfsComparison) -> Result<()> {
    let output = serde_json::json!({
        "graph": graph_json(loaded),
        "start": comparison.start,
        "goal": comparison.goal,
        "start_is_goal": comparison.start_is_goal(),
        "lazy": {
            "path": comparison.lazy_path,
            "insertions": comparison.lazy_insertions,
        },
        "eager": {
            "path": comparison.eager_path,
            "insertions": comparison.eager_insertions,
        },
        "extra_insertions": comparison.extra_insertions(),
        "identical": comparison.identical(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output a UCS comparison in JSON format
pub fn output_ucs_json(loaded: &LoadedGraph, comparison: &UcsComparison) -> Result<()> {
    let output = serde_json::json!({
        "graph": graph_json(loaded),
        "start": comparison.start,
        "goal": comparison.goal,
        "non_re_expanding": comparison.non_re_expanding,
        "re_expanding": comparison.re_expanding,
        "oracle": comparison.oracle,
        "re_expanding_optimal": comparison.re_expanding_optimal(),
        "non_re_expanding_optimal": comparison.non_re_expanding_optimal(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
