//! Helper functions shared across commands

use frontier_core::graph::{NodeId, Weight};

/// `1 -> 4 -> 3`, or `(no path)` when empty
pub fn format_path(path: &[NodeId]) -> String {
    if path.is_empty() {
        return "(no path)".to_string();
    }
    path.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn format_cost(cost: Option<Weight>) -> String {
    cost.map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string())
}
