use serde::Serialize;

use crate::graph::types::{Graph, NodeId, Weight};

/// Sampled node with its degree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSample {
    pub id: NodeId,
    pub degree: usize,
}

/// Sampled edge with its weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSample {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

/// Shape of a graph (node/edge proportion plus one example of each)
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub name: String,
    pub nodes: usize,
    pub edges: usize,
    pub connected: bool,
    pub sample_node: Option<NodeSample>,
    pub sample_edge: Option<EdgeSample>,
}

impl GraphSummary {
    /// Summarize a graph; the samples are taken from the middle node in insertion order
    pub fn of(name: &str, graph: &Graph) -> Self {
        let middle = graph.nodes().get(graph.node_count() / 2).copied();

        let sample_node = middle.map(|id| NodeSample {
            id,
            degree: graph.degree(id),
        });
        let sample_edge = middle.and_then(|id| {
            graph.neighbors(id).first().map(|n| EdgeSample {
                from: id,
                to: n.id,
                weight: n.weight,
            })
        });

        Self {
            name: name.to_string(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            connected: graph.is_connected(),
            sample_node,
            sample_edge,
        }
    }
}
