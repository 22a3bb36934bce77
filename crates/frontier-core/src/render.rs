//! Graphviz DOT rendering of a graph and a finished search
//!
//! Edges carry their weight as a label. Parent edges of the search tree are
//! drawn in blue and the returned path in red; the start and goal nodes are
//! filled. The cube fixture keeps its fixed layout (`pos` attributes, meant
//! for `neato -n`).

use std::collections::HashSet;

use crate::graph::fixtures::cube_position;
use crate::graph::{Graph, NodeId};
use crate::search::SearchState;

const PATH_COLOR: &str = "#aa0000";
const TREE_COLOR: &str = "#0055aa";
const EDGE_COLOR: &str = "#999999";
const ENDPOINT_FILL: &str = "#ffdd88";

/// What to highlight on top of the plain graph
#[derive(Debug, Default, Clone, Copy)]
pub struct Highlight<'a> {
    pub start: Option<NodeId>,
    pub goal: Option<NodeId>,
    pub state: Option<&'a SearchState>,
    pub path: &'a [NodeId],
}

/// Positions for every node, if the graph is laid out like the cube fixture
fn cube_layout(graph: &Graph) -> Option<Vec<(NodeId, f32, f32)>> {
    if graph.node_count() != 8 {
        return None;
    }
    graph
        .nodes()
        .iter()
        .map(|&id| cube_position(id).map(|(x, y)| (id, x, y)))
        .collect()
}

fn unordered(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Render `graph` as an undirected DOT document named `name`
pub fn render_dot(graph: &Graph, name: &str, highlight: &Highlight<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!("graph \"{}\" {{\n", name.replace('"', "'")));
    out.push_str("    node [shape=circle, fontsize=10];\n");
    out.push_str("    edge [fontsize=9];\n\n");

    let layout = cube_layout(graph);
    let endpoints: Vec<NodeId> = highlight.start.into_iter().chain(highlight.goal).collect();

    for &id in graph.nodes() {
        let mut attrs = Vec::new();
        if let Some((_, x, y)) = layout
            .as_ref()
            .and_then(|nodes| nodes.iter().find(|(node, _, _)| *node == id))
        {
            attrs.push(format!("pos=\"{},{}!\"", x, y));
        }
        if endpoints.contains(&id) {
            attrs.push(format!("style=filled, fillcolor=\"{}\"", ENDPOINT_FILL));
        }
        if attrs.is_empty() {
            out.push_str(&format!("    {};\n", id));
        } else {
            out.push_str(&format!("    {} [{}];\n", id, attrs.join(", ")));
        }
    }

    out.push('\n');

    let path_edges: HashSet<(NodeId, NodeId)> = highlight
        .path
        .windows(2)
        .map(|pair| unordered(pair[0], pair[1]))
        .collect();

    for (a, b, weight) in graph.edges() {
        let on_path = path_edges.contains(&unordered(a, b));
        let in_tree = highlight.state.is_some_and(|state| {
            state.parent(b) == Some(a) || state.parent(a) == Some(b)
        });

        let style = if on_path {
            format!("color=\"{}\", penwidth=2.5", PATH_COLOR)
        } else if in_tree {
            format!("color=\"{}\", penwidth=1.5", TREE_COLOR)
        } else {
            format!("color=\"{}\"", EDGE_COLOR)
        };

        out.push_str(&format!(
            "    {} -- {} [label=\"{}\", {}];\n",
            a, b, weight, style
        ));
    }

    out.push_str("}\n");
    out
}
