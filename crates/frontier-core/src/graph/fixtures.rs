//! Built-in weighted cube graph
//!
//! Same edges and order as `data/cube.dat`. The direct edge 1-2 costs 10
//! while 1-4-3-2 costs 3, which is what trips the non-re-expanding UCS.

use crate::graph::types::{Graph, NodeId, Weight};

const CUBE_EDGES: [(u32, u32, Weight); 12] = [
    (1, 2, 10),
    (1, 4, 1),
    (1, 5, 2),
    (2, 3, 1),
    (2, 6, 3),
    (3, 4, 1),
    (3, 7, 2),
    (4, 8, 3),
    (5, 6, 2),
    (5, 8, 1),
    (6, 7, 1),
    (7, 8, 2),
];

/// Layout coordinates used when rendering the cube
pub const CUBE_POSITIONS: [(u32, f32, f32); 8] = [
    (1, 2.0, 7.0),
    (2, 6.0, 4.6),
    (3, 8.6, 5.8),
    (4, 5.0, 8.0),
    (5, 0.0, 3.0),
    (6, 3.0, 4.0),
    (7, 7.0, 1.4),
    (8, 4.0, 0.0),
];

pub fn cube_graph() -> Graph {
    let mut graph = Graph::new();
    for (a, b, weight) in CUBE_EDGES {
        graph.insert_edge(NodeId(a), NodeId(b), weight);
    }
    graph
}

/// Layout position of a cube node, if it has one
pub fn cube_position(id: NodeId) -> Option<(f32, f32)> {
    CUBE_POSITIONS
        .iter()
        .find(|(node, _, _)| *node == id.0)
        .map(|&(_, x, y)| (x, y))
}
