use crate::graph::types::{Graph, Neighbor, NodeId, Weight};

/// Trait for providing graph adjacency to the search engines
pub trait GraphProvider {
    fn nodes(&self) -> Vec<NodeId>;
    fn neighbors(&self, id: NodeId) -> Vec<Neighbor>;
    fn weight(&self, a: NodeId, b: NodeId) -> Option<Weight>;
    fn contains(&self, id: NodeId) -> bool;
}

impl GraphProvider for Graph {
    fn nodes(&self) -> Vec<NodeId> {
        Graph::nodes(self).to_vec()
    }

    fn neighbors(&self, id: NodeId) -> Vec<Neighbor> {
        Graph::neighbors(self, id).to_vec()
    }

    fn weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        Graph::weight(self, a, b)
    }

    fn contains(&self, id: NodeId) -> bool {
        Graph::contains(self, id)
    }
}
