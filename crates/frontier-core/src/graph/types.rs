use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FrontierError, Result};

/// Non-negative integer edge weight
pub type Weight = u64;

/// Node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = FrontierError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(NodeId)
            .map_err(|_| FrontierError::invalid_value("node id", s))
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

/// An adjacent node together with the weight of the connecting edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub id: NodeId,
    pub weight: Weight,
}

/// Undirected, weighted, simple graph.
///
/// Nodes iterate in insertion order and every neighbor list keeps edge
/// insertion order, so traversal order is fully determined by how the
/// graph was built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<Neighbor>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph with nodes `1..=count` and no edges.
    pub fn with_nodes(count: u32) -> Self {
        let mut graph = Self::new();
        for id in 1..=count {
            graph.add_node(NodeId(id));
        }
        graph
    }

    /// Add a node if it is not already present
    pub fn add_node(&mut self, id: NodeId) -> usize {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(id);
        self.adjacency.push(Vec::new());
        self.index.insert(id, idx);
        idx
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// Re-adding an existing edge overwrites its weight in place.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<()> {
        if a == b {
            return Err(FrontierError::invalid_value(
                "edge",
                format!("self-loop on node {}", a),
            ));
        }
        self.insert_edge(a, b, weight);
        Ok(())
    }

    /// `add_edge` for endpoints already known to be distinct
    pub(crate) fn insert_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) {
        debug_assert_ne!(a, b);
        let ia = self.add_node(a);
        let ib = self.add_node(b);

        if let Some(existing) = self.adjacency[ia].iter_mut().find(|n| n.id == b) {
            existing.weight = weight;
            if let Some(back) = self.adjacency[ib].iter_mut().find(|n| n.id == a) {
                back.weight = weight;
            }
            return;
        }

        self.adjacency[ia].push(Neighbor { id: b, weight });
        self.adjacency[ib].push(Neighbor { id: a, weight });
        self.edge_count += 1;
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        self.index
            .get(&id)
            .map(|&idx| self.adjacency[idx].as_slice())
            .unwrap_or(&[])
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// Weight of the edge between `a` and `b`, if the edge exists
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        self.neighbors(a)
            .iter()
            .find(|n| n.id == b)
            .map(|n| n.weight)
    }

    /// Each undirected edge exactly once, as `(a, b, weight)` with `a` inserted before `b`
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(move |(idx, &a)| {
                self.adjacency[idx].iter().filter_map(move |n| {
                    let other = self.index.get(&n.id).copied().unwrap_or(usize::MAX);
                    (idx < other).then_some((a, n.id, n.weight))
                })
            })
    }

    /// Copy of this graph with every edge weight reset to 1
    pub fn with_unit_weights(&self) -> Self {
        let mut graph = self.clone();
        for list in &mut graph.adjacency {
            for neighbor in list.iter_mut() {
                neighbor.weight = 1;
            }
        }
        graph
    }

    pub fn is_connected(&self) -> bool {
        let Some(&first) = self.nodes.first() else {
            return true;
        };
        let mut seen = vec![false; self.nodes.len()];
        let mut queue = VecDeque::from([first]);
        seen[0] = true;
        let mut reached = 1;

        while let Some(node) = queue.pop_front() {
            for neighbor in self.neighbors(node) {
                if let Some(&idx) = self.index.get(&neighbor.id) {
                    if !seen[idx] {
                        seen[idx] = true;
                        reached += 1;
                        queue.push_back(neighbor.id);
                    }
                }
            }
        }

        reached == self.nodes.len()
    }
}
