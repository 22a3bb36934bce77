use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::graph::{Neighbor, NodeId, Weight};

/// Accumulated path cost from the start node.
///
/// `Cost::INFINITY` marks nodes no route has reached yet. Addition
/// saturates, so infinity stays infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const INFINITY: Cost = Cost(u64::MAX);

    pub fn new(value: u64) -> Self {
        Cost(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITY
    }

    /// Finite value, or `None` for infinity
    pub fn finite(&self) -> Option<u64> {
        (!self.is_infinite()).then_some(self.0)
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add<Weight> for Cost {
    type Output = Self;

    fn add(self, weight: Weight) -> Self {
        Cost(self.0.saturating_add(weight))
    }
}

impl From<Weight> for Cost {
    fn from(value: Weight) -> Self {
        Cost(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.finite() {
            Some(value) => serializer.serialize_u64(value),
            None => serializer.serialize_none(),
        }
    }
}

/// Per-node search annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRecord {
    pub parent: Option<NodeId>,
    pub cost: Cost,
}

impl Default for NodeRecord {
    fn default() -> Self {
        Self {
            parent: None,
            cost: Cost::INFINITY,
        }
    }
}

/// Side map of `parent`/`cost` annotations owned by a single search call.
///
/// Nodes without an entry read as `{ parent: None, cost: INFINITY }`.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    records: HashMap<NodeId, NodeRecord>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the start node at cost 0
    pub fn for_start(start: NodeId) -> Self {
        let mut state = Self::new();
        state.record_mut(start).cost = Cost::ZERO;
        state
    }

    pub fn record(&self, id: NodeId) -> NodeRecord {
        self.records.get(&id).copied().unwrap_or_default()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.record(id).parent
    }

    pub fn cost(&self, id: NodeId) -> Cost {
        self.record(id).cost
    }

    pub fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.record_mut(id).parent = Some(parent);
    }

    /// Number of nodes carrying annotations
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Relax the edge `node -> neighbor`.
    ///
    /// Lowers the neighbor's cost and re-points its parent when the route
    /// through `node` is strictly cheaper. Returns the neighbor's cost after
    /// the update, which is the priority it is pushed with.
    pub fn relax(&mut self, node: NodeId, neighbor: Neighbor) -> Cost {
        let candidate = self.cost(node) + neighbor.weight;
        let record = self.record_mut(neighbor.id);
        if candidate < record.cost {
            record.cost = candidate;
            record.parent = Some(node);
        }
        record.cost
    }

    fn record_mut(&mut self, id: NodeId) -> &mut NodeRecord {
        self.records.entry(id).or_default()
    }
}

/// Result of a BFS run
#[derive(Debug, Clone)]
pub struct BfsOutcome {
    /// `[start, ..., goal]`, empty when no path was found
    pub path: Vec<NodeId>,
    /// Frontier insertions, counting the seeded start
    pub insertions: usize,
    pub state: SearchState,
}

impl BfsOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Result of a UCS run
#[derive(Debug, Clone)]
pub struct UcsOutcome {
    /// `[start, ..., goal]`, empty when no path was found
    pub path: Vec<NodeId>,
    pub state: SearchState,
}

impl UcsOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_saturates_at_infinity() {
        assert_eq!(Cost::INFINITY + 5, Cost::INFINITY);
        assert_eq!(Cost::new(2) + 3, Cost::new(5));
        assert!(Cost::new(u64::MAX - 1) < Cost::INFINITY);
    }

    #[test]
    fn test_cost_display_and_json() {
        assert_eq!(Cost::INFINITY.to_string(), "inf");
        assert_eq!(Cost::new(7).to_string(), "7");
        assert_eq!(serde_json::to_string(&Cost::new(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Cost::INFINITY).unwrap(), "null");
    }

    #[test]
    fn test_unknown_nodes_read_as_unreached() {
        let state = SearchState::new();
        assert_eq!(state.parent(NodeId(4)), None);
        assert!(state.cost(NodeId(4)).is_infinite());
        assert!(state.is_empty());
    }

    #[test]
    fn test_relax_only_on_strict_improvement() {
        let mut state = SearchState::for_start(NodeId(1));

        let cost = state.relax(NodeId(1), Neighbor { id: NodeId(2), weight: 5 });
        assert_eq!(cost, Cost::new(5));
        assert_eq!(state.parent(NodeId(2)), Some(NodeId(1)));

        // Equal cost through another node does not move the parent
        state.relax(NodeId(1), Neighbor { id: NodeId(3), weight: 2 });
        let cost = state.relax(NodeId(3), Neighbor { id: NodeId(2), weight: 3 });
        assert_eq!(cost, Cost::new(5));
        assert_eq!(state.parent(NodeId(2)), Some(NodeId(1)));

        // Worse candidate returns the existing best cost
        let cost = state.relax(NodeId(3), Neighbor { id: NodeId(2), weight: 9 });
        assert_eq!(cost, Cost::new(5));

        // Strictly cheaper candidate re-points the parent
        let cost = state.relax(NodeId(3), Neighbor { id: NodeId(2), weight: 1 });
        assert_eq!(cost, Cost::new(3));
        assert_eq!(state.parent(NodeId(2)), Some(NodeId(3)));
    }

    #[test]
    fn test_relax_from_unreached_node_is_noop() {
        let mut state = SearchState::new();
        let cost = state.relax(NodeId(8), Neighbor { id: NodeId(9), weight: 1 });
        assert!(cost.is_infinite());
        assert_eq!(state.parent(NodeId(9)), None);
    }
}
