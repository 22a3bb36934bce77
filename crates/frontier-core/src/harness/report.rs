use serde::Serialize;

use crate::graph::{NodeId, Weight};

/// A path together with its edge-weight cost (`None` when no path was found)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: Vec<NodeId>,
    pub cost: Option<Weight>,
}

/// Side-by-side result of both BFS variants on one pair
#[derive(Debug, Clone, Serialize)]
pub struct BfsComparison {
    pub start: NodeId,
    pub goal: NodeId,
    pub lazy_path: Vec<NodeId>,
    pub lazy_insertions: usize,
    pub eager_path: Vec<NodeId>,
    pub eager_insertions: usize,
}

impl BfsComparison {
    /// Eager BFS stops at once here, lazy BFS only when the start reappears as a neighbor
    pub fn start_is_goal(&self) -> bool {
        self.start == self.goal
    }

    pub fn identical(&self) -> bool {
        self.lazy_path == self.eager_path
    }

    /// Insertions the eager variant made on top of the lazy one
    pub fn extra_insertions(&self) -> i64 {
        self.eager_insertions as i64 - self.lazy_insertions as i64
    }
}

/// Outcome of the unweighted BFS protocol
#[derive(Debug, Clone, Serialize)]
pub struct BfsReport {
    pub nodes: usize,
    pub edges: usize,
    pub trials: usize,
    pub lazy_insertions: usize,
    pub eager_insertions: usize,
    /// Last trial, shown as the representative example
    pub last: Option<BfsComparison>,
}

impl BfsReport {
    pub fn mean_lazy_insertions(&self) -> f64 {
        mean(self.lazy_insertions, self.trials)
    }

    pub fn mean_eager_insertions(&self) -> f64 {
        mean(self.eager_insertions, self.trials)
    }

    /// Total insertions the eager variant made on top of the lazy one
    pub fn extra_insertions(&self) -> i64 {
        self.eager_insertions as i64 - self.lazy_insertions as i64
    }
}

/// UCS variants and oracle on one pair
#[derive(Debug, Clone, Serialize)]
pub struct UcsComparison {
    pub start: NodeId,
    pub goal: NodeId,
    pub non_re_expanding: Route,
    pub re_expanding: Route,
    pub oracle: Route,
}

impl UcsComparison {
    pub fn re_expanding_optimal(&self) -> bool {
        self.re_expanding.cost == self.oracle.cost
    }

    pub fn non_re_expanding_optimal(&self) -> bool {
        self.non_re_expanding.cost == self.oracle.cost
    }
}

/// A pair on which the non-re-expanding UCS missed the optimum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divergence {
    pub start: NodeId,
    pub goal: NodeId,
    pub found: Route,
    pub optimal: Route,
}

/// Outcome of the weighted UCS protocol
#[derive(Debug, Clone, Serialize)]
pub struct UcsReport {
    pub nodes: usize,
    pub edges: usize,
    pub pairs: usize,
    /// Informational only; the non-re-expanding variant is not required to be optimal
    pub divergences: Vec<Divergence>,
}

fn mean(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
