//! Seeded random connected graphs and random (start, goal) sampling
//!
//! Connectivity comes from a random spanning tree, so construction never
//! has to retry until the graph happens to be connected.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::{Graph, NodeId, Weight};

/// Builder for random connected graphs with nodes `1..=nodes`
#[derive(Debug, Clone)]
pub struct RandomGraphBuilder {
    nodes: u32,
    extra_edges: usize,
    max_weight: Weight,
    seed: u64,
}

impl RandomGraphBuilder {
    /// Start a builder for `nodes` nodes with a fresh random seed.
    ///
    /// Defaults to `3 * nodes` extra edges and unit weights.
    pub fn new(nodes: u32) -> Self {
        Self {
            nodes,
            extra_edges: 3 * nodes as usize,
            max_weight: 1,
            seed: rand::random(),
        }
    }

    pub fn extra_edges(mut self, extra_edges: usize) -> Self {
        self.extra_edges = extra_edges;
        self
    }

    /// Draw weights uniformly from `1..=max_weight`
    pub fn max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = max_weight.max(1);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn seed_value(&self) -> u64 {
        self.seed
    }

    #[tracing::instrument(skip(self), fields(nodes = self.nodes, extra_edges = self.extra_edges, seed = self.seed))]
    pub fn build(&self) -> Result<Graph> {
        if self.nodes == 0 {
            bail_invalid!("node count", self.nodes);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut graph = Graph::with_nodes(self.nodes);

        let mut order: Vec<NodeId> = (1..=self.nodes).map(NodeId).collect();
        order.shuffle(&mut rng);

        // Spanning tree: every node attaches to one placed before it.
        for k in 1..order.len() {
            let anchor = order[rng.gen_range(0..k)];
            let weight = self.draw_weight(&mut rng);
            graph.add_edge(anchor, order[k], weight)?;
        }

        if self.nodes > 1 {
            for _ in 0..self.extra_edges {
                let a = NodeId(rng.gen_range(1..=self.nodes));
                let b = NodeId(rng.gen_range(1..=self.nodes));
                if a != b && graph.weight(a, b).is_none() {
                    let weight = self.draw_weight(&mut rng);
                    graph.add_edge(a, b, weight)?;
                }
            }
        }

        debug!(edges = graph.edge_count(), "random graph built");
        Ok(graph)
    }

    fn draw_weight(&self, rng: &mut StdRng) -> Weight {
        if self.max_weight <= 1 {
            1
        } else {
            rng.gen_range(1..=self.max_weight)
        }
    }
}

/// Sample a uniform random `(start, goal)` pair with `start != goal`
pub fn sample_pair<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Result<(NodeId, NodeId)> {
    let nodes = graph.nodes();
    if nodes.len() < 2 {
        bail_invalid!("graph for pair sampling", format!("{} node(s)", nodes.len()));
    }

    let start = rng.gen_range(0..nodes.len());
    let mut goal = rng.gen_range(0..nodes.len() - 1);
    if goal >= start {
        goal += 1;
    }
    Ok((nodes[start], nodes[goal]))
}
