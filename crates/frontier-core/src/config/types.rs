//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// Experiment configuration (`frontier.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Unweighted BFS protocol
    #[serde(default)]
    pub bfs: BfsConfig,

    /// Weighted UCS protocol
    #[serde(default)]
    pub ucs: UcsConfig,
}

/// Random graph and trial settings for the BFS protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BfsConfig {
    #[serde(default = "default_nodes")]
    pub nodes: u32,

    /// Edges added on top of the spanning tree (defaults to `3 * nodes`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_edges: Option<usize>,

    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Fixed seed for reproducible runs; a fresh one is drawn when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl BfsConfig {
    pub fn extra_edges(&self) -> usize {
        self.extra_edges.unwrap_or(3 * self.nodes as usize)
    }
}

impl Default for BfsConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            extra_edges: None,
            trials: default_trials(),
            seed: None,
        }
    }
}

/// Weighted graph and default pair for UCS commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UcsConfig {
    /// Edge-list file; the cube fixture is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,

    #[serde(default = "default_start")]
    pub start: NodeId,

    #[serde(default = "default_goal")]
    pub goal: NodeId,
}

impl Default for UcsConfig {
    fn default() -> Self {
        Self {
            graph: None,
            start: default_start(),
            goal: default_goal(),
        }
    }
}

fn default_nodes() -> u32 {
    1000
}

fn default_trials() -> usize {
    1000
}

fn default_start() -> NodeId {
    NodeId(1)
}

fn default_goal() -> NodeId {
    NodeId(2)
}
