//! Graph and (start, goal) resolution shared by the commands
//!
//! Precedence: `--graph`, then `--random`, then `[ucs] graph` from the
//! config file, then the built-in cube.

use std::path::Path;

use tracing::debug;

use crate::cli::{GraphSourceArgs, PairArgs};
use frontier_core::config::UcsConfig;
use frontier_core::error::{FrontierError, Result};
use frontier_core::graph::{cube_graph, load_edge_list, Graph, NodeId, RandomGraphBuilder};

/// A resolved graph plus a display name
pub struct LoadedGraph {
    pub name: String,
    pub graph: Graph,
    /// Seed of a generated graph
    pub seed: Option<u64>,
}

pub fn resolve_graph(source: &GraphSourceArgs, fallback: Option<&Path>) -> Result<LoadedGraph> {
    if let Some(path) = source.graph.as_deref() {
        return load_file(path);
    }

    if let Some(nodes) = source.random {
        let mut builder = RandomGraphBuilder::new(nodes);
        if let Some(seed) = source.seed {
            builder = builder.seed(seed);
        }
        let graph = builder.build()?;
        debug!(nodes, seed = builder.seed_value(), "generated graph");
        return Ok(LoadedGraph {
            name: format!("Random graph (seed {})", builder.seed_value()),
            graph,
            seed: Some(builder.seed_value()),
        });
    }

    match fallback {
        Some(path) => load_file(path),
        None => Ok(LoadedGraph {
            name: "Cube".to_string(),
            graph: cube_graph(),
            seed: None,
        }),
    }
}

fn load_file(path: &Path) -> Result<LoadedGraph> {
    let graph = load_edge_list(path)?;
    Ok(LoadedGraph {
        name: path.display().to_string(),
        graph,
        seed: None,
    })
}

/// Start and goal from the flags, falling back to the `[ucs]` config pair
pub fn resolve_pair(pair: &PairArgs, defaults: &UcsConfig, graph: &Graph) -> Result<(NodeId, NodeId)> {
    let start = pair.start.unwrap_or(defaults.start);
    let goal = pair.goal.unwrap_or(defaults.goal);

    for id in [start, goal] {
        if !graph.contains(id) {
            return Err(FrontierError::node_not_found(id));
        }
    }
    Ok((start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_is_cube() {
        let loaded = resolve_graph(&GraphSourceArgs::default(), None).unwrap();
        assert_eq!(loaded.name, "Cube");
        assert_eq!(loaded.graph.node_count(), 8);
        assert!(loaded.seed.is_none());
    }

    #[test]
    fn test_flag_beats_config_fallback() {
        let dir = tempdir().unwrap();
        let flag = dir.path().join("flag.dat");
        let config = dir.path().join("config.dat");
        fs::write(&flag, "1 2\n").unwrap();
        fs::write(&config, "1 2\n2 3\n").unwrap();

        let source = GraphSourceArgs {
            graph: Some(flag),
            ..Default::default()
        };
        let loaded = resolve_graph(&source, Some(&config)).unwrap();
        assert_eq!(loaded.graph.node_count(), 2);

        let loaded = resolve_graph(&GraphSourceArgs::default(), Some(&config)).unwrap();
        assert_eq!(loaded.graph.node_count(), 3);
    }

    #[test]
    fn test_random_graph_is_seeded() {
        let source = GraphSourceArgs {
            random: Some(30),
            seed: Some(11),
            ..Default::default()
        };
        let a = resolve_graph(&source, None).unwrap();
        let b = resolve_graph(&source, None).unwrap();
        assert_eq!(a.seed, Some(11));
        assert_eq!(a.graph.edges().collect::<Vec<_>>(), b.graph.edges().collect::<Vec<_>>());
    }

    #[test]
    fn test_resolve_pair_defaults_and_missing_node() {
        let cube = cube_graph();
        let defaults = UcsConfig::default();

        let pair = resolve_pair(&PairArgs::default(), &defaults, &cube).unwrap();
        assert_eq!(pair, (NodeId(1), NodeId(2)));

        let args = PairArgs {
            start: Some(NodeId(42)),
            goal: None,
        };
        assert!(matches!(
            resolve_pair(&args, &defaults, &cube),
            Err(FrontierError::NodeNotFound { id }) if id == NodeId(42)
        ));
    }
}
