//! Edge-list graph source
//!
//! Format: one edge per line, `node1 node2 [weight]`, whitespace separated.
//! The weight defaults to 1. Blank lines and `#` comments are skipped.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{FrontierError, Result};
use crate::graph::types::{Graph, NodeId, Weight};

/// Read a graph from an edge-list file
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_edge_list(path: &Path) -> Result<Graph> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FrontierError::GraphFileNotFound {
            path: path.to_path_buf(),
        },
        _ => FrontierError::Io(e),
    })?;

    let graph = parse_edge_list(&content)?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );
    Ok(graph)
}

/// Parse edge-list text into a graph
pub fn parse_edge_list(content: &str) -> Result<Graph> {
    let mut graph = Graph::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 || fields.len() > 3 {
            return Err(FrontierError::InvalidEdgeList {
                line: line_no,
                reason: format!("expected `node1 node2 [weight]`, got {:?}", line),
            });
        }

        let a = parse_node(fields[0], line_no)?;
        let b = parse_node(fields[1], line_no)?;
        let weight = match fields.get(2) {
            Some(token) => token
                .parse::<Weight>()
                .map_err(|_| FrontierError::InvalidEdgeList {
                    line: line_no,
                    reason: format!("weight must be a non-negative integer, got {:?}", token),
                })?,
            None => 1,
        };

        graph
            .add_edge(a, b, weight)
            .map_err(|e| FrontierError::InvalidEdgeList {
                line: line_no,
                reason: e.to_string(),
            })?;
    }

    Ok(graph)
}

/// Render a graph back into edge-list text
pub fn write_edge_list(graph: &Graph) -> String {
    let mut out = String::new();
    for (a, b, weight) in graph.edges() {
        out.push_str(&format!("{} {} {}\n", a, b, weight));
    }
    out
}

fn parse_node(token: &str, line: usize) -> Result<NodeId> {
    token
        .parse::<u32>()
        .map(NodeId)
        .map_err(|_| FrontierError::InvalidEdgeList {
            line,
            reason: format!("node id must be a non-negative integer, got {:?}", token),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_weighted_and_default_weight() {
        let graph = parse_edge_list("1 2 5\n2 3\n").unwrap();
        assert_eq!(graph.weight(NodeId(1), NodeId(2)), Some(5));
        assert_eq!(graph.weight(NodeId(2), NodeId(3)), Some(1));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let graph = parse_edge_list("# header\n\n1 2 3 # trailing\n   \n").unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_weight() {
        let err = parse_edge_list("1 2 3\n1 3 heavy\n").unwrap_err();
        match err {
            FrontierError::InvalidEdgeList { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(parse_edge_list("1\n").is_err());
        assert!(parse_edge_list("1 2 3 4\n").is_err());
    }

    #[test]
    fn test_parse_rejects_self_loop() {
        assert!(matches!(
            parse_edge_list("4 4 1\n"),
            Err(FrontierError::InvalidEdgeList { line: 1, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.dat");
        match load_edge_list(&path) {
            Err(FrontierError::GraphFileNotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("expected GraphFileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_write_then_load_preserves_edges() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.dat");
        let original = parse_edge_list("1 2 4\n2 3 1\n1 3 9\n").unwrap();
        fs::write(&path, write_edge_list(&original)).unwrap();

        let loaded = load_edge_list(&path).unwrap();
        assert_eq!(loaded.edge_count(), 3);
        assert_eq!(loaded.weight(NodeId(3), NodeId(1)), Some(9));
    }
}
