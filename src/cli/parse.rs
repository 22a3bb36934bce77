use frontier_core::graph::NodeId;

/// Parse a node id from string
pub fn parse_node_id(s: &str) -> std::result::Result<NodeId, String> {
    s.parse::<NodeId>().map_err(|e| e.to_string())
}

/// Parse a node count, requiring at least two nodes
pub fn parse_node_count(s: &str) -> std::result::Result<u32, String> {
    let count: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid node count: {}", s))?;
    if count < 2 {
        return Err(format!("node count must be at least 2, got {}", count));
    }
    Ok(count)
}
