//! `frontier generate` - random connected graph as an edge list

use tracing::debug;

use crate::cli::commands::GenerateArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use frontier_core::error::Result;
use frontier_core::graph::load::write_edge_list;
use frontier_core::graph::RandomGraphBuilder;

pub fn execute(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
    let mut builder = RandomGraphBuilder::new(args.nodes).max_weight(args.max_weight);
    if let Some(extra_edges) = args.extra_edges {
        builder = builder.extra_edges(extra_edges);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let graph = builder.build()?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        seed = builder.seed_value(),
        "generate"
    );

    match ctx.cli.format {
        OutputFormat::Json => {
            let edges: Vec<_> = graph.edges().collect();
            let output = serde_json::json!({
                "nodes": graph.node_count(),
                "seed": builder.seed_value(),
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "# random connected graph: {} nodes, {} edges, seed {}",
                    graph.node_count(),
                    graph.edge_count(),
                    builder.seed_value()
                );
            }
            print!("{}", write_edge_list(&graph));
        }
    }

    Ok(())
}
