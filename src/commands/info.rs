//! `frontier info` - shape of a graph

use crate::cli::commands::InfoArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::source::resolve_graph;
use frontier_core::error::Result;
use frontier_core::graph::GraphSummary;

pub fn execute(ctx: &CommandContext, args: &InfoArgs) -> Result<()> {
    let loaded = resolve_graph(&args.source, ctx.config.ucs.graph.as_deref())?;
    let summary = GraphSummary::of(&loaded.name, &loaded.graph);

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut output = serde_json::to_value(&summary)?;
            if let (Some(seed), Some(obj)) = (loaded.seed, output.as_object_mut()) {
                obj.insert("seed".to_string(), serde_json::json!(seed));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(&summary),
    }

    Ok(())
}

fn output_human(summary: &GraphSummary) {
    println!("{}", summary.name);
    println!();
    println!("  Nodes      {}", summary.nodes);
    println!("  Edges      {}", summary.edges);
    println!(
        "  Connected  {}",
        if summary.connected { "yes" } else { "no" }
    );
    if let Some(node) = &summary.sample_node {
        println!("  Node       {} (degree {})", node.id, node.degree);
    }
    if let Some(edge) = &summary.sample_edge {
        println!(
            "  Edge       {} - {} (weight {})",
            edge.from, edge.to, edge.weight
        );
    }
}
