//! `frontier render` - Graphviz DOT output

use std::borrow::Cow;

use crate::cli::commands::RenderArgs;
use crate::cli::{Algorithm, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::source::{resolve_graph, resolve_pair};
use frontier_core::error::Result;
use frontier_core::render::{render_dot, Highlight};
use frontier_core::search::{bfs_lazy, ucs_re_expanding, SearchState};

pub fn execute(ctx: &CommandContext, args: &RenderArgs) -> Result<()> {
    let loaded = resolve_graph(&args.source, ctx.config.ucs.graph.as_deref())?;
    let graph = &loaded.graph;

    // BFS ignores weights, so its drawing labels every edge 1
    let mut drawn = Cow::Borrowed(graph);
    let mut pair = (args.pair.start, args.pair.goal);

    let search: Option<(SearchState, Vec<_>)> = match args.algorithm {
        None => None,
        Some(algorithm) => {
            let (start, goal) = resolve_pair(&args.pair, &ctx.config.ucs, graph)?;
            pair = (Some(start), Some(goal));
            Some(match algorithm {
                Algorithm::Bfs => {
                    drawn = Cow::Owned(graph.with_unit_weights());
                    let outcome = bfs_lazy(graph, start, goal);
                    (outcome.state, outcome.path)
                }
                Algorithm::Ucs => {
                    let outcome = ucs_re_expanding(graph, start, goal);
                    (outcome.state, outcome.path)
                }
            })
        }
    };

    let highlight = match &search {
        Some((state, path)) => Highlight {
            start: pair.0,
            goal: pair.1,
            state: Some(state),
            path,
        },
        None => Highlight {
            start: pair.0,
            goal: pair.1,
            ..Default::default()
        },
    };

    let dot = render_dot(&drawn, &loaded.name, &highlight);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": loaded.name,
                "dot": dot,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print!("{}", dot),
    }

    Ok(())
}
