//! Human-readable output formatting for the search commands

use crate::cli::Cli;
use crate::commands::helpers::{format_cost, format_path};
use crate::commands::source::LoadedGraph;
use frontier_core::harness::{BfsComparison, Route, UcsComparison};

fn output_header(loaded: &LoadedGraph) {
    println!(
        "{} ({} nodes, {} edges)",
        loaded.name,
        loaded.graph.node_count(),
        loaded.graph.edge_count()
    );
    println!();
}

/// Output a BFS comparison in human-readable format
pub fn output_bfs_human(cli: &Cli, loaded: &LoadedGraph, comparison: &BfsComparison) {
    output_header(loaded);
    println!("BFS {} -> {}", comparison.start, comparison.goal);
    println!();
    println!("Lazy BFS");
    println!("  Path        {}", format_path(&comparison.lazy_path));
    println!("  Insertions  {}", comparison.lazy_insertions);
    println!();
    println!("Eager BFS");
    println!("  Path        {}", format_path(&comparison.eager_path));
    println!("  Insertions  {}", comparison.eager_insertions);

    if cli.quiet {
        return;
    }

    println!();
    if comparison.start_is_goal() {
        println!("Start equals goal: eager BFS returns at once, lazy BFS only stops");
        println!("when the start reappears as a neighbor, so it makes more insertions.");
        return;
    }
    println!(
        "Eager BFS made {} more insertions.",
        comparison.extra_insertions()
    );
    if comparison.identical() {
        println!("Both variants expand in the same order, so the paths are identical.");
    } else {
        println!("Paths differ.");
    }
}

fn output_route(title: &str, route: &Route) {
    println!("{}", title);
    println!("  Path  {}", format_path(&route.path));
    println!("  Cost  {}", format_cost(route.cost));
}

/// Output a UCS comparison in human-readable format
pub fn output_ucs_human(cli: &Cli, loaded: &LoadedGraph, comparison: &UcsComparison) {
    output_header(loaded);
    println!("UCS {} -> {}", comparison.start, comparison.goal);
    println!();
    output_route("Non-re-expanding UCS", &comparison.non_re_expanding);
    println!();
    output_route("Re-expanding UCS", &comparison.re_expanding);
    println!();
    output_route("Backtracking oracle", &comparison.oracle);

    if cli.quiet {
        return;
    }

    println!();
    if comparison.re_expanding_optimal() {
        println!("Re-expanding UCS is optimal on this pair.");
    } else {
        println!("Re-expanding UCS is NOT optimal on this pair.");
    }
    if !comparison.non_re_expanding_optimal() {
        println!("Non-re-expanding UCS returned a more expensive path.");
    }
    println!("Cheapest paths may differ when several exist; their costs may not.");
}
