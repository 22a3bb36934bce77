use crate::cli::Cli;
use crate::commands::helpers::{format_cost, format_path};
use frontier_core::harness::{BfsReport, UcsReport};

use super::BfsSettings;

pub fn output_bfs(cli: &Cli, settings: &BfsSettings, report: &BfsReport) {
    println!(
        "Random graph: {} nodes, {} edges (seed {})",
        report.nodes, report.edges, settings.seed
    );
    println!("Trials: {}", report.trials);
    println!();
    println!("Insertions     total      mean");
    println!(
        "  Lazy BFS   {:>8}  {:>8.1}",
        report.lazy_insertions,
        report.mean_lazy_insertions()
    );
    println!(
        "  Eager BFS  {:>8}  {:>8.1}",
        report.eager_insertions,
        report.mean_eager_insertions()
    );

    if let Some(last) = &report.last {
        println!();
        println!("Last trial: {} -> {}", last.start, last.goal);
        println!("  Lazy BFS   {}", format_path(&last.lazy_path));
        println!("  Eager BFS  {}", format_path(&last.eager_path));
        println!(
            "  Insertions {} vs {} ({} more)",
            last.lazy_insertions,
            last.eager_insertions,
            last.extra_insertions()
        );
    }

    if cli.quiet {
        return;
    }

    println!();
    println!(
        "OK: identical paths on all {} trials; eager BFS made {} extra insertions.",
        report.trials,
        report.extra_insertions()
    );
}

pub fn output_ucs(cli: &Cli, name: &str, report: &UcsReport) {
    println!("{}: {} nodes, {} edges", name, report.nodes, report.edges);
    println!(
        "OK: re-expanding UCS matches the backtracking oracle on all {} pairs.",
        report.pairs
    );

    if cli.quiet || report.divergences.is_empty() {
        return;
    }

    println!();
    println!(
        "Non-re-expanding UCS missed the optimum on {} pair(s):",
        report.divergences.len()
    );
    for divergence in &report.divergences {
        println!(
            "  {} -> {}: found {} (cost {}), optimal {} (cost {})",
            divergence.start,
            divergence.goal,
            format_path(&divergence.found.path),
            format_cost(divergence.found.cost),
            format_path(&divergence.optimal.path),
            format_cost(divergence.optimal.cost)
        );
    }
}
