use frontier_core::error::Result;
use frontier_core::harness::{BfsReport, UcsReport};

use super::BfsSettings;

pub fn output_bfs(settings: &BfsSettings, report: &BfsReport) -> Result<()> {
    let output = serde_json::json!({
        "status": "ok",
        "seed": settings.seed,
        "nodes": report.nodes,
        "edges": report.edges,
        "trials": report.trials,
        "lazy_insertions": report.lazy_insertions,
        "eager_insertions": report.eager_insertions,
        "mean_lazy_insertions": report.mean_lazy_insertions(),
        "mean_eager_insertions": report.mean_eager_insertions(),
        "extra_insertions": report.extra_insertions(),
        "last": report.last,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ucs(name: &str, report: &UcsReport) -> Result<()> {
    let mut output = serde_json::to_value(report)?;
    if let Some(obj) = output.as_object_mut() {
        obj.insert("status".to_string(), serde_json::json!("ok"));
        obj.insert("graph".to_string(), serde_json::json!(name));
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
