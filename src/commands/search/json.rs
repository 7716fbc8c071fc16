use super::SearchReport;
use pathsearch_core::error::Result;

/// Output in JSON format
pub fn output(report: &SearchReport) -> Result<()> {
    let json = serde_json::json!({
        "nodes": report.node_count,
        "edges": report.edge_count,
        "source": report.source,
        "target": report.target,
        "results": report.results,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
