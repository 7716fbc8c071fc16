use super::SearchReport;
use pathsearch_core::records::{header, id_list};

/// Output in records format: one `R` line per strategy
pub fn output(report: &SearchReport) {
    println!(
        "{}",
        header(
            "search",
            &[
                ("nodes", report.node_count),
                ("edges", report.edge_count),
                ("from", report.source),
                ("to", report.target),
                ("runs", report.results.len()),
            ],
        )
    );

    for result in report.results {
        let stats = result.stats();
        let hops = result
            .hops()
            .map(|h| h.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "R strategy={} reachable={} cost={} hops={} pushed={} popped={} stale={} elapsed={:.6} path={}",
            result.strategy(),
            result.is_reachable(),
            result.total_cost(),
            hops,
            stats.nodes_pushed,
            stats.nodes_popped,
            stats.stale_skipped,
            stats.elapsed_secs(),
            id_list(result.path())
        );
    }
}
