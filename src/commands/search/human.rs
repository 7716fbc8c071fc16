use super::SearchReport;
use crate::cli::Cli;

/// Output in human-readable format
pub fn output(cli: &Cli, report: &SearchReport) {
    if !cli.quiet {
        println!(
            "Searching {} -> {} ({} nodes, {} edges)",
            report.source, report.target, report.node_count, report.edge_count
        );
        println!();
    }

    for (i, result) in report.results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let stats = result.stats();
        let hops = result
            .hops()
            .map(|h| h.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!("{}", result.strategy().label());
        println!("  Shortest path: {}", result.path_display());
        println!("  Number of hops: {}", hops);
        println!("  Total cost: {}", result.total_cost());
        println!("  Nodes pushed: {}", stats.nodes_pushed);
        println!("  Nodes popped: {}", stats.nodes_popped);
        println!("  Time taken: {:.6}s", stats.elapsed_secs());
    }
}
