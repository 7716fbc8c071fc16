//! Search command: run each frontier strategy over one matrix

mod human;
mod json;
mod records;

use std::time::Instant;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::CommandContext;
use pathsearch_core::error::Result;
use pathsearch_core::graph::{GraphStore, NodeId};
use pathsearch_core::search::{compare, SearchResult, Strategy};
use pathsearch_core::trace_time;

/// Everything the formatters need about one comparison
pub struct SearchReport<'a> {
    pub node_count: usize,
    pub edge_count: usize,
    pub source: NodeId,
    pub target: NodeId,
    pub results: &'a [SearchResult],
}

/// Strategies from the command line, deduplicated, else from config
fn select_strategies(requested: &[Strategy], configured: &[Strategy]) -> Vec<Strategy> {
    let source = if requested.is_empty() {
        configured
    } else {
        requested
    };
    let mut selected: Vec<Strategy> = Vec::with_capacity(source.len());
    for &strategy in source {
        if !selected.contains(&strategy) {
            selected.push(strategy);
        }
    }
    selected
}

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let settings = &ctx.config.search;
    let start = Instant::now();

    let path = args.file.clone().unwrap_or_else(|| settings.matrix.clone());
    let graph = GraphStore::load(&path)?;

    if ctx.cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_matrix");
    }

    let source = args.from.unwrap_or(settings.source);
    let target = args
        .to
        .unwrap_or_else(|| settings.resolve_target(graph.node_count()));
    let strategies = select_strategies(&args.strategy, &settings.strategies);

    let results = compare(&graph, &strategies, source, target)?;
    trace_time!(start, "search_all", runs = results.len());

    let report = SearchReport {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        source,
        target,
        results: &results,
    };

    match ctx.cli.format {
        OutputFormat::Human => human::output(ctx.cli, &report),
        OutputFormat::Json => json::output(&report)?,
        OutputFormat::Records => records::output(&report),
    }

    if ctx.cli.verbose {
        tracing::debug!(elapsed = ?ctx.start.elapsed(), "search_command");
    }

    Ok(())
}
