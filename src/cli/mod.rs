//! CLI argument parsing for pathsearch
//!
//! Uses clap derive. Global flags: --format, --quiet, --verbose,
//! --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GenerateArgs, GradesArgs, SearchArgs};
pub use pathsearch_core::format::OutputFormat;
use parse::parse_format;

/// Pathsearch - shortest paths over dense weighted graphs
#[derive(Parser, Debug)]
#[command(name = "pathsearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, or pathsearch_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./pathsearch.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two nodes with each frontier strategy
    Search(SearchArgs),

    /// Load a grade file and answer sort/filter queries interactively
    Grades(GradesArgs),

    /// Generate synthetic grade data
    Generate(GenerateArgs),
}
