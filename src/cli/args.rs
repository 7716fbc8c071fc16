use super::parse::parse_strategy;
use clap::Args;
use pathsearch_core::search::Strategy;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Matrix file (defaults to the configured matrix, graph.txt)
    pub file: Option<PathBuf>,

    /// Source node
    #[arg(long)]
    pub from: Option<usize>,

    /// Target node (defaults to the last node)
    #[arg(long)]
    pub to: Option<usize>,

    /// Strategy to run: stack, queue or priority (repeatable; default all)
    #[arg(long, short, value_parser = parse_strategy, action = clap::ArgAction::Append)]
    pub strategy: Vec<Strategy>,
}

#[derive(Args, Debug, Clone)]
pub struct GradesArgs {
    /// Grade file with `name subject grade` lines
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of students
    #[arg(long, short = 'n')]
    pub students: usize,

    /// Random seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}
