//! Command dispatch logic for pathsearch

use std::env;
use std::time::Instant;

use crate::cli::Cli;
use pathsearch_core::config::Config;
use pathsearch_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
