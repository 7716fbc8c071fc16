//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{generate, grades, search};
use pathsearch_core::config::Config;
use pathsearch_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathsearch {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest-path search with stack, queue and priority-queue frontiers.");
        println!();
        println!("Run `pathsearch --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => search::execute(ctx, args),
            Commands::Grades(args) => grades::execute(ctx, args),
            Commands::Generate(args) => generate::execute(ctx, args),
        }
    }
}
