//! Grades command: load a grade file, then answer queries from stdin

mod repl;

use std::io::{self, IsTerminal};
use std::time::Instant;

use crate::cli::GradesArgs;
use crate::commands::dispatch::CommandContext;
use pathsearch_core::error::Result;
use pathsearch_core::grades::GradeBook;

use repl::run_repl;

/// Execute the grades command
pub fn execute(ctx: &CommandContext, args: &GradesArgs) -> Result<()> {
    let start = Instant::now();
    let book = GradeBook::load(&args.file)?;

    if ctx.cli.verbose {
        tracing::debug!(students = book.len(), elapsed = ?start.elapsed(), "load_grades");
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && !ctx.cli.quiet;
    if interactive {
        println!(
            "Loaded {} students. Type `help` for commands.",
            book.len()
        );
    }

    run_repl(
        &book,
        ctx.cli.format,
        interactive,
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}
