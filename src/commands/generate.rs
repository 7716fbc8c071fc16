//! Generate command: synthetic grade data on stdout

use crate::cli::{GenerateArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use pathsearch_core::error::Result;
use pathsearch_core::grades::generate_lines;

/// Execute the generate command
pub fn execute(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
    let lines = generate_lines(args.students, args.seed);
    tracing::debug!(students = args.students, seed = args.seed, lines = lines.len(), "generate");

    match ctx.cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "students": args.students,
                "seed": args.seed,
                "lines": lines,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human | OutputFormat::Records => {
            for line in &lines {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
