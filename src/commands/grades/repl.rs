use std::io::{BufRead, Write};

use pathsearch_core::error::Result;
use pathsearch_core::format::OutputFormat;
use pathsearch_core::grades::{GradeBook, GradeField, StudentRecord, Subject};
use pathsearch_core::records::escape_quotes;

const HELP: &str = "\
commands:
  names                     all students by name
  find NAME                 one student's grades
  physics|maths|chemistry|biology|total
                            all students, highest grade first
  <field>Until N            students with <field> >= N
  count <field> N           number of students with <field> >= N
  help                      show this message
  quit | exit               leave";

/// One parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Names,
    Find(String),
    Sorted(GradeField),
    AtLeast(GradeField, u32),
    Count(GradeField, u32),
    Help,
    Quit,
}

fn parse_threshold(token: Option<&str>, command: &str) -> std::result::Result<u32, String> {
    let token = token.ok_or_else(|| format!("{} needs a grade threshold", command))?;
    token
        .parse()
        .map_err(|_| format!("invalid threshold '{}' for {}", token, command))
}

/// Parse one input line. `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> std::result::Result<Option<ReplCommand>, String> {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Ok(None);
    };

    let command = match word {
        "names" => ReplCommand::Names,
        "help" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        "find" => {
            let name = tokens
                .next()
                .ok_or_else(|| "find needs a student name".to_string())?;
            ReplCommand::Find(name.to_string())
        }
        "count" => {
            let field_word = tokens
                .next()
                .ok_or_else(|| "count needs a field and a threshold".to_string())?;
            let field = field_word
                .parse::<GradeField>()
                .map_err(|e| e.to_string())?;
            ReplCommand::Count(field, parse_threshold(tokens.next(), word)?)
        }
        _ => match word.strip_suffix("Until") {
            Some(prefix) => {
                let field = prefix
                    .parse::<GradeField>()
                    .map_err(|_| format!("unknown command: {}", word))?;
                ReplCommand::AtLeast(field, parse_threshold(tokens.next(), word)?)
            }
            None => ReplCommand::Sorted(
                word.parse::<GradeField>()
                    .map_err(|_| format!("unknown command: {}", word))?,
            ),
        },
    };

    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected argument '{}' for {}", extra, word));
    }
    Ok(Some(command))
}

fn render(record: &StudentRecord, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => {
            let mut line = format!("Name: {}", record.name());
            for subject in Subject::ALL {
                line.push_str(&format!(" {} grade: {}", subject, record.grade(subject)));
            }
            line.push_str(&format!(" Total grade: {}", record.total()));
            line
        }
        OutputFormat::Json => serde_json::json!({
            "name": record.name(),
            "physics": record.grade(Subject::Physics),
            "mathematics": record.grade(Subject::Mathematics),
            "chemistry": record.grade(Subject::Chemistry),
            "biology": record.grade(Subject::Biology),
            "total": record.total(),
        })
        .to_string(),
        OutputFormat::Records => {
            let mut line = format!("S name=\"{}\"", escape_quotes(record.name()));
            for subject in Subject::ALL {
                line.push_str(&format!(" {}={}", subject.command(), record.grade(subject)));
            }
            line.push_str(&format!(" total={}", record.total()));
            line
        }
    }
}

fn write_records<'a, W: Write>(
    out: &mut W,
    records: impl Iterator<Item = &'a StudentRecord>,
    format: OutputFormat,
) -> Result<()> {
    for record in records {
        writeln!(out, "{}", render(record, format))?;
    }
    Ok(())
}

/// Read commands from `input` until EOF or `quit`.
///
/// Invalid commands are reported on `err` and the loop keeps going.
pub fn run_repl<R: BufRead, W: Write, E: Write>(
    book: &GradeBook,
    format: OutputFormat,
    prompt: bool,
    input: R,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                tracing::debug!(input = %line.trim(), "invalid_command");
                writeln!(err, "error: {}", message)?;
                continue;
            }
        };

        match command {
            ReplCommand::Names => write_records(out, book.by_name(), format)?,
            ReplCommand::Find(name) => match book.find(&name) {
                Some(record) => write_records(out, std::iter::once(record), format)?,
                None => writeln!(err, "error: no student named {}", name)?,
            },
            ReplCommand::Sorted(field) => write_records(out, book.sorted(field), format)?,
            ReplCommand::AtLeast(field, threshold) => {
                write_records(out, book.at_least(field, threshold), format)?
            }
            ReplCommand::Count(field, threshold) => {
                let count = book.count_at_least(field, threshold);
                match format {
                    OutputFormat::Json => writeln!(
                        out,
                        "{}",
                        serde_json::json!({
                            "field": field.command(),
                            "threshold": threshold,
                            "count": count,
                        })
                    )?,
                    OutputFormat::Records => writeln!(
                        out,
                        "C field={} threshold={} count={}",
                        field.command(),
                        threshold,
                        count
                    )?,
                    OutputFormat::Human => writeln!(
                        out,
                        "{} students with {} >= {}",
                        count, field, threshold
                    )?,
                }
            }
            ReplCommand::Help => writeln!(out, "{}", HELP)?,
            ReplCommand::Quit => break,
        }
    }
    Ok(())
}
