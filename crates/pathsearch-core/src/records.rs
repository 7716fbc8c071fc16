//! Utilities for records output format
//!
//! Every records document starts with an `H` header line followed by one
//! line per record, fields as `key=value`.

use std::fmt::Display;

/// Records format version written into every header
pub const RECORDS_VERSION: u32 = 1;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Build a header line: `H pathsearch=1 records=1 mode=<mode> k=v ...`
pub fn header<V: Display>(mode: &str, fields: &[(&str, V)]) -> String {
    let mut line = format!("H pathsearch=1 records={} mode={}", RECORDS_VERSION, mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Join node ids with commas, `-` for an empty list
pub fn id_list(ids: &[usize]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
