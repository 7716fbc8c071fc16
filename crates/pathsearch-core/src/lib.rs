//! Pathsearch Core Library
//!
//! Shortest-path search over dense weighted graphs with interchangeable
//! frontier strategies, plus the grade-book utilities that ship with the CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod grades;
pub mod graph;
pub mod logging;
pub mod records;
pub mod search;
