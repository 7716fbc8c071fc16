//! Student grade book
//!
//! A flat record store with precomputed sort orders:
//! - `subject`: the fixed subject enumeration and its name mapping
//! - `book`: record arena, parsing and ordered queries
//! - `generate`: synthetic grade data for exercising the book

pub mod book;
pub mod generate;
pub mod subject;

pub use book::{GradeBook, StudentRecord};
pub use generate::generate_lines;
pub use subject::{GradeField, Subject};
