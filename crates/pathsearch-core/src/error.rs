//! Error types and exit codes for pathsearch
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range node ids)
//! - 3: Data error (malformed matrix or grade file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathsearch operations
#[derive(Error, Debug)]
pub enum SearchError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown strategy: {0} (expected: stack, queue, or priority)")]
    UnknownStrategy(String),

    #[error("unknown subject: {0} (expected: physics, mathematics, chemistry, or biology)")]
    UnknownSubject(String),

    #[error("{0}")]
    UsageError(String),

    #[error("node {index} out of range (graph has {node_count} nodes)")]
    OutOfRange { index: usize, node_count: usize },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("input file not found: {path:?}")]
    InputNotFound { path: PathBuf },

    // Recoverable outcome, only surfaced by path reconstruction
    #[error("node {to} is unreachable from node {from}")]
    Unreachable { from: usize, to: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl SearchError {
    /// Create a malformed-input error
    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        SearchError::MalformedInput {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SearchError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SearchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SearchError::UnknownFormat(_)
            | SearchError::UnknownStrategy(_)
            | SearchError::UnknownSubject(_)
            | SearchError::UsageError(_)
            | SearchError::OutOfRange { .. }
            | SearchError::InvalidValue { .. } => ExitCode::Usage,

            SearchError::MalformedInput { .. } | SearchError::InputNotFound { .. } => {
                ExitCode::Data
            }

            SearchError::Unreachable { .. }
            | SearchError::Io(_)
            | SearchError::Json(_)
            | SearchError::Toml(_)
            | SearchError::FailedOperationWithTarget { .. }
            | SearchError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SearchError::UnknownFormat(_) => "unknown_format",
            SearchError::UnknownStrategy(_) => "unknown_strategy",
            SearchError::UnknownSubject(_) => "unknown_subject",
            SearchError::UsageError(_) => "usage_error",
            SearchError::OutOfRange { .. } => "out_of_range",
            SearchError::InvalidValue { .. } => "invalid_value",
            SearchError::MalformedInput { .. } => "malformed_input",
            SearchError::InputNotFound { .. } => "input_not_found",
            SearchError::Unreachable { .. } => "unreachable",
            SearchError::Io(_) => "io_error",
            SearchError::Json(_) => "json_error",
            SearchError::Toml(_) => "toml_error",
            SearchError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            SearchError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathsearch operations
pub type Result<T> = std::result::Result<T, SearchError>;
