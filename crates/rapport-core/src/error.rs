//! Error types and exit codes for rapport
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including internal consistency faults)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed edge list, unreadable input)

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
    /// Data error - malformed edge list or missing input (3)
    Data = 3,
}

/// Errors that can occur during rapport operations
///
/// Disconnection and limit overruns are not errors; they are reported through
/// [`crate::PathOutcome`]. The only hard failure the engine itself produces is
/// [`RapportError::InconsistentDistance`].
#[derive(Error, Debug)]
pub enum RapportError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("edge list {path:?} line {line}: {reason}")]
    EdgeParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    /// The bidirectional search disagreed with the reference Dijkstra.
    /// This is an algorithmic defect, never a data condition.
    #[error(
        "internal consistency fault: path {from} -> {to} under limit {limit}: \
         bidirectional search reported {fast}, reference search reported {reference}"
    )]
    InconsistentDistance {
        from: String,
        to: String,
        limit: String,
        fast: String,
        reference: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RapportError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RapportError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RapportError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed edge-list line
    pub fn edge_parse(
        path: impl Into<PathBuf>,
        line: usize,
        reason: impl std::fmt::Display,
    ) -> Self {
        RapportError::EdgeParse {
            path: path.into(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RapportError::FailedOperation {
            operation: format!("{} {}", operation, path),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RapportError::UsageError(_)
            | RapportError::InvalidValue { .. } => ExitCode::Usage,

            RapportError::EdgeParse { .. } | RapportError::NotFound { .. } => ExitCode::Data,

            RapportError::Io(_)
            | RapportError::Json(_)
            | RapportError::Toml(_)
            | RapportError::FailedOperation { .. }
            | RapportError::InconsistentDistance { .. }
            | RapportError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RapportError::UsageError(_) => "usage_error",
            RapportError::InvalidValue { .. } => "invalid_value",
            RapportError::EdgeParse { .. } => "edge_parse",
            RapportError::NotFound { .. } => "not_found",
            RapportError::Io(_) => "io_error",
            RapportError::Json(_) => "json_error",
            RapportError::Toml(_) => "toml_error",
            RapportError::FailedOperation { .. } => "failed_operation",
            RapportError::InconsistentDistance { .. } => "inconsistent_distance",
            RapportError::Other(_) => "other",
        }
    }

    /// Whether this error signals an algorithmic defect rather than bad input
    pub fn is_internal_fault(&self) -> bool {
        matches!(self, RapportError::InconsistentDistance { .. })
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

/// Result type alias for rapport operations
pub type Result<T> = std::result::Result<T, RapportError>;
