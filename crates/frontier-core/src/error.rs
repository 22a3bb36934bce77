//! Error types and exit codes for frontier
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including validation failures)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing graph file, malformed edge list, unknown node)

mod macros;

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;
use crate::search::Cost;

/// Exit codes used by the frontier binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during frontier operations
#[derive(Error, Debug)]
pub enum FrontierError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("graph file {path:?} does not exist")]
    GraphFileNotFound { path: PathBuf },

    #[error("invalid edge list at line {line}: {reason}")]
    InvalidEdgeList { line: usize, reason: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Validation failures (exit code 1)
    #[error(
        "BFS variants disagree on trial {trial} ({start} -> {goal}): lazy {lazy:?}, eager {eager:?}"
    )]
    BfsMismatch {
        trial: usize,
        start: NodeId,
        goal: NodeId,
        lazy: Vec<NodeId>,
        eager: Vec<NodeId>,
    },

    #[error("eager BFS made fewer insertions than lazy BFS ({start} -> {goal}): eager {eager}, lazy {lazy}")]
    InsertionInvariant {
        start: NodeId,
        goal: NodeId,
        eager: usize,
        lazy: usize,
    },

    #[error("path {start} -> {goal} is not optimal: ucs cost {ucs}, oracle cost {oracle}")]
    CostMismatch {
        start: NodeId,
        goal: NodeId,
        ucs: Cost,
        oracle: Cost,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl FrontierError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FrontierError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node missing from the graph
    pub fn node_not_found(id: NodeId) -> Self {
        FrontierError::NodeNotFound { id }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FrontierError::UnknownFormat(_)
            | FrontierError::UsageError(_)
            | FrontierError::InvalidValue { .. } => ExitCode::Usage,

            FrontierError::GraphFileNotFound { .. }
            | FrontierError::InvalidEdgeList { .. }
            | FrontierError::NodeNotFound { .. }
            | FrontierError::InvalidConfig { .. } => ExitCode::Data,

            FrontierError::BfsMismatch { .. }
            | FrontierError::InsertionInvariant { .. }
            | FrontierError::CostMismatch { .. }
            | FrontierError::Io(_)
            | FrontierError::Json(_)
            | FrontierError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FrontierError::UnknownFormat(_) => "unknown_format",
            FrontierError::UsageError(_) => "usage_error",
            FrontierError::InvalidValue { .. } => "invalid_value",
            FrontierError::GraphFileNotFound { .. } => "graph_file_not_found",
            FrontierError::InvalidEdgeList { .. } => "invalid_edge_list",
            FrontierError::NodeNotFound { .. } => "node_not_found",
            FrontierError::InvalidConfig { .. } => "invalid_config",
            FrontierError::BfsMismatch { .. } => "bfs_mismatch",
            FrontierError::InsertionInvariant { .. } => "insertion_invariant",
            FrontierError::CostMismatch { .. } => "cost_mismatch",
            FrontierError::Io(_) => "io_error",
            FrontierError::Json(_) => "json_error",
            FrontierError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for frontier operations
pub type Result<T> = std::result::Result<T, FrontierError>;
