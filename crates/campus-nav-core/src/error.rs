//! Error types and exit codes for campus-nav
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (graph structural violation, invalid map or config)

mod macros;

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
    /// Data error - structural violation, invalid input file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campus-nav operations
///
/// The structural variants are raised by the graph store and traversal
/// engine before any state is touched, so a failed call never leaves a
/// partially mutated graph behind.
#[derive(Error, Debug)]
pub enum NavError {
    // Structural graph violations (exit code 3)
    #[error("node already exists: {name}")]
    DuplicateNode { name: String },

    #[error("edge would connect {name} to itself")]
    SelfLoopEdge { name: String },

    #[error("node not found: {name}")]
    UnknownNode { name: String },

    #[error("edge already exists: {from} - {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("edge not found: {from} - {to}")]
    UnknownEdge { from: String, to: String },

    // Usage errors (exit code 2)
    #[error("unknown algorithm: {0} (expected: bfs or dfs)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl NavError {
    pub fn unknown_node(name: &str) -> Self {
        NavError::UnknownNode {
            name: name.to_string(),
        }
    }

    pub fn unknown_edge(from: &str, to: &str) -> Self {
        NavError::UnknownEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NavError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NavError::UnknownAlgorithm(_)
            | NavError::UsageError(_) => ExitCode::Usage,

            NavError::DuplicateNode { .. }
            | NavError::SelfLoopEdge { .. }
            | NavError::UnknownNode { .. }
            | NavError::DuplicateEdge { .. }
            | NavError::UnknownEdge { .. }
            | NavError::InvalidValue { .. }
            | NavError::Toml(_) => ExitCode::Data,

            NavError::Io(_)
            | NavError::TomlSerialize(_)
            | NavError::Json(_)
            | NavError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier used in structured output
    pub fn error_type(&self) -> &'static str {
        match self {
            NavError::DuplicateNode { .. } => "duplicate_node",
            NavError::SelfLoopEdge { .. } => "self_loop_edge",
            NavError::UnknownNode { .. } => "unknown_node",
            NavError::DuplicateEdge { .. } => "duplicate_edge",
            NavError::UnknownEdge { .. } => "unknown_edge",
            NavError::UnknownAlgorithm(_) => "unknown_algorithm",
            NavError::UsageError(_) => "usage_error",
            NavError::InvalidValue { .. } => "invalid_value",
            NavError::Io(_) => "io_error",
            NavError::Toml(_) => "toml_error",
            NavError::TomlSerialize(_) => "toml_serialize_error",
            NavError::Json(_) => "json_error",
            NavError::Other(_) => "other",
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

/// Result type alias for campus-nav operations
pub type Result<T> = std::result::Result<T, NavError>;
