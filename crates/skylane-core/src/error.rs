//! Error types and exit codes for skylane
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown location, duplicate route, no path, etc.)

use thiserror::Error;

use crate::network::LocationId;

/// Exit codes reported by the skylane binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad graph state or no path (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during skylane operations
#[derive(Error, Debug)]
pub enum SkylaneError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("location {id} already exists")]
    DuplicateLocation { id: LocationId },

    #[error("unknown location: {id}")]
    UnknownLocation { id: LocationId },

    #[error("cannot add a route from {id} to itself")]
    SelfRoute { id: LocationId },

    #[error("route {from} -> {to} already exists")]
    DuplicateRoute { from: LocationId, to: LocationId },

    #[error("route {from} -> {to} does not exist")]
    RouteNotFound { from: LocationId, to: LocationId },

    #[error("no route from {from} to {to}")]
    Unreachable { from: LocationId, to: LocationId },

    #[error("no alternate route from {from} to {to}")]
    NoAlternateRoute { from: LocationId, to: LocationId },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SkylaneError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SkylaneError::UnknownFormat(_) | SkylaneError::UsageError(_) => ExitCode::Usage,

            SkylaneError::DuplicateLocation { .. }
            | SkylaneError::UnknownLocation { .. }
            | SkylaneError::SelfRoute { .. }
            | SkylaneError::DuplicateRoute { .. }
            | SkylaneError::RouteNotFound { .. }
            | SkylaneError::Unreachable { .. }
            | SkylaneError::NoAlternateRoute { .. } => ExitCode::Data,

            SkylaneError::Io(_) | SkylaneError::Json(_) | SkylaneError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SkylaneError::UnknownFormat(_) => "unknown_format",
            SkylaneError::UsageError(_) => "usage_error",
            SkylaneError::DuplicateLocation { .. } => "duplicate_location",
            SkylaneError::UnknownLocation { .. } => "unknown_location",
            SkylaneError::SelfRoute { .. } => "self_route",
            SkylaneError::DuplicateRoute { .. } => "duplicate_route",
            SkylaneError::RouteNotFound { .. } => "route_not_found",
            SkylaneError::Unreachable { .. } => "unreachable",
            SkylaneError::NoAlternateRoute { .. } => "no_alternate_route",
            SkylaneError::Io(_) => "io_error",
            SkylaneError::Json(_) => "json_error",
            SkylaneError::Other(_) => "other",
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

/// Result type alias for skylane operations
pub type Result<T> = std::result::Result<T, SkylaneError>;
