//! Error types and exit codes for stride
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Input error (malformed graph, out-of-range vertex, unreadable dictionary)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the stride binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input error - malformed graph, bad vertex, unreadable dictionary (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during stride operations
#[derive(Error, Debug)]
pub enum StrideError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Input errors (exit code 3)
    // Field is named `vertex` rather than `source` so thiserror does not
    // treat it as an error cause.
    #[error("source vertex {vertex} out of range (graph has {vertices} vertices)")]
    SourceOutOfRange { vertex: usize, vertices: usize },

    #[error("vertex {vertex} out of range (graph has {vertices} vertices)")]
    VertexOutOfRange { vertex: usize, vertices: usize },

    #[error("malformed graph in {path:?}: {reason}")]
    MalformedGraph { path: PathBuf, reason: String },

    #[error("cannot read dictionary {path:?}: {reason}")]
    DictionaryUnreadable { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl StrideError {
    /// Map this error to its process exit code
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            StrideError::UnknownFormat(_)
            | StrideError::DuplicateFormat
            | StrideError::UsageError(_) => ExitCode::Usage,

            // Input errors
            StrideError::SourceOutOfRange { .. }
            | StrideError::VertexOutOfRange { .. }
            | StrideError::MalformedGraph { .. }
            | StrideError::DictionaryUnreadable { .. } => ExitCode::Data,

            // Generic failures
            StrideError::Json(_) | StrideError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable machine-readable error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            StrideError::UnknownFormat(_) => "unknown_format",
            StrideError::DuplicateFormat => "duplicate_format",
            StrideError::UsageError(_) => "usage_error",
            StrideError::SourceOutOfRange { .. } => "source_out_of_range",
            StrideError::VertexOutOfRange { .. } => "vertex_out_of_range",
            StrideError::MalformedGraph { .. } => "malformed_graph",
            StrideError::DictionaryUnreadable { .. } => "dictionary_unreadable",
            StrideError::Json(_) => "json_error",
            StrideError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}

/// Result type alias for stride operations
pub type Result<T> = std::result::Result<T, StrideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Failure), 1);
        assert_eq!(i32::from(ExitCode::Usage), 2);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_usage_errors_map_to_exit_2() {
        assert_eq!(
            StrideError::UnknownFormat("xml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(StrideError::DuplicateFormat.exit_code(), ExitCode::Usage);
    }

    #[test]
    fn test_input_errors_map_to_exit_3() {
        let err = StrideError::SourceOutOfRange {
            vertex: 9,
            vertices: 4,
        };
        assert_eq!(err.exit_code(), ExitCode::Data);

        let err = StrideError::MalformedGraph {
            path: PathBuf::from("g.txt"),
            reason: "missing vertex count".into(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn test_source_out_of_range_has_no_cause() {
        // The vertex index is payload, not a wrapped error.
        let err = StrideError::SourceOutOfRange {
            vertex: 9,
            vertices: 4,
        };
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(
            err.to_string(),
            "source vertex 9 out of range (graph has 4 vertices)"
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = StrideError::SourceOutOfRange {
            vertex: 9,
            vertices: 4,
        };
        let json = err.to_json();
        assert_eq!(json["code"], 3);
        assert_eq!(json["type"], "source_out_of_range");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("source vertex 9 out of range"));
    }
}
