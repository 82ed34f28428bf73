//! Error types for table construction, row edits and pagination.

use thiserror::Error;

/// Errors raised by table operations.
///
/// Every error is reported at the call that violated a precondition, and the
/// table is left exactly as it was before that call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DapperTableError {
    /// Invalid table configuration (headers, pagination, wrappers).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Row content does not match the table's shape.
    #[error("invalid row content: expected {expected}, got {actual}")]
    Shape { expected: String, actual: String },

    /// Row index outside the current bounds.
    #[error("invalid row index {index}: table has {len} rows")]
    Index { index: usize, len: usize },

    /// Content that cannot fit in a single message.
    #[error("content {content:?} does not fit in max length {limit}")]
    Capacity { content: String, limit: usize },
}

impl DapperTableError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a shape error.
    pub fn shape(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Shape {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a capacity error.
    pub fn capacity(content: impl Into<String>, limit: usize) -> Self {
        Self::Capacity {
            content: content.into(),
            limit,
        }
    }
}

impl From<serde_yaml::Error> for DapperTableError {
    fn from(err: serde_yaml::Error) -> Self {
        DapperTableError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DapperTableError {
    fn from(err: serde_json::Error) -> Self {
        DapperTableError::Config(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, DapperTableError>;
