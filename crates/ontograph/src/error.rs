//! Error types for ontograph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.
//! Unreachable targets are not errors: they surface as an empty path or a
//! `None` distance.

use thiserror::Error;

/// Result type alias for ontograph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph operations.
///
/// Errors are surfaced immediately to the caller; nothing is retried or
/// silently recovered inside the engine.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A directional query was issued against an undirected graph
    #[error("Cannot compute {operation} on an undirected graph")]
    Undirected {
        /// Name of the rejected query
        operation: &'static str,
    },

    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: String,
    },

    /// The graph contains a cycle where a DAG is required
    #[error("Cannot compute {operation}: the graph is not acyclic")]
    Cyclic {
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// I/O failure while reading or writing graph data
    #[error("I/O error: {message}")]
    Io {
        /// Detailed error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A delimited row could not be mapped onto the header
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow {
        /// 1-based line number in the input
        line: usize,
        /// Description of what went wrong
        message: String,
    },

    /// Serialization failure while exporting
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Underlying serializer error
        #[source]
        source: serde_json::Error,
    },

    /// Type mismatch when updating a property
    #[error("Property type mismatch: expected {expected}, got {actual} for key '{key}'")]
    PropertyTypeMismatch {
        /// Property key
        key: String,
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },
}

impl GraphError {
    /// Create a node-not-found error for any displayable id.
    pub fn node_not_found(node_id: impl std::fmt::Display) -> Self {
        Self::NodeNotFound {
            node_id: node_id.to_string(),
        }
    }

    /// Create an I/O error from a message and its source.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error from a message and its source.
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}
