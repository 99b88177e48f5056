//! Error types for dyngraph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.
//! Read paths (neighbors, snapshots, paths) never fail: unknown vertices
//! resolve to empty results.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dyngraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A self-loop was requested at staging time
    #[error("Invalid edge: self-loop on vertex {vertex}")]
    InvalidEdge {
        /// Vertex used as both endpoints
        vertex: String,
    },

    /// A queued change failed validation while the batch was being applied
    #[error("Commit rejected change #{index}: {reason}")]
    CommitRejected {
        /// Position of the failing change in the committed batch
        index: usize,
        /// Why the change was rejected
        reason: String,
    },

    /// Serialization error (JSON export)
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failure writing an export file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl GraphError {
    /// Create an invalid-edge error for a self-loop on `vertex`.
    pub fn invalid_edge(vertex: impl std::fmt::Display) -> Self {
        Self::InvalidEdge {
            vertex: vertex.to_string(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
