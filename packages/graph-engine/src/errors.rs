//! Error types for graph-engine
//!
//! Every failure is a precondition violation: it is reported immediately,
//! never recovered internally, and leaves the graph untouched.

use std::fmt;
use thiserror::Error;

/// Error kind tags (stable, snake_case)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required vertex was absent (never issued, removed, or cleared)
    InvalidVertex,
    /// A required edge was absent
    InvalidEdge,
    /// No edge connects the two given vertices
    NoSuchEdge,
    /// The given edge is not incident to the given vertex
    NoSuchVertex,
    /// Directed-only operation invoked on an undirected graph
    Direction,
    /// Vertex numbering would exceed the configured capacity
    CapacityExceeded,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidVertex => "invalid_vertex",
            ErrorKind::InvalidEdge => "invalid_edge",
            ErrorKind::NoSuchEdge => "no_such_edge",
            ErrorKind::NoSuchVertex => "no_such_vertex",
            ErrorKind::Direction => "direction",
            ErrorKind::CapacityExceeded => "capacity_exceeded",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for graph store and algorithm operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Invalid vertex: {0}")]
    InvalidVertex(String),

    #[error("Invalid edge: {0}")]
    InvalidEdge(String),

    #[error("No such edge: {0}")]
    NoSuchEdge(String),

    #[error("No such vertex: {0}")]
    NoSuchVertex(String),

    #[error("Direction error: {0}")]
    Direction(String),

    #[error("Vertex capacity exceeded: graph holds at most {max} vertex numbers")]
    CapacityExceeded { max: usize },
}

impl GraphError {
    pub fn invalid_vertex(msg: impl Into<String>) -> Self {
        GraphError::InvalidVertex(msg.into())
    }

    pub fn invalid_edge(msg: impl Into<String>) -> Self {
        GraphError::InvalidEdge(msg.into())
    }

    pub fn no_such_edge(msg: impl Into<String>) -> Self {
        GraphError::NoSuchEdge(msg.into())
    }

    pub fn no_such_vertex(msg: impl Into<String>) -> Self {
        GraphError::NoSuchVertex(msg.into())
    }

    pub fn direction(msg: impl Into<String>) -> Self {
        GraphError::Direction(msg.into())
    }

    /// Tag of this error, for callers that branch on the kind only
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::InvalidVertex(_) => ErrorKind::InvalidVertex,
            GraphError::InvalidEdge(_) => ErrorKind::InvalidEdge,
            GraphError::NoSuchEdge(_) => ErrorKind::NoSuchEdge,
            GraphError::NoSuchVertex(_) => ErrorKind::NoSuchVertex,
            GraphError::Direction(_) => ErrorKind::Direction,
            GraphError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
        }
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
