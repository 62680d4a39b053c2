//! Error types for workgraph-algorithms
//!
//! Provides unified error handling across the crate.
//!
//! Only two conditions are caller-visible failures: a rejected argument
//! (empty required filter, negative shortest-path weight, unknown procedure,
//! undecodable payload) and an internal invariant breach. Everything else in
//! the error taxonomy resolves to documented sentinel outputs: missing
//! references are skipped or classified, zero denominators yield 0.0, and
//! unreachable targets yield an empty path with infinite cost.

use thiserror::Error;

/// Main error type for graph algorithm invocations
#[derive(Debug, Error)]
pub enum GraphError {
    /// Rejected input (fail fast, no partial output)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Dispatch received a procedure name that is not registered
    #[error("unknown procedure: {0}")]
    UnknownProcedure(String),

    /// Payload could not be decoded or a result could not be encoded
    #[error("codec error: {0}")]
    Codec(String),

    /// Invariant breach that is impossible in a correct implementation
    #[error("internal error: {0}")]
    Internal(String),
}

impl GraphError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        GraphError::InvalidArgument(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        GraphError::Internal(msg.into())
    }
}

/// Result type alias for graph algorithm operations
pub type Result<T> = std::result::Result<T, GraphError>;
