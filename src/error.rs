//! Error types for graph operations.

use thiserror::Error;

use crate::types::VertexId;

/// Errors that can occur in graph operations.
///
/// Note that an unreachable destination is *not* an error: path searches
/// report it as `Ok(None)`, and ancestry queries as `None`. The only
/// failure here is referencing a vertex the graph does not contain,
/// which indicates a usage error and is always surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex identifier was referenced that is absent from the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
