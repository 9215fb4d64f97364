//! Paths produced by search operations.

// Allow expect - the invariant is guaranteed by the data structure
#![allow(clippy::expect_used)]

use serde::{Deserialize, Serialize};

use crate::types::VertexId;

/// A walk through the graph.
///
/// Represents an ordered sequence of vertices from a source to a target,
/// where each consecutive pair was connected by a directed edge at the
/// time of the search. A path always contains at least one vertex; the
/// absence of any path is represented by `Option::None` at the call
/// site, never by an empty `Path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    vertices: Vec<VertexId>,
}

impl Path {
    /// Create a path from a non-empty vertex sequence.
    pub(crate) fn from_vertices(vertices: Vec<VertexId>) -> Self {
        debug_assert!(!vertices.is_empty(), "a path has at least one vertex");
        Self { vertices }
    }

    /// Get the source vertex.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    /// Get the target vertex.
    #[must_use]
    pub fn target(&self) -> VertexId {
        *self.vertices.last().expect("path has at least one vertex")
    }

    /// The length of the path in edges.
    ///
    /// A single-vertex path (source == target) has length 0.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Check if the path is empty (source == target, no edges).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The vertices of the path, from source to target.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Consume the path, returning its vertex sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<VertexId> {
        self.vertices
    }
}

impl IntoIterator for Path {
    type Item = VertexId;
    type IntoIter = std::vec::IntoIter<VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}
