//! Directed graph storage.
//!
//! This module provides [`Graph`], an adjacency-set representation of a
//! directed graph: a mapping from each vertex to the unordered set of its
//! outgoing neighbors. Mutation is explicit (add/remove vertex, add/remove
//! edge); traversal and search operations live in [`crate::traversal`].
//!
//! # Example
//!
//! ```
//! use lineage::{Graph, VertexId};
//!
//! let mut graph = Graph::new();
//! let a = VertexId::new(1);
//! let b = VertexId::new(2);
//!
//! graph.add_vertex(a);
//! graph.add_vertex(b);
//! graph.add_edge(a, b)?;
//!
//! assert!(graph.neighbors(a)?.contains(&b));
//! # Ok::<(), lineage::GraphError>(())
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{GraphError, GraphResult};
use crate::types::VertexId;

/// An in-memory directed graph.
///
/// Each vertex maps to the set of vertices its outgoing edges point to.
/// Neighbor sets are unordered; membership tests and insertions are
/// expected O(1). Every vertex referenced by an edge is itself present
/// in the mapping: `add_edge` requires both endpoints to exist, and
/// `remove_vertex` scrubs the removed vertex from every remaining
/// neighbor set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Vertex -> set of outgoing neighbors.
    vertices: HashMap<VertexId, HashSet<VertexId>>,
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a list of directed edges.
    ///
    /// Both endpoints of every edge are added as vertices first, so the
    /// edge insertions cannot fail.
    #[must_use]
    pub fn from_edges(edges: &[(VertexId, VertexId)]) -> Self {
        let mut graph = Self::new();
        for &(from, to) in edges {
            graph.vertices.entry(from).or_default();
            graph.vertices.entry(to).or_default();
        }
        for &(from, to) in edges {
            // Both endpoints were just inserted.
            let _ = graph.add_edge(from, to);
        }
        graph
    }

    /// Add a vertex with an empty neighbor set.
    ///
    /// Re-adding an existing vertex resets its neighbor set to empty.
    /// Incoming edges from other vertices are not affected.
    pub fn add_vertex(&mut self, id: VertexId) {
        trace!(vertex = %id, "add vertex");
        self.vertices.insert(id, HashSet::new());
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// Adding an edge that already exists is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is not a
    /// vertex of the graph; no edge is added in that case.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::VertexNotFound(to));
        }
        let Some(neighbors) = self.vertices.get_mut(&from) else {
            return Err(GraphError::VertexNotFound(from));
        };
        trace!(%from, %to, "add edge");
        neighbors.insert(to);
        Ok(())
    }

    /// Remove a vertex and every edge that references it.
    ///
    /// After removal no neighbor set in the graph contains `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `id` is not a vertex of
    /// the graph.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<()> {
        if self.vertices.remove(&id).is_none() {
            return Err(GraphError::VertexNotFound(id));
        }
        for neighbors in self.vertices.values_mut() {
            neighbors.remove(&id);
        }
        trace!(vertex = %id, "removed vertex");
        Ok(())
    }

    /// Remove the directed edge from `from` to `to`.
    ///
    /// Removing an edge that does not exist between two existing vertices
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is not a
    /// vertex of the graph.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::VertexNotFound(to));
        }
        let Some(neighbors) = self.vertices.get_mut(&from) else {
            return Err(GraphError::VertexNotFound(from));
        };
        trace!(%from, %to, "remove edge");
        neighbors.remove(&to);
        Ok(())
    }

    /// Get the outgoing neighbors of a vertex.
    ///
    /// The returned set is a read-only view; a vertex with no outgoing
    /// edges yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `id` is not a vertex of
    /// the graph.
    pub fn neighbors(&self, id: VertexId) -> GraphResult<&HashSet<VertexId>> {
        self.vertices.get(&id).ok_or(GraphError::VertexNotFound(id))
    }

    /// Check whether `id` is a vertex of the graph.
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(HashSet::len).sum()
    }

    /// Check whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over all vertex identifiers, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Neighbor set lookup that cannot fail.
    ///
    /// Used by traversal internals after the start vertex has been
    /// validated: every reachable vertex is guaranteed to be a key.
    pub(crate) fn adjacency(&self, id: VertexId) -> Option<&HashSet<VertexId>> {
        self.vertices.get(&id)
    }
}
