//! Breadth-first traversal.
//!
//! This module provides [`BreadthFirst`], a lazy iterator that visits
//! every vertex reachable from a starting vertex in breadth-first order:
//! the frontier is a first-in-first-out queue seeded with the start
//! vertex, and each processed vertex enqueues all of its neighbors.
//!
//! The visited check happens on *dequeue*, not on enqueue. A vertex may
//! therefore sit in the frontier more than once, but only its first
//! dequeue produces it; later dequeues are dropped. The output contains
//! each reachable vertex exactly once.
//!
//! # Example
//!
//! ```
//! use lineage::{Graph, VertexId};
//!
//! let graph = Graph::from_edges(&[
//!     (VertexId::new(1), VertexId::new(2)),
//!     (VertexId::new(2), VertexId::new(3)),
//! ]);
//!
//! let order: Vec<_> = graph.breadth_first(VertexId::new(1))?.collect();
//! assert_eq!(order, vec![VertexId::new(1), VertexId::new(2), VertexId::new(3)]);
//! # Ok::<(), lineage::GraphError>(())
//! ```

use std::collections::{HashSet, VecDeque};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::types::VertexId;

/// Lazy breadth-first traversal over the vertices reachable from a start
/// vertex.
///
/// Created by [`Graph::breadth_first`]. Yields each reachable vertex
/// exactly once, nearer vertices before farther ones. The order among
/// vertices at the same distance is unspecified because neighbor sets
/// are unordered.
#[derive(Debug)]
pub struct BreadthFirst<'g> {
    graph: &'g Graph,
    frontier: VecDeque<VertexId>,
    visited: HashSet<VertexId>,
}

impl<'g> BreadthFirst<'g> {
    pub(crate) fn new(graph: &'g Graph, start: VertexId) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        Self { graph, frontier, visited: HashSet::new() }
    }
}

impl Iterator for BreadthFirst<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.frontier.pop_front() {
            // First dequeue of a vertex processes it; duplicates in the
            // frontier are dropped here.
            if !self.visited.insert(current) {
                continue;
            }
            if let Some(neighbors) = self.graph.adjacency(current) {
                for &neighbor in neighbors {
                    self.frontier.push_back(neighbor);
                }
            }
            return Some(current);
        }
        None
    }
}

impl Graph {
    /// Traverse the graph breadth-first from `start`.
    ///
    /// Returns a lazy iterator yielding every vertex reachable from
    /// `start` exactly once, in breadth-first order. A start vertex with
    /// no outgoing edges yields just itself.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex
    /// of the graph.
    pub fn breadth_first(&self, start: VertexId) -> GraphResult<BreadthFirst<'_>> {
        if !self.contains(start) {
            return Err(GraphError::VertexNotFound(start));
        }
        Ok(BreadthFirst::new(self, start))
    }
}
