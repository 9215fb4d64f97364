//! Depth-first traversal, iterative and recursive.
//!
//! [`DepthFirst`] is the iterative variant: the same lazy iterator shape
//! as [`BreadthFirst`](crate::traversal::BreadthFirst) but with a
//! last-in-first-out frontier, so traversal runs as far as possible
//! along each branch before backtracking. The visited check happens on
//! pop, so duplicate frontier entries are tolerated and dropped.
//!
//! [`Graph::depth_first_recursive`] produces the same visited-vertex set
//! by recursion, threading one mutable visited set through the whole
//! call tree. The visited state is created fresh for every top-level
//! call and passed down explicitly.
//!
//! The exact visitation order of either variant is unspecified beyond
//! depth-first validity, because neighbor sets are unordered.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::types::VertexId;

/// Lazy depth-first traversal over the vertices reachable from a start
/// vertex.
///
/// Created by [`Graph::depth_first`]. Yields each reachable vertex
/// exactly once.
#[derive(Debug)]
pub struct DepthFirst<'g> {
    graph: &'g Graph,
    frontier: Vec<VertexId>,
    visited: HashSet<VertexId>,
}

impl<'g> DepthFirst<'g> {
    pub(crate) fn new(graph: &'g Graph, start: VertexId) -> Self {
        Self { graph, frontier: vec![start], visited: HashSet::new() }
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.frontier.pop() {
            if !self.visited.insert(current) {
                continue;
            }
            if let Some(neighbors) = self.graph.adjacency(current) {
                for &neighbor in neighbors {
                    self.frontier.push(neighbor);
                }
            }
            return Some(current);
        }
        None
    }
}

impl Graph {
    /// Traverse the graph depth-first from `start`.
    ///
    /// Returns a lazy iterator yielding every vertex reachable from
    /// `start` exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex
    /// of the graph.
    pub fn depth_first(&self, start: VertexId) -> GraphResult<DepthFirst<'_>> {
        if !self.contains(start) {
            return Err(GraphError::VertexNotFound(start));
        }
        Ok(DepthFirst::new(self, start))
    }

    /// Traverse the graph depth-first from `start`, recursively.
    ///
    /// Visits the same vertex set as [`Graph::depth_first`] and returns
    /// the visitation order. One visited set is shared across the whole
    /// recursive call tree; it is initialized fresh on every call to
    /// this method.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex
    /// of the graph.
    pub fn depth_first_recursive(&self, start: VertexId) -> GraphResult<Vec<VertexId>> {
        if !self.contains(start) {
            return Err(GraphError::VertexNotFound(start));
        }
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.visit_depth_first(start, &mut visited, &mut order);
        Ok(order)
    }

    fn visit_depth_first(
        &self,
        vertex: VertexId,
        visited: &mut HashSet<VertexId>,
        order: &mut Vec<VertexId>,
    ) {
        if !visited.insert(vertex) {
            return;
        }
        order.push(vertex);
        if let Some(neighbors) = self.adjacency(vertex) {
            for &neighbor in neighbors {
                self.visit_depth_first(neighbor, visited, order);
            }
        }
    }
}
