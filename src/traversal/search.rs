//! Path search between two vertices.
//!
//! Three searches, all carrying partial paths in the frontier rather
//! than bare vertices:
//!
//! - [`Graph::shortest_path`] - breadth-first; the first path dequeued
//!   whose last vertex is the destination is returned, which with a
//!   first-in-first-out frontier is guaranteed to have the fewest edges.
//! - [`Graph::find_path`] - depth-first; returns *some* valid path, not
//!   necessarily the shortest.
//! - [`Graph::find_path_recursive`] - depth-first by recursive
//!   backtracking.
//!
//! An unreachable destination is not an error: every search returns
//! `Ok(None)` in that case. Each vertex is marked visited when it is
//! popped as the last element of a frontier path, so each vertex's
//! outgoing edges are expanded at most once.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::traversal::Path;
use crate::types::VertexId;

impl Graph {
    /// Find a shortest path (fewest edges) from `start` to `destination`.
    ///
    /// Returns `Ok(None)` when `destination` is unreachable from
    /// `start`. When `start == destination` the result is the trivial
    /// single-vertex path.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex
    /// of the graph. An absent destination is simply unreachable.
    pub fn shortest_path(
        &self,
        start: VertexId,
        destination: VertexId,
    ) -> GraphResult<Option<Path>> {
        if !self.contains(start) {
            return Err(GraphError::VertexNotFound(start));
        }

        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut frontier: VecDeque<(VertexId, Vec<VertexId>)> = VecDeque::new();
        frontier.push_back((start, vec![start]));

        while let Some((current, path)) = frontier.pop_front() {
            if current == destination {
                debug!(%start, %destination, length = path.len() - 1, "shortest path found");
                return Ok(Some(Path::from_vertices(path)));
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(neighbors) = self.adjacency(current) {
                for &neighbor in neighbors {
                    let mut extended = path.clone();
                    extended.push(neighbor);
                    frontier.push_back((neighbor, extended));
                }
            }
        }

        debug!(%start, %destination, "no path");
        Ok(None)
    }

    /// Find some path from `start` to `destination`, depth-first.
    ///
    /// The returned path is valid (every consecutive pair is a directed
    /// edge) but not necessarily the shortest. Returns `Ok(None)` when
    /// `destination` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex
    /// of the graph.
    pub fn find_path(&self, start: VertexId, destination: VertexId) -> GraphResult<Option<Path>> {
        if !self.contains(start) {
            return Err(GraphError::VertexNotFound(start));
        }

        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut frontier: Vec<(VertexId, Vec<VertexId>)> = vec![(start, vec![start])];

        while let Some((current, path)) = frontier.pop() {
            if current == destination {
                return Ok(Some(Path::from_vertices(path)));
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(neighbors) = self.adjacency(current) {
                for &neighbor in neighbors {
                    let mut extended = path.clone();
                    extended.push(neighbor);
                    frontier.push((neighbor, extended));
                }
            }
        }

        Ok(None)
    }

    /// Find some path from `start` to `destination` by recursive
    /// backtracking.
    ///
    /// Equivalent result contract to [`Graph::find_path`]. The visited
    /// set and accumulated path are initialized fresh for every call and
    /// passed down through the recursion explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `start` is not a vertex
    /// of the graph.
    pub fn find_path_recursive(
        &self,
        start: VertexId,
        destination: VertexId,
    ) -> GraphResult<Option<Path>> {
        if !self.contains(start) {
            return Err(GraphError::VertexNotFound(start));
        }
        let mut visited = HashSet::new();
        let found = self.search_recursive(start, destination, &mut visited, vec![start]);
        Ok(found.map(Path::from_vertices))
    }

    fn search_recursive(
        &self,
        current: VertexId,
        destination: VertexId,
        visited: &mut HashSet<VertexId>,
        path: Vec<VertexId>,
    ) -> Option<Vec<VertexId>> {
        if current == destination {
            return Some(path);
        }
        visited.insert(current);
        if let Some(neighbors) = self.adjacency(current) {
            for &neighbor in neighbors {
                if visited.contains(&neighbor) {
                    continue;
                }
                let mut extended = path.clone();
                extended.push(neighbor);
                if let Some(found) =
                    self.search_recursive(neighbor, destination, visited, extended)
                {
                    return Some(found);
                }
            }
        }
        None
    }
}
