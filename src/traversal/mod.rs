//! Graph traversal and path search algorithms.
//!
//! This module provides the traversal primitives over
//! [`Graph`](crate::Graph):
//!
//! - [`BreadthFirst`] - lazy breadth-first traversal iterator
//! - [`DepthFirst`] - lazy depth-first traversal iterator
//! - [`depth_first_recursive`](crate::Graph::depth_first_recursive) -
//!   recursive depth-first traversal
//! - [`shortest_path`](crate::Graph::shortest_path) - breadth-first
//!   shortest-path search
//! - [`find_path`](crate::Graph::find_path) /
//!   [`find_path_recursive`](crate::Graph::find_path_recursive) -
//!   depth-first path search
//! - [`Path`] - the result of a successful path search
//!
//! # Visitation order
//!
//! Neighbor sets are unordered, so the exact visitation order of a
//! traversal is unspecified beyond its breadth-first or depth-first
//! shape. What is guaranteed: every vertex reachable from the start is
//! produced exactly once, and every returned path is a real walk through
//! the graph's edges. Tests should assert those properties rather than
//! one particular sequence.
//!
//! # Example
//!
//! ```
//! use lineage::{Graph, VertexId};
//!
//! let graph = Graph::from_edges(&[
//!     (VertexId::new(1), VertexId::new(2)),
//!     (VertexId::new(2), VertexId::new(3)),
//!     (VertexId::new(1), VertexId::new(3)),
//! ]);
//!
//! // Reachability, each vertex exactly once
//! let visited: Vec<_> = graph.breadth_first(VertexId::new(1))?.collect();
//! assert_eq!(visited.len(), 3);
//!
//! // Fewest-edges path
//! let path = graph.shortest_path(VertexId::new(1), VertexId::new(3))?.unwrap();
//! assert_eq!(path.len(), 1);
//! # Ok::<(), lineage::GraphError>(())
//! ```

mod bfs;
mod dfs;
mod path;
mod search;


pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use path::Path;
