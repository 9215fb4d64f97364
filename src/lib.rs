//! `lineage`
//!
//! An in-memory directed graph with breadth-first and depth-first
//! traversal, path search, and ancestry queries.
//!
//! # Overview
//!
//! The crate has two independent entry points:
//!
//! - [`Graph`] - an adjacency-set directed graph with explicit
//!   vertex/edge mutation and six traversal/search operations
//!   (breadth-first and depth-first traversal, each vertex visited
//!   exactly once; shortest-path search; depth-first path search,
//!   iterative and recursive).
//! - [`earliest_ancestor`] - a one-shot query over a flat
//!   `(ancestor, child)` edge list that finds the most distant ancestor
//!   of a vertex, with a deterministic smallest-identifier tie-break.
//!
//! # Example
//!
//! ```
//! use lineage::{Graph, VertexId};
//!
//! let mut graph = Graph::new();
//! for id in 1..=3 {
//!     graph.add_vertex(VertexId::new(id));
//! }
//! graph.add_edge(VertexId::new(1), VertexId::new(2))?;
//! graph.add_edge(VertexId::new(2), VertexId::new(3))?;
//!
//! let path = graph.shortest_path(VertexId::new(1), VertexId::new(3))?;
//! assert_eq!(path.unwrap().len(), 2);
//! # Ok::<(), lineage::GraphError>(())
//! ```
//!
//! # Modules
//!
//! - [`graph`] - the graph store and its mutation operations
//! - [`traversal`] - traversal iterators and path search
//! - [`ancestry`] - the earliest-ancestor query
//! - [`error`] - error types ([`GraphError`])
//! - [`types`] - vertex identifiers ([`VertexId`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod ancestry;
pub mod error;
pub mod graph;
pub mod traversal;
pub mod types;

// Re-export commonly used types
pub use ancestry::earliest_ancestor;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use traversal::{BreadthFirst, DepthFirst, Path};
pub use types::VertexId;
