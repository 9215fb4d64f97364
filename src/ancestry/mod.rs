//! Ancestry queries over family-tree edge lists.
//!
//! This module answers one question: given a flat list of
//! `(ancestor, child)` pairs, which ancestor of a starting vertex is the
//! farthest away? The edge list is read once into a reversed adjacency
//! mapping (child -> set of direct ancestors), then a depth-first search
//! walks backward from the starting vertex tracking the distance of each
//! visit.
//!
//! # Determinism
//!
//! Ancestor sets are unordered, so equally distant candidates can be
//! reached in any order. The result is made deterministic by the
//! tie-break rule: at equal distance, the numerically smaller identifier
//! wins.
//!
//! # Example
//!
//! ```
//! use lineage::{earliest_ancestor, VertexId};
//!
//! let v = VertexId::new;
//! let pairs = [(v(10), v(1)), (v(1), v(3))];
//!
//! // 10 -> 1 -> 3, so the earliest ancestor of 3 is 10.
//! assert_eq!(earliest_ancestor(&pairs, v(3)), Some(v(10)));
//!
//! // 10 has no ancestors at all.
//! assert_eq!(earliest_ancestor(&pairs, v(10)), None);
//! ```

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::types::VertexId;

/// Find the most distant ancestor of `start` in a family-tree edge list.
///
/// `pairs` is a sequence of `(ancestor, child)` edges forming a directed
/// acyclic graph. The search follows the edges backward from `start`,
/// and among the reachable vertices that themselves have no ancestors
/// returns the one at the greatest distance; at equal distance the
/// numerically smaller identifier wins.
///
/// Returns `None` when `start` has no ancestors at all.
#[must_use]
pub fn earliest_ancestor(pairs: &[(VertexId, VertexId)], start: VertexId) -> Option<VertexId> {
    let mut parents: HashMap<VertexId, HashSet<VertexId>> = HashMap::new();
    for &(ancestor, child) in pairs {
        parents.entry(child).or_default().insert(ancestor);
    }

    // Frontier of (vertex, distance from start). Visits are keyed by the
    // pair, not the vertex alone: a vertex reached again at a different
    // distance must be re-explored or the maximum distance can be missed.
    let mut frontier: Vec<(VertexId, usize)> = vec![(start, 0)];
    let mut visited: HashSet<(VertexId, usize)> = HashSet::new();
    let mut best = (start, 0);

    while let Some((vertex, distance)) = frontier.pop() {
        if !visited.insert((vertex, distance)) {
            continue;
        }
        match parents.get(&vertex) {
            Some(ancestors) if !ancestors.is_empty() => {
                for &ancestor in ancestors {
                    let next = (ancestor, distance + 1);
                    if !visited.contains(&next) {
                        frontier.push(next);
                    }
                }
            }
            // A root: no recorded ancestors. Candidate for the answer.
            _ => {
                if distance > best.1 || (distance == best.1 && vertex < best.0) {
                    best = (vertex, distance);
                }
            }
        }
    }

    debug!(%start, answer = %best.0, distance = best.1, "earliest ancestor search done");
    (best.0 != start).then_some(best.0)
}
