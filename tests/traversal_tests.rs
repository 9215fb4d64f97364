//! Integration tests for breadth-first and depth-first traversal.
//!
//! Neighbor sets are unordered, so no test here asserts one exact
//! visitation sequence. The assertions cover what the traversals do
//! guarantee: the visited set equals the reachable set, each vertex
//! appears exactly once, breadth-first output is grouped by distance,
//! and every visited vertex (except the start) was discovered through a
//! real edge from an earlier-visited vertex.

use std::collections::HashSet;

use lineage::{Graph, GraphError, VertexId};

fn v(id: u64) -> VertexId {
    VertexId::new(id)
}

/// The seven-vertex fixture used throughout the traversal tests.
///
/// ```text
/// 1 -> 2 -> {3, 4},  3 <-> 5,  4 -> {6, 7},  6 -> 3,  7 -> {1, 6}
/// ```
///
/// Every vertex is reachable from 1.
fn sample_graph() -> Graph {
    Graph::from_edges(&[
        (v(5), v(3)),
        (v(6), v(3)),
        (v(7), v(1)),
        (v(4), v(7)),
        (v(1), v(2)),
        (v(7), v(6)),
        (v(2), v(4)),
        (v(3), v(5)),
        (v(2), v(3)),
        (v(4), v(6)),
    ])
}

/// Every vertex after the first must have an incoming edge from some
/// vertex visited before it. Both traversal shapes guarantee this.
fn assert_discovered_through_edges(graph: &Graph, order: &[VertexId]) {
    let mut seen = HashSet::new();
    let mut iter = order.iter();
    seen.insert(*iter.next().expect("traversal output is never empty"));
    for &vertex in iter {
        assert!(
            seen.iter().any(|&earlier| graph.neighbors(earlier).unwrap().contains(&vertex)),
            "{vertex} was visited before any of its predecessors"
        );
        seen.insert(vertex);
    }
}

// ============================================================================
// Breadth-first traversal
// ============================================================================

#[test]
fn breadth_first_visits_every_reachable_vertex_exactly_once() {
    let graph = sample_graph();
    let order: Vec<_> = graph.breadth_first(v(1)).unwrap().collect();

    assert_eq!(order.len(), 7, "each vertex exactly once");
    let visited: HashSet<_> = order.into_iter().collect();
    let expected: HashSet<_> = (1..=7).map(v).collect();
    assert_eq!(visited, expected);
}

#[test]
fn breadth_first_output_is_grouped_by_distance() {
    let graph = sample_graph();
    let order: Vec<_> = graph.breadth_first(v(1)).unwrap().collect();

    // Distances from 1: {1}=0, {2}=1, {3,4}=2, {5,6,7}=3.
    assert_eq!(order[0], v(1));
    assert_eq!(order[1], v(2));

    let mut level_two = order[2..4].to_vec();
    level_two.sort_unstable();
    assert_eq!(level_two, vec![v(3), v(4)]);

    let mut level_three = order[4..7].to_vec();
    level_three.sort_unstable();
    assert_eq!(level_three, vec![v(5), v(6), v(7)]);
}

#[test]
fn breadth_first_order_respects_the_edges() {
    let graph = sample_graph();
    let order: Vec<_> = graph.breadth_first(v(1)).unwrap().collect();
    assert_discovered_through_edges(&graph, &order);
}

#[test]
fn breadth_first_excludes_unreachable_vertices() {
    let mut graph = sample_graph();
    graph.add_vertex(v(99));

    let visited: HashSet<_> = graph.breadth_first(v(1)).unwrap().collect();
    assert!(!visited.contains(&v(99)));
}

#[test]
fn diamond_join_vertex_is_produced_once() {
    // 1 -> {2, 3}, 2 -> 4, 3 -> 4. Vertex 4 can enter the frontier
    // twice; only the first dequeue may produce it.
    let graph = Graph::from_edges(&[(v(1), v(2)), (v(1), v(3)), (v(2), v(4)), (v(3), v(4))]);

    let order: Vec<_> = graph.breadth_first(v(1)).unwrap().collect();
    assert_eq!(order.len(), 4);
    assert_eq!(order.iter().filter(|&&id| id == v(4)).count(), 1);

    let order: Vec<_> = graph.depth_first(v(1)).unwrap().collect();
    assert_eq!(order.len(), 4);
    assert_eq!(order.iter().filter(|&&id| id == v(4)).count(), 1);
}

#[test]
fn traversal_is_lazy() {
    let graph = sample_graph();

    // Taking only the first element must not require visiting the rest.
    let first: Vec<_> = graph.breadth_first(v(1)).unwrap().take(1).collect();
    assert_eq!(first, vec![v(1)]);
}

// ============================================================================
// Depth-first traversal
// ============================================================================

#[test]
fn depth_first_visits_every_reachable_vertex_exactly_once() {
    let graph = sample_graph();
    let order: Vec<_> = graph.depth_first(v(1)).unwrap().collect();

    assert_eq!(order.len(), 7);
    let visited: HashSet<_> = order.into_iter().collect();
    let expected: HashSet<_> = (1..=7).map(v).collect();
    assert_eq!(visited, expected);
}

#[test]
fn depth_first_order_respects_the_edges() {
    let graph = sample_graph();
    let order: Vec<_> = graph.depth_first(v(1)).unwrap().collect();
    assert_eq!(order[0], v(1));
    assert_discovered_through_edges(&graph, &order);
}

#[test]
fn recursive_depth_first_matches_iterative_visited_set() {
    let graph = sample_graph();

    let iterative: HashSet<_> = graph.depth_first(v(1)).unwrap().collect();
    let recursive = graph.depth_first_recursive(v(1)).unwrap();

    assert_eq!(recursive.len(), iterative.len());
    let recursive: HashSet<_> = recursive.into_iter().collect();
    assert_eq!(recursive, iterative);
}

#[test]
fn recursive_depth_first_state_is_fresh_per_call() {
    let graph = sample_graph();

    // A second call must produce a full traversal again, not an empty
    // one left over from shared visited state.
    let first = graph.depth_first_recursive(v(1)).unwrap();
    let second = graph.depth_first_recursive(v(1)).unwrap();
    assert_eq!(first.len(), 7);
    assert_eq!(second.len(), 7);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn single_vertex_graph_traverses_to_itself_only() {
    let mut graph = Graph::new();
    graph.add_vertex(v(1));

    let order: Vec<_> = graph.breadth_first(v(1)).unwrap().collect();
    assert_eq!(order, vec![v(1)]);

    let order: Vec<_> = graph.depth_first(v(1)).unwrap().collect();
    assert_eq!(order, vec![v(1)]);

    let order = graph.depth_first_recursive(v(1)).unwrap();
    assert_eq!(order, vec![v(1)]);
}

#[test]
fn traversal_from_missing_vertex_fails() {
    let graph = Graph::new();
    assert_eq!(graph.breadth_first(v(1)).unwrap_err(), GraphError::VertexNotFound(v(1)));
    assert_eq!(graph.depth_first(v(1)).unwrap_err(), GraphError::VertexNotFound(v(1)));
    assert_eq!(
        graph.depth_first_recursive(v(1)).unwrap_err(),
        GraphError::VertexNotFound(v(1))
    );
}
