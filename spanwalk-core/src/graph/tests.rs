//! Unit tests for the undirected graph and its directed view.

use proptest::prelude::*;
use rstest::{fixture, rstest};
use spanwalk_test_support::tracing::RecordingLayer;

use crate::{
    GraphError,
    test_utils::{graph_from_rows, suite_proptest_config},
};

use super::{DirectedView, Edge, EdgeId, EdgeType, Graph, MAX_VERTICES, Vertex};

const fn v(id: u32) -> Vertex {
    Vertex::new(id)
}

const fn e(id: u32) -> EdgeId {
    EdgeId::new(id)
}

/// Ten vertices in two components: {0,1,2,3,6,7,8,9} joined by eight edges,
/// with 4 and 5 isolated.
#[fixture]
fn ten_nodes() -> Graph {
    let mut graph = Graph::new();
    for id in 0..10 {
        assert!(graph.add_vertex(v(id)));
    }
    for (edge, a, b) in [
        (0, 0, 1),
        (1, 1, 2),
        (2, 3, 6),
        (3, 6, 7),
        (4, 8, 9),
        (5, 9, 0),
        (6, 2, 7),
        (7, 1, 8),
    ] {
        assert!(graph.add_edge(Edge::new(edge, 1), v(a), v(b)));
    }
    graph
}

#[rstest]
fn counts_match_construction(ten_nodes: Graph) {
    assert_eq!(ten_nodes.vertex_count(), 10);
    assert_eq!(ten_nodes.edge_count(), 8);
    assert_eq!(ten_nodes.neighbor_count(v(0)), Some(2));
    assert_eq!(ten_nodes.neighbor_count(v(1)), Some(3));
    assert_eq!(ten_nodes.degree(v(4)), Some(0));
    assert_eq!(ten_nodes.degree(v(42)), None);
}

#[rstest]
fn endpoints_are_reported_lower_id_first(ten_nodes: Graph) {
    assert_eq!(ten_nodes.endpoints(e(5)), Some((v(0), v(9))));
    assert_eq!(ten_nodes.incident_vertices(e(5)), Some([v(0), v(9)]));
    assert_eq!(ten_nodes.endpoints(e(99)), None);
}

#[rstest]
fn reachable_set_covers_the_component(ten_nodes: Graph) {
    let reachable = ten_nodes.reachable_set(v(1)).expect("vertex 1 is present");
    assert_eq!(reachable.len(), 7);
    assert!(!reachable.contains(&v(1)));
    assert!(!reachable.contains(&v(4)));
    assert!(!reachable.contains(&v(5)));
}

#[rstest]
fn reachable_set_of_isolated_vertex_is_empty(ten_nodes: Graph) {
    let reachable = ten_nodes.reachable_set(v(4)).expect("vertex 4 is present");
    assert!(reachable.is_empty());
    assert!(ten_nodes.reachable_set(v(77)).is_none());
}

#[rstest]
fn adjacency_queries_are_symmetric(ten_nodes: Graph) {
    assert_eq!(ten_nodes.find_edge(v(6), v(3)), ten_nodes.find_edge(v(3), v(6)));
    assert!(ten_nodes.is_neighbor(v(7), v(2)));
    assert!(!ten_nodes.is_neighbor(v(0), v(2)));
    assert_eq!(ten_nodes.find_edge_set(v(0), v(1)), Some(vec![Edge::new(0, 1)]));
    assert_eq!(ten_nodes.find_edge_set(v(0), v(2)), None);
    assert_eq!(ten_nodes.opposite(v(9), e(5)), Some(v(0)));
    assert_eq!(ten_nodes.opposite(v(3), e(5)), None);
    assert!(ten_nodes.is_incident(v(0), e(5)));
    assert!(!ten_nodes.is_incident(v(1), e(5)));

    let mut incident: Vec<EdgeId> = ten_nodes
        .incident_edges(v(1))
        .expect("vertex 1 is present")
        .map(Edge::id)
        .collect();
    incident.sort_unstable();
    assert_eq!(incident, vec![e(0), e(1), e(7)]);
}

#[rstest]
#[case::self_loop(Edge::new(20, 1), 2, 2)]
#[case::parallel(Edge::new(21, 1), 1, 0)]
#[case::duplicate_id(Edge::new(3, 5), 4, 5)]
fn invalid_edges_are_rejected(
    mut ten_nodes: Graph,
    #[case] edge: Edge,
    #[case] a: u32,
    #[case] b: u32,
) {
    assert!(!ten_nodes.add_edge(edge, v(a), v(b)));
    assert_eq!(ten_nodes.edge_count(), 8);
    assert_eq!(ten_nodes.vertex_count(), 10);
}

#[test]
fn add_edge_creates_missing_endpoints() {
    let mut graph = Graph::new();
    assert!(graph.add_edge(Edge::new(0, 3), v(10), v(20)));
    assert!(graph.contains_vertex(v(10)));
    assert!(graph.contains_vertex(v(20)));
    assert!(graph.contains_edge(e(0)));
    assert_eq!(graph.edge(e(0)), Some(Edge::new(0, 3)));
}

#[test]
fn add_edge_from_pair_requires_two_vertices() {
    let mut graph = Graph::new();
    assert!(!graph.add_edge_from_pair(Edge::new(0, 1), &[v(1)]));
    assert!(!graph.add_edge_from_pair(Edge::new(0, 1), &[v(1), v(2), v(3)]));
    assert!(graph.add_edge_from_pair(Edge::new(0, 1), &[v(1), v(2)]));
    assert!(graph.is_neighbor(v(2), v(1)));
}

#[rstest]
fn remove_edge_clears_both_endpoints(mut ten_nodes: Graph) {
    assert!(ten_nodes.remove_edge(e(6)));
    assert!(!ten_nodes.contains_edge(e(6)));
    assert_eq!(ten_nodes.find_edge(v(2), v(7)), None);
    assert_eq!(ten_nodes.find_edge(v(7), v(2)), None);
    assert_eq!(ten_nodes.edge_count(), 7);
    assert!(!ten_nodes.remove_edge(e(6)));
}

#[rstest]
fn remove_vertex_strips_it_from_every_neighbour(mut ten_nodes: Graph) {
    assert!(ten_nodes.remove_vertex(v(1)));
    assert!(!ten_nodes.contains_vertex(v(1)));
    for vertex in ten_nodes.vertices() {
        let neighbours: Vec<Vertex> = ten_nodes
            .neighbors(vertex)
            .expect("listed vertices are present")
            .collect();
        assert!(!neighbours.contains(&v(1)), "{vertex} still lists 1");
    }
    assert_eq!(ten_nodes.edge_count(), 5);
    assert!(!ten_nodes.contains_edge(e(7)));
    assert!(!ten_nodes.remove_vertex(v(1)));
}

#[test]
fn vertex_capacity_is_enforced() {
    let mut graph = Graph::new();
    for id in 0..u32::try_from(MAX_VERTICES).expect("capacity fits u32") {
        assert!(graph.add_vertex(v(id)));
    }
    assert!(!graph.add_vertex(v(1_000)));
    assert!(!graph.add_vertex(v(0)));
    assert!(!graph.add_edge(Edge::new(0, 1), v(0), v(1)));
    assert_eq!(graph.vertex_count(), MAX_VERTICES);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn edge_that_would_overflow_capacity_is_rejected() {
    let mut graph = Graph::new();
    for id in 0..u32::try_from(MAX_VERTICES - 1).expect("capacity fits u32") {
        assert!(graph.add_vertex(v(id)));
    }
    assert!(!graph.add_edge(Edge::new(0, 1), v(500), v(501)));
    assert!(graph.add_edge(Edge::new(0, 1), v(0), v(500)));
    assert_eq!(graph.vertex_count(), MAX_VERTICES);
}

/// Complete graph on `n` vertices with edge ids assigned in ascending order.
fn complete_graph(n: u32) -> Graph {
    let mut graph = Graph::new();
    let mut next = 0;
    for a in 0..n {
        for b in (a + 1)..n {
            assert!(graph.add_edge(Edge::new(next, i64::from(next % 97)), v(a), v(b)));
            next += 1;
        }
    }
    graph
}

#[test]
fn cloning_a_dense_graph_preserves_every_edge() {
    let graph = complete_graph(150);
    let copy = graph.clone();
    drop(graph);
    assert_eq!(copy.vertex_count(), 150);
    assert_eq!(copy.edge_count(), 11_175);
    assert_eq!(copy.endpoints(e(11_174)), Some((v(148), v(149))));
    assert_eq!(copy.degree(v(0)), Some(149));
}

#[test]
fn soft_failures_log_their_reason() {
    let (accepted, layer) = RecordingLayer::capture(|| {
        let mut graph = graph_from_rows(&[(0, 1, 2, 4)]);
        graph.add_edge(Edge::new(1, 1), v(3), v(3))
    });
    assert!(!accepted);
    let events = layer.events_with_message("edge rejected");
    assert_eq!(events.len(), 1);
    assert_eq!(events.first().and_then(|event| event.field("reason")), Some("self_loop"));
}

#[rstest]
fn directed_view_answers_with_undirected_semantics(mut ten_nodes: Graph) {
    assert_eq!(ten_nodes.source(e(0)), None);
    assert_eq!(ten_nodes.dest(e(0)), None);
    assert!(!ten_nodes.is_source(v(0), e(0)));
    assert!(!ten_nodes.is_dest(v(1), e(0)));
    assert_eq!(ten_nodes.in_degree(v(1)), Some(3));
    assert_eq!(ten_nodes.out_degree(v(1)), Some(3));
    assert_eq!(ten_nodes.predecessor_count(v(0)), Some(2));
    assert_eq!(ten_nodes.successor_count(v(0)), Some(2));
    assert_eq!(ten_nodes.in_edges(v(0)), ten_nodes.out_edges(v(0)));
    assert_eq!(ten_nodes.predecessors(v(3)), Some(vec![v(6)]));
    assert_eq!(ten_nodes.successors(v(3)), Some(vec![v(6)]));
    assert!(ten_nodes.is_predecessor(v(3), v(6)));
    assert!(ten_nodes.is_successor(v(6), v(3)));
    assert_eq!(ten_nodes.edge_type(e(0)), EdgeType::Undirected);
    assert_eq!(ten_nodes.default_edge_type(), EdgeType::Undirected);
    assert_eq!(ten_nodes.incident_count(e(0)), 2);
    assert_eq!(
        ten_nodes.edges_of_type(EdgeType::Undirected).map(|edges| edges.len()),
        Some(8)
    );
    assert_eq!(ten_nodes.edges_of_type(EdgeType::Directed), None);
    assert_eq!(ten_nodes.edge_count_of_type(EdgeType::Directed), 0);
    assert_eq!(ten_nodes.edge_count_of_type(EdgeType::Undirected), 8);

    assert_eq!(
        ten_nodes.add_edge_of_type(Edge::new(30, 1), v(4), v(5), EdgeType::Directed),
        Err(GraphError::DirectedEdge)
    );
    assert_eq!(
        ten_nodes.add_edge_of_type(Edge::new(30, 1), v(4), v(5), EdgeType::Undirected),
        Ok(true)
    );
}

fn arbitrary_rows() -> impl Strategy<Value = Vec<(u32, u32, i64)>> {
    proptest::collection::vec((0u32..24, 0u32..24, -50i64..50), 0..80)
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn adjacency_stays_symmetric_under_mutation(
        rows in arbitrary_rows(),
        doomed in proptest::collection::vec(0u32..24, 0..6),
    ) {
        let mut graph = Graph::new();
        for (id, (a, b, weight)) in (0u32..).zip(rows) {
            graph.add_edge(Edge::new(id, weight), v(a), v(b));
        }
        for vertex in doomed {
            graph.remove_vertex(v(vertex));
        }

        let mut seen = 0_usize;
        for vertex in graph.vertices() {
            for edge in graph.incident_edges(vertex).expect("listed vertices are present") {
                let other = graph.opposite(vertex, edge.id());
                prop_assert!(other.is_some(), "{} has no opposite of {}", edge, vertex);
                let other = other.unwrap_or(vertex);
                prop_assert_ne!(other, vertex);
                prop_assert_eq!(graph.find_edge(other, vertex), Some(edge));
                seen += 1;
            }
        }
        prop_assert_eq!(seen, graph.edge_count() * 2);
    }

    #[test]
    fn reachable_set_matches_component_size(
        rows in arbitrary_rows(),
        start in 0u32..24,
    ) {
        let mut graph = Graph::new();
        for (id, (a, b, weight)) in (0u32..).zip(rows) {
            graph.add_edge(Edge::new(id, weight), v(a), v(b));
        }
        graph.add_vertex(v(start));

        let reachable = graph.reachable_set(v(start)).expect("start was added");
        prop_assert!(!reachable.contains(&v(start)));
        for member in &reachable {
            let back = graph.reachable_set(*member).expect("members are present");
            prop_assert!(back.contains(&v(start)));
            prop_assert_eq!(back.len(), reachable.len());
        }
    }
}
