//! Shared test utilities for `spanwalk-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanwalk_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Edge, Graph, Vertex};

/// Proptest configuration honouring the workspace `PROPTEST_CASES` and
/// `SPANWALK_PBT_FORK` overrides.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `(edge id, u, v, weight)` rows, asserting every edge
/// is accepted.
pub(crate) fn graph_from_rows(rows: &[(u32, u32, u32, i64)]) -> Graph {
    let mut graph = Graph::new();
    for &(id, u, v, weight) in rows {
        assert!(
            graph.add_edge(Edge::new(id, weight), Vertex::new(u), Vertex::new(v)),
            "row {id} must be accepted",
        );
    }
    graph
}
