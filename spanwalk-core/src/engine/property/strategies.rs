//! Graph generators for the Kruskal property suite.
//!
//! Each [`GraphShape`] stresses a different part of the engine: distinct
//! weights exercise plain ordering, heavy ties exercise the id tie-break,
//! sparse and dense shapes vary how often the cycle check fires, and
//! disconnected graphs leave isolated vertices to be warned about.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use test_strategy::Arbitrary;

use crate::{Edge, Graph, Vertex};

/// Topology and weight pattern of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Every edge carries a distinct weight.
    #[weight(2)]
    Unique,
    /// Weights drawn from a tiny range so most edges tie.
    #[weight(3)]
    ManyTied,
    /// A random spanning path plus a handful of extra edges.
    #[weight(2)]
    Sparse,
    /// Most vertex pairs are connected.
    #[weight(1)]
    Dense,
    /// Vertices split into groups with no edges between groups, plus
    /// vertices with no edges at all.
    #[weight(2)]
    Disconnected,
}

/// A generated graph description. Row `i` becomes edge id `i`.
#[derive(Clone, Debug)]
pub(super) struct KruskalFixture {
    pub vertex_count: u32,
    pub rows: Vec<(u32, u32, i64)>,
    pub shape: GraphShape,
}

impl KruskalFixture {
    /// Materialises the fixture as a [`Graph`] holding every vertex.
    pub(super) fn graph(&self) -> Graph {
        let mut graph = Graph::new();
        for id in 0..self.vertex_count {
            assert!(graph.add_vertex(Vertex::new(id)));
        }
        for (id, &(u, v, weight)) in (0_u32..).zip(&self.rows) {
            assert!(
                graph.add_edge(Edge::new(id, weight), Vertex::new(u), Vertex::new(v)),
                "generated rows are simple",
            );
        }
        graph
    }
}

pub(super) fn kruskal_fixture_strategy() -> impl Strategy<Value = KruskalFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> KruskalFixture {
    match shape {
        GraphShape::Unique => {
            let vertex_count = rng.gen_range(2..=24);
            let mut rows = random_pairs(rng, 0..vertex_count, 0.3);
            let mut weights: Vec<i64> = (0_i64..).take(rows.len()).collect();
            weights.shuffle(rng);
            for (row, weight) in rows.iter_mut().zip(weights) {
                row.2 = weight;
            }
            KruskalFixture { vertex_count, rows, shape }
        }
        GraphShape::ManyTied => {
            let vertex_count = rng.gen_range(2..=24);
            let mut rows = random_pairs(rng, 0..vertex_count, 0.4);
            for row in &mut rows {
                row.2 = rng.gen_range(0..=2);
            }
            KruskalFixture { vertex_count, rows, shape }
        }
        GraphShape::Sparse => generate_sparse(rng),
        GraphShape::Dense => {
            let vertex_count = rng.gen_range(4..=14);
            let rows = random_pairs(rng, 0..vertex_count, 0.85);
            KruskalFixture { vertex_count, rows, shape }
        }
        GraphShape::Disconnected => {
            let group_size = rng.gen_range(2..=6);
            let groups = rng.gen_range(2..=4);
            let isolated = rng.gen_range(0..=3);
            let mut rows = Vec::new();
            for group in 0..groups {
                let start = group * group_size;
                rows.extend(random_pairs(rng, start..start + group_size, 0.6));
            }
            KruskalFixture {
                vertex_count: groups * group_size + isolated,
                rows,
                shape,
            }
        }
    }
}

fn generate_sparse(rng: &mut SmallRng) -> KruskalFixture {
    let vertex_count: u32 = rng.gen_range(2..=32);
    let mut order: Vec<u32> = (0..vertex_count).collect();
    order.shuffle(rng);
    let mut rows: Vec<(u32, u32, i64)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(-20..=80)))
        .collect();
    for _ in 0..vertex_count / 2 {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        let taken = rows
            .iter()
            .any(|&(a, b, _)| (a, b) == (u, v) || (a, b) == (v, u));
        if u != v && !taken {
            rows.push((u, v, rng.gen_range(-20..=80)));
        }
    }
    KruskalFixture {
        vertex_count,
        rows,
        shape: GraphShape::Sparse,
    }
}

/// Each unordered pair within `range` becomes a row with probability
/// `density`. Weights are drawn from `0..100`.
fn random_pairs(
    rng: &mut SmallRng,
    range: std::ops::Range<u32>,
    density: f64,
) -> Vec<(u32, u32, i64)> {
    let mut rows = Vec::new();
    for u in range.clone() {
        for v in u + 1..range.end {
            if rng.gen_bool(density) {
                rows.push((u, v, rng.gen_range(0..100)));
            }
        }
    }
    rows.shuffle(rng);
    rows
}
