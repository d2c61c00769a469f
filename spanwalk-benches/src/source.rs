//! Seeded synthetic graphs for benchmarking.
//!
//! [`generate_graph`] declares every vertex up front and then draws random
//! vertex pairs until the requested number of distinct edges exists, so the
//! same configuration always yields the same graph.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use spanwalk_core::{Edge, Graph, MAX_VERTICES, Vertex};

/// Largest weight assigned to a synthetic edge.
pub const MAX_WEIGHT: i64 = 1_000;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested vertex count exceeds graph capacity.
    #[error("vertex count {requested} exceeds the capacity of {MAX_VERTICES}")]
    TooManyVertices {
        /// Requested vertex count.
        requested: usize,
    },
    /// More edges were requested than a simple graph can hold.
    #[error("{requested} edges requested but {vertices} vertices allow at most {max}")]
    TooManyEdges {
        /// Requested edge count.
        requested: usize,
        /// Vertex count of the configuration.
        vertices: usize,
        /// Edges in the complete graph on `vertices`.
        max: usize,
    },
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, at most [`MAX_VERTICES`].
    pub vertex_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Builds a random simple graph from `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when the vertex count is zero or above
/// capacity, or when more edges are requested than the vertices allow.
///
/// # Examples
/// ```
/// use spanwalk_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let config = SyntheticGraphConfig { vertex_count: 10, edge_count: 20, seed: 7 };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!((graph.vertex_count(), graph.edge_count()), (10, 20));
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    let vertices = config.vertex_count;
    if vertices == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    let upper = u32::try_from(vertices)
        .ok()
        .filter(|_| vertices <= MAX_VERTICES)
        .ok_or(SyntheticError::TooManyVertices {
            requested: vertices,
        })?;
    // n choose 2
    let max = (0..vertices).sum::<usize>();
    if config.edge_count > max {
        return Err(SyntheticError::TooManyEdges {
            requested: config.edge_count,
            vertices,
            max,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new();
    for id in 0..upper {
        graph.add_vertex(Vertex::new(id));
    }
    let mut next_id = 0_u32;
    while graph.edge_count() < config.edge_count {
        let u = Vertex::new(rng.gen_range(0..upper));
        let v = Vertex::new(rng.gen_range(0..upper));
        let edge = Edge::new(next_id, rng.gen_range(1..=MAX_WEIGHT));
        if graph.add_edge(edge, u, v) {
            next_id = next_id.saturating_add(1);
        }
    }
    Ok(graph)
}

/// Returns `0..count` as `u32` keys, shuffled unless `sorted` is set.
#[must_use]
pub fn tree_keys(count: u32, sorted: bool, seed: u64) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..count).collect();
    if !sorted {
        keys.shuffle(&mut SmallRng::seed_from_u64(seed));
    }
    keys
}
