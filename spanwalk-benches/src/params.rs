//! Labels for parameterised benchmark runs.

use std::fmt;

/// Shape of the graph fed to a Kruskal benchmark.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},e={}", self.vertex_count, self.edge_count)
    }
}

/// Size of a tree benchmark run and the order its keys arrive in.
#[derive(Clone, Debug)]
pub struct TreeBenchParams {
    /// Number of keys inserted.
    pub key_count: usize,
    /// `true` when keys arrive in ascending order, producing a degenerate tree.
    pub sorted: bool,
}

impl fmt::Display for TreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = if self.sorted { "sorted" } else { "shuffled" };
        write!(f, "n={},{order}", self.key_count)
    }
}
