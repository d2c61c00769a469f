//! Benchmark support crate for spanwalk.
//!
//! Provides seeded synthetic graphs and parameter labels for the Criterion
//! benchmarks covering ordered-tree operations and full Kruskal drains.

pub mod error;
pub mod params;
pub mod source;
