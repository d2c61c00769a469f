//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` so the bench entry
//! points have a single place that reports them.

use spanwalk_core::{EngineError, TreeError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Populating an ordered tree failed.
    #[error("ordered tree operation failed: {0}")]
    Tree(#[from] TreeError),
    /// Driving the Kruskal engine failed.
    #[error("engine run failed: {0}")]
    Engine(#[from] EngineError),
}
