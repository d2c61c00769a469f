//! Step-wise algorithm lifecycle and its Kruskal implementation.
//!
//! A [`StepEngine`] runs one unit of work per call so a driver can observe
//! the engine's [`Markings`] between steps. Engines move through
//! [`EngineState`] as follows:
//!
//! ```text
//! Uninitialized --reset--> Ready --start--> Running --finish--> Done
//! ```
//!
//! `reset` is accepted from any state and discards the previous run.

mod kruskal;
mod markings;

use std::fmt;

use crate::{
    error::EngineError,
    graph::{EdgeType, Graph},
};

pub use self::{
    kruskal::{Decision, KruskalEngine, StepOutcome},
    markings::{Marking, Markings},
};

/// Lifecycle position of a [`StepEngine`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EngineState {
    /// No graph bound yet.
    #[default]
    Uninitialized,
    /// Bound to a graph and waiting for `start`.
    Ready,
    /// Started; steps may remain.
    Running,
    /// Terminal markings applied; no work remains.
    Done,
}

impl EngineState {
    /// Stable lowercase name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An algorithm exposed as discrete, externally driven units of work.
///
/// The engine borrows the graph it runs on for `'g`, so the graph cannot
/// change while a run is in progress.
pub trait StepEngine<'g> {
    /// Edge orientation the algorithm expects of its input graph.
    fn edge_type(&self) -> EdgeType;

    /// Binds the engine to `graph`, discarding any previous run.
    fn reset(&mut self, graph: &'g Graph);

    /// Returns `true` once `start` has succeeded for the current binding.
    fn is_started(&self) -> bool;

    /// Performs algorithm-specific initialisation.
    ///
    /// # Errors
    /// Returns [`EngineError::NotBound`] before `reset`, or
    /// [`EngineError::InvalidState`] when already started.
    fn start(&mut self) -> Result<(), EngineError>;

    /// Returns `true` while work remains.
    fn setup_next_step(&self) -> bool;

    /// Executes exactly one unit of work, finishing the run when none remains.
    ///
    /// # Errors
    /// Returns [`EngineError::NotBound`] before `reset`, or
    /// [`EngineError::InvalidState`] unless the engine is running.
    fn do_next_step(&mut self) -> Result<(), EngineError>;

    /// Applies terminal markings and moves to [`EngineState::Done`].
    ///
    /// Calling `finish` again once done has no effect.
    ///
    /// # Errors
    /// Returns [`EngineError::NotBound`] before `reset`, or
    /// [`EngineError::InvalidState`] before `start`.
    fn finish(&mut self) -> Result<(), EngineError>;

    /// Hook for a host to clear per-step presentation state.
    fn clean_up_last_step(&mut self) {}

    /// Advances the engine by one driver tick.
    ///
    /// The first tick starts the engine. Later ticks perform one step while
    /// work remains; once none remains the engine is finished and `false` is
    /// returned.
    ///
    /// # Errors
    /// Propagates lifecycle errors from `start`, `do_next_step` and `finish`.
    fn step(&mut self) -> Result<bool, EngineError> {
        if !self.is_started() {
            self.start()?;
            return Ok(true);
        }
        self.clean_up_last_step();
        if !self.setup_next_step() {
            self.finish()?;
            return Ok(false);
        }
        self.do_next_step()?;
        Ok(true)
    }
}

#[cfg(test)]
mod property;
