//! Support library for the `spanwalk` binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive a run
//! without spawning a subprocess.

pub mod cli;
pub mod logging;
