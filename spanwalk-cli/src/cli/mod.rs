//! Command-line orchestration for spanwalk.
//!
//! The `run` command loads a graph description file, steps the Kruskal
//! engine to completion and summarises the resulting spanning forest.

mod commands;
mod graph_file;

pub use commands::{
    AcceptedEdge, Cli, CliError, Command, RunCommand, RunSummary, render_summary, run_cli,
};
pub use graph_file::{Directive, parse_directive};

#[cfg(test)]
mod test_helpers;
