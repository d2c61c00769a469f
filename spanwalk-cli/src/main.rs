//! `spanwalk` binary.
//!
//! Reads a graph description file, steps the Kruskal engine over it until the
//! spanning forest is complete and prints the forest summary on stdout.
//! Failures are logged once through `tracing`, tagged with the engine's error
//! code when the engine was the cause, and turn into a non-zero exit status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use spanwalk_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use spanwalk_core::{EngineErrorCode, TreeErrorCode};
use tracing::{error, field};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match walk_graph_file() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (code, tree_code) = engine_codes(&err);
            error!(
                error = %err,
                code = code.map(|code| field::display(code.as_str())),
                tree_code = tree_code.map(|code| field::display(code.as_str())),
                "graph walk failed"
            );
            ExitCode::FAILURE
        }
    }
}

/// Load the graph named on the command line, drain the engine and write the
/// summary to a buffered stdout.
fn walk_graph_file() -> Result<()> {
    let summary = run_cli(Cli::parse()).context("failed to build the spanning forest")?;
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut out).context("failed to write the forest summary")?;
    out.flush().context("failed to flush stdout")
}

/// Stable codes for failures raised by the step engine; `None` otherwise.
fn engine_codes(err: &anyhow::Error) -> (Option<EngineErrorCode>, Option<TreeErrorCode>) {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Engine(engine)) => (Some(engine.code()), engine.tree_code()),
        _ => (None, None),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not installed yet, so stderr is the only channel"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("spanwalk: could not set up logging: {err}");
}
