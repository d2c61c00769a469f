//! Command definitions and the `run` pipeline.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use spanwalk_core::{
    Edge, EngineError, Graph, KruskalEngine, MAX_VERTICES, Marking, StepEngine, StepOutcome,
    Vertex,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::graph_file::read_graph;

/// Enough ticks to drain a complete graph at full capacity.
const DEFAULT_MAX_STEPS: usize = MAX_VERTICES * MAX_VERTICES;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwalk",
    about = "Step Kruskal's algorithm over a graph description file."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the minimum spanning forest of a graph file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph description file (`vertex <id>` / `edge <id> <u> <v> <weight>`).
    pub path: PathBuf,

    /// Print every edge decision in the order it was made.
    #[arg(long)]
    pub trace: bool,

    /// Upper bound on driver ticks that report remaining work.
    #[arg(
        long = "max-steps",
        default_value_t = DEFAULT_MAX_STEPS,
        value_parser = clap::value_parser!(usize),
    )]
    pub max_steps: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the graph file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line of the graph file could not be parsed.
    #[error("{path}:{line}: {message}")]
    Parse {
        /// Graph file being read.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Description of the malformed token.
        message: String,
    },
    /// The graph refused a well-formed directive.
    #[error("{path}:{line}: graph rejected directive ({reason})")]
    Rejected {
        /// Graph file being read.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Why the graph refused it.
        reason: &'static str,
    },
    /// The step engine reported a lifecycle or internal failure.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The engine still had work after `limit` ticks.
    #[error("engine did not finish within {limit} steps")]
    StepLimit {
        /// Configured `--max-steps` value.
        limit: usize,
    },
}

/// An edge of the spanning forest together with its endpoints.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AcceptedEdge {
    /// Accepted edge.
    pub edge: Edge,
    /// Lower endpoint.
    pub low: Vertex,
    /// Higher endpoint.
    pub high: Vertex,
}

/// Outcome of a completed `run`.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Name derived from the graph file.
    pub graph_name: String,
    /// Vertices in the input graph.
    pub vertex_count: usize,
    /// Edges in the input graph.
    pub edge_count: usize,
    /// Driver ticks that reported remaining work.
    pub steps: usize,
    /// Per-edge decisions; empty unless `--trace` was given.
    pub trace: Vec<StepOutcome>,
    /// Spanning forest edges in `(weight, id)` order.
    pub accepted: Vec<AcceptedEdge>,
    /// Combined weight of the accepted edges.
    pub total_weight: i64,
    /// Vertices that no accepted edge touches.
    pub warned: Vec<Vertex>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph file cannot be loaded or the engine
/// fails to finish.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwalk_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "edge 0 0 1 4\nedge 1 1 2 3\nedge 2 0 2 5\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         trace: false,
///         max_steps: 100,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.total_weight, 7);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<RunSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, trace = command.trace, max_steps = command.max_steps),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let RunCommand {
        path,
        trace,
        max_steps,
    } = command;
    Span::current().record("path", field::display(path.display()));

    let graph = load_graph(&path)?;
    let mut engine = KruskalEngine::new();
    engine.reset(&graph);
    let (steps, outcomes) = drive(&mut engine, max_steps, trace)?;

    let summary = RunSummary {
        graph_name: derive_graph_name(&path),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        steps,
        trace: outcomes,
        accepted: accepted_edges(engine.result()),
        total_weight: engine.total_weight(),
        warned: engine.markings().vertices_marked(Marking::Warning),
    };
    info!(
        graph = summary.graph_name.as_str(),
        accepted = summary.accepted.len(),
        total_weight = summary.total_weight,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.load_graph", err, fields(path = field::Empty))]
pub(super) fn load_graph(path: &Path) -> Result<Graph, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_graph(BufReader::new(file), path)
}

/// Ticks `engine` until it reports completion, recording decisions when
/// `record` is set. Returns the number of ticks that reported work.
pub(super) fn drive(
    engine: &mut KruskalEngine<'_>,
    limit: usize,
    record: bool,
) -> Result<(usize, Vec<StepOutcome>), CliError> {
    let mut trace = Vec::new();
    let mut ticks = 0_usize;
    loop {
        let previous = engine.last_outcome();
        if !engine.step()? {
            return Ok((ticks, trace));
        }
        ticks += 1;
        let latest = engine.last_outcome();
        if record && latest != previous {
            trace.extend(latest);
        }
        if ticks > limit {
            return Err(CliError::StepLimit { limit });
        }
    }
}

fn accepted_edges(forest: &Graph) -> Vec<AcceptedEdge> {
    let mut accepted: Vec<AcceptedEdge> = forest
        .edges()
        .filter_map(|edge| {
            let (low, high) = forest.endpoints(edge.id())?;
            Some(AcceptedEdge { edge, low, high })
        })
        .collect();
    accepted.sort_unstable_by_key(|entry| entry.edge);
    accepted
}

pub(super) fn derive_graph_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a line-oriented text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwalk_cli::cli::{AcceptedEdge, RunSummary, render_summary};
/// # use spanwalk_core::{Edge, Vertex};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = RunSummary {
///     graph_name: "demo".into(),
///     vertex_count: 3,
///     edge_count: 1,
///     steps: 2,
///     trace: Vec::new(),
///     accepted: vec![AcceptedEdge {
///         edge: Edge::new(0, 4),
///         low: Vertex::new(0),
///         high: Vertex::new(1),
///     }],
///     total_weight: 4,
///     warned: vec![Vertex::new(2)],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("e0\t0-1\t4\n"));
/// assert!(text.ends_with("warnings: 2\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &RunSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.graph_name)?;
    writeln!(
        writer,
        "vertices: {}, edges: {}, steps: {}",
        summary.vertex_count, summary.edge_count, summary.steps
    )?;
    for (index, outcome) in summary.trace.iter().enumerate() {
        let edge = outcome.edge();
        writeln!(
            writer,
            "step {}: {} weight {} {}",
            index + 1,
            edge.id(),
            edge.weight(),
            outcome.decision()
        )?;
    }
    writeln!(writer, "accepted: {}", summary.accepted.len())?;
    for accepted in &summary.accepted {
        writeln!(
            writer,
            "{}\t{}-{}\t{}",
            accepted.edge.id(),
            accepted.low,
            accepted.high,
            accepted.edge.weight()
        )?;
    }
    writeln!(writer, "total weight: {}", summary.total_weight)?;
    if summary.warned.is_empty() {
        writeln!(writer, "warnings: none")
    } else {
        let ids: Vec<String> = summary.warned.iter().map(ToString::to_string).collect();
        writeln!(writer, "warnings: {}", ids.join(" "))
    }
}
