//! Line-oriented graph description format.
//!
//! ```text
//! # comment
//! vertex <id>
//! edge <id> <u> <v> <weight>
//! ```
//!
//! Blank lines and anything after `#` are ignored. Edge endpoints that were
//! not declared with `vertex` are added implicitly.

use std::io::BufRead;
use std::path::Path;

use spanwalk_core::{Edge, Graph, Vertex};

use super::CliError;

/// One parsed, non-empty line of a graph file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Directive {
    /// `vertex <id>`
    Vertex(Vertex),
    /// `edge <id> <u> <v> <weight>`
    Edge {
        /// Edge identity and weight.
        edge: Edge,
        /// First endpoint.
        u: Vertex,
        /// Second endpoint.
        v: Vertex,
    },
}

/// Parses a single line, returning `None` for blank and comment-only lines.
///
/// # Errors
/// Returns a human-readable message describing the first malformed token.
///
/// # Examples
/// ```
/// use spanwalk_cli::cli::{Directive, parse_directive};
/// use spanwalk_core::{Edge, Vertex};
///
/// assert_eq!(parse_directive("  # nothing here"), Ok(None));
/// assert_eq!(
///     parse_directive("edge 3 0 1 -4"),
///     Ok(Some(Directive::Edge {
///         edge: Edge::new(3, -4),
///         u: Vertex::new(0),
///         v: Vertex::new(1),
///     })),
/// );
/// ```
pub fn parse_directive(line: &str) -> Result<Option<Directive>, String> {
    let content = line.split_once('#').map_or(line, |(before, _)| before);
    let mut tokens = content.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let directive = match keyword {
        "vertex" => Directive::Vertex(Vertex::new(field(&mut tokens, "vertex id")?)),
        "edge" => {
            let id = field(&mut tokens, "edge id")?;
            let u = Vertex::new(field(&mut tokens, "first endpoint")?);
            let v = Vertex::new(field(&mut tokens, "second endpoint")?);
            let weight = field(&mut tokens, "weight")?;
            Directive::Edge {
                edge: Edge::new(id, weight),
                u,
                v,
            }
        }
        other => return Err(format!("unknown directive `{other}`")),
    };

    match tokens.next() {
        Some(extra) => Err(format!("unexpected trailing token `{extra}`")),
        None => Ok(Some(directive)),
    }
}

fn field<'a, T>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = tokens.next().ok_or_else(|| format!("missing {what}"))?;
    raw.parse()
        .map_err(|err| format!("invalid {what} `{raw}`: {err}"))
}

/// Builds a graph from `reader`, naming `path` in any error.
pub(super) fn read_graph(reader: impl BufRead, path: &Path) -> Result<Graph, CliError> {
    let mut graph = Graph::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directive = parse_directive(&line).map_err(|message| CliError::Parse {
            path: path.to_path_buf(),
            line: line_number,
            message,
        })?;
        let Some(directive) = directive else {
            continue;
        };
        if !apply(&mut graph, directive) {
            return Err(CliError::Rejected {
                path: path.to_path_buf(),
                line: line_number,
                reason: rejection_reason(&graph, directive),
            });
        }
    }
    Ok(graph)
}

fn apply(graph: &mut Graph, directive: Directive) -> bool {
    match directive {
        Directive::Vertex(vertex) => graph.add_vertex(vertex),
        Directive::Edge { edge, u, v } => graph.add_edge(edge, u, v),
    }
}

/// Explains why `graph` refused `directive`; the graph itself only logs it.
fn rejection_reason(graph: &Graph, directive: Directive) -> &'static str {
    match directive {
        Directive::Vertex(vertex) if graph.contains_vertex(vertex) => "duplicate vertex",
        Directive::Edge { edge, .. } if graph.contains_edge(edge.id()) => "duplicate edge id",
        Directive::Edge { u, v, .. } if u == v => "self-loop",
        Directive::Edge { u, v, .. } if graph.is_neighbor(u, v) => "parallel edge",
        Directive::Vertex(_) | Directive::Edge { .. } => "vertex capacity reached",
    }
}
