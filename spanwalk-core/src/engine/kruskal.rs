//! Kruskal's minimum spanning forest, one edge decision per step.
//!
//! Unprocessed edges wait in an [`OrderedTree`] ordered by `(weight, id)`,
//! each carrying its endpoints. Each step pops the minimum and runs a
//! depth-first search from one endpoint across the result forest, which holds
//! exactly the edges marked [`Marking::Selected`]. Reaching the other endpoint
//! means the edge would close a cycle, so it is rejected; otherwise it joins
//! the forest.

use std::fmt;

use tracing::{Span, debug, info, instrument};

use crate::{
    error::EngineError,
    graph::{Edge, EdgeType, Graph, Vertex},
    tree::OrderedTree,
};

use super::{EngineState, Marking, Markings, StepEngine};

/// Queue entry; orders by the edge's `(weight, id)` first.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct Candidate {
    edge: Edge,
    low: Vertex,
    high: Vertex,
}

/// What a single step did with the edge it examined.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Decision {
    /// The edge joined the spanning forest.
    Accepted,
    /// The edge would have closed a cycle.
    Rejected,
    /// An endpoint was missing from the graph; nothing changed.
    Skipped,
}

impl Decision {
    /// Stable lowercase name used in logs and rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The edge examined by the most recent step and the decision reached.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepOutcome {
    edge: Edge,
    decision: Decision,
}

impl StepOutcome {
    /// Examined edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> Edge { self.edge }

    /// Decision reached for the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn decision(&self) -> Decision { self.decision }
}

/// Step-wise Kruskal engine over a borrowed [`Graph`].
///
/// # Examples
/// ```
/// use spanwalk_core::{Edge, Graph, KruskalEngine, Marking, StepEngine, Vertex};
///
/// let (a, b, c) = (Vertex::new(0), Vertex::new(1), Vertex::new(2));
/// let mut graph = Graph::new();
/// graph.add_edge(Edge::new(0, 1), a, b);
/// graph.add_edge(Edge::new(1, 2), b, c);
/// graph.add_edge(Edge::new(2, 3), a, c);
///
/// let mut engine = KruskalEngine::new();
/// engine.reset(&graph);
/// while engine.step()? {}
///
/// assert_eq!(engine.total_weight(), 3);
/// assert_eq!(engine.markings().edge(Edge::new(2, 3).id()), Marking::Inactive);
/// # Ok::<(), spanwalk_core::EngineError>(())
/// ```
#[derive(Debug, Default)]
pub struct KruskalEngine<'g> {
    graph: Option<&'g Graph>,
    queue: OrderedTree<Candidate>,
    result: Graph,
    markings: Markings,
    state: EngineState,
    last_outcome: Option<StepOutcome>,
}

impl<'g> KruskalEngine<'g> {
    /// Creates an engine not yet bound to a graph.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            graph: None,
            queue: OrderedTree::new(),
            result: Graph::new(),
            markings: Markings::new(),
            state: EngineState::Uninitialized,
            last_outcome: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    #[rustfmt::skip]
    pub const fn state(&self) -> EngineState { self.state }

    /// Markings written so far in the current run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn markings(&self) -> &Markings { &self.markings }

    /// Spanning forest accumulated so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn result(&self) -> &Graph { &self.result }

    /// Outcome of the most recent step, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn last_outcome(&self) -> Option<StepOutcome> { self.last_outcome }

    /// Number of edges still waiting to be examined.
    #[must_use]
    pub fn pending_edges(&self) -> usize {
        self.queue.len()
    }

    /// Edge that the next step will examine.
    #[must_use]
    pub fn next_edge(&self) -> Option<Edge> {
        self.queue.find_min().map(|candidate| candidate.edge)
    }

    /// Combined weight of the edges accepted so far.
    #[must_use]
    pub fn total_weight(&self) -> i64 {
        self.result
            .edges()
            .fold(0_i64, |total, edge| total.saturating_add(edge.weight()))
    }

    fn bound(&self) -> Result<&'g Graph, EngineError> {
        self.graph.ok_or(EngineError::NotBound)
    }

    fn expect_state(&self, expected: EngineState, operation: &'static str) -> Result<(), EngineError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn highlight_next(&mut self) {
        if let Some(next) = self.queue.find_min() {
            self.markings.mark_edge(next.edge.id(), Marking::Highlighted);
        }
    }

    fn decide(&mut self, graph: &Graph, candidate: Candidate) -> Decision {
        let Candidate {
            edge,
            low: u,
            high: v,
        } = candidate;
        if !graph.contains_vertex(u) || !graph.contains_vertex(v) {
            return Decision::Skipped;
        }
        if self.closes_cycle(u, v) {
            self.markings.mark_edge(edge.id(), Marking::Inactive);
            return Decision::Rejected;
        }
        let committed = self.result.add_edge(edge, u, v);
        debug_assert!(committed, "accepted edges never repeat or loop");
        self.markings.mark_edge(edge.id(), Marking::Selected);
        self.markings.mark_vertex(u, Marking::Selected);
        self.markings.mark_vertex(v, Marking::Selected);
        Decision::Accepted
    }

    /// `u` already reaches `v` through accepted edges. A vertex absent from
    /// the forest reaches nothing.
    fn closes_cycle(&self, u: Vertex, v: Vertex) -> bool {
        self.result
            .reachable_from(u, |_| true)
            .is_some_and(|reached| reached.contains(&v))
    }
}

impl<'g> StepEngine<'g> for KruskalEngine<'g> {
    fn edge_type(&self) -> EdgeType {
        EdgeType::Undirected
    }

    fn reset(&mut self, graph: &'g Graph) {
        self.graph = Some(graph);
        self.queue.clear();
        self.result = Graph::new();
        self.markings.clear();
        self.last_outcome = None;
        self.state = EngineState::Ready;
    }

    fn is_started(&self) -> bool {
        matches!(self.state, EngineState::Running | EngineState::Done)
    }

    #[instrument(
        name = "kruskal.start",
        err,
        skip(self),
        fields(vertices = tracing::field::Empty, edges = tracing::field::Empty),
    )]
    fn start(&mut self) -> Result<(), EngineError> {
        let graph = self.bound()?;
        self.expect_state(EngineState::Ready, "start")?;
        Span::current()
            .record("vertices", graph.vertex_count())
            .record("edges", graph.edge_count());

        for (edge, low, high) in graph.edges_with_endpoints() {
            self.queue.insert(Candidate { edge, low, high })?;
        }
        self.state = EngineState::Running;
        self.highlight_next();
        Ok(())
    }

    fn setup_next_step(&self) -> bool {
        self.state == EngineState::Running && !self.queue.is_empty()
    }

    fn do_next_step(&mut self) -> Result<(), EngineError> {
        let graph = self.bound()?;
        self.expect_state(EngineState::Running, "do_next_step")?;
        if self.queue.is_empty() {
            return self.finish();
        }

        let candidate = self.queue.remove_min()?;
        let edge = candidate.edge;
        let decision = self.decide(graph, candidate);
        debug!(
            edge = %edge.id(),
            weight = edge.weight(),
            decision = decision.as_str(),
            "kruskal step",
        );
        self.last_outcome = Some(StepOutcome { edge, decision });

        if self.queue.is_empty() {
            self.finish()
        } else {
            self.highlight_next();
            Ok(())
        }
    }

    fn finish(&mut self) -> Result<(), EngineError> {
        let graph = self.bound()?;
        if self.state == EngineState::Done {
            return Ok(());
        }
        self.expect_state(EngineState::Running, "finish")?;

        while let Ok(leftover) = self.queue.remove_min() {
            self.markings.mark_edge(leftover.edge.id(), Marking::Inactive);
        }
        let mut warned = 0_usize;
        for vertex in graph.vertices() {
            if self.markings.vertex(vertex) == Marking::Unmarked {
                self.markings.mark_vertex(vertex, Marking::Warning);
                warned += 1;
            }
        }
        self.state = EngineState::Done;
        info!(
            accepted = self.result.edge_count(),
            rejected = self.markings.edges_marked(Marking::Inactive).len(),
            warned,
            "kruskal finished",
        );
        Ok(())
    }
}
