//! Directed-graph vocabulary answered by an undirected [`Graph`].
//!
//! Consumers written against a directed interface can query a [`Graph`]
//! through [`DirectedView`]. Every undirected edge counts as both incoming and
//! outgoing, so predecessors and successors coincide with neighbours. Queries
//! that only make sense for directed edges return fixed answers.

use std::fmt;

use crate::error::GraphError;

use super::{Edge, EdgeId, Graph, Vertex};

/// Orientation of an edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeType {
    /// Edge with no source or destination.
    Undirected,
    /// Edge running from a source to a destination.
    Directed,
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undirected => "undirected",
            Self::Directed => "directed",
        })
    }
}

/// Directed-graph queries over a graph whose edges are all undirected.
pub trait DirectedView {
    /// Source vertex of a directed edge; always `None`.
    fn source(&self, id: EdgeId) -> Option<Vertex>;

    /// Destination vertex of a directed edge; always `None`.
    fn dest(&self, id: EdgeId) -> Option<Vertex>;

    /// Whether `vertex` is the source of edge `id`; always `false`.
    fn is_source(&self, vertex: Vertex, id: EdgeId) -> bool {
        self.source(id).is_some_and(|source| source == vertex)
    }

    /// Whether `vertex` is the destination of edge `id`; always `false`.
    fn is_dest(&self, vertex: Vertex, id: EdgeId) -> bool {
        self.dest(id).is_some_and(|dest| dest == vertex)
    }

    /// Edges arriving at `vertex`.
    fn in_edges(&self, vertex: Vertex) -> Option<Vec<Edge>>;

    /// Edges leaving `vertex`.
    fn out_edges(&self, vertex: Vertex) -> Option<Vec<Edge>>;

    /// Number of edges arriving at `vertex`.
    fn in_degree(&self, vertex: Vertex) -> Option<usize>;

    /// Number of edges leaving `vertex`.
    fn out_degree(&self, vertex: Vertex) -> Option<usize>;

    /// Vertices with an edge into `vertex`.
    fn predecessors(&self, vertex: Vertex) -> Option<Vec<Vertex>>;

    /// Vertices reached by an edge out of `vertex`.
    fn successors(&self, vertex: Vertex) -> Option<Vec<Vertex>>;

    /// Number of predecessors of `vertex`.
    fn predecessor_count(&self, vertex: Vertex) -> Option<usize> {
        self.in_degree(vertex)
    }

    /// Number of successors of `vertex`.
    fn successor_count(&self, vertex: Vertex) -> Option<usize> {
        self.out_degree(vertex)
    }

    /// Whether `u` is a predecessor of `v`.
    fn is_predecessor(&self, u: Vertex, v: Vertex) -> bool;

    /// Whether `u` is a successor of `v`.
    fn is_successor(&self, u: Vertex, v: Vertex) -> bool;

    /// Orientation of edge `id`.
    fn edge_type(&self, id: EdgeId) -> EdgeType;

    /// Orientation given to edges added without an explicit type.
    fn default_edge_type(&self) -> EdgeType;

    /// Number of vertices an edge touches.
    fn incident_count(&self, id: EdgeId) -> usize;

    /// Edges of the requested orientation, or `None` when that orientation
    /// is never stored.
    fn edges_of_type(&self, edge_type: EdgeType) -> Option<Vec<Edge>>;

    /// Number of edges of the requested orientation.
    fn edge_count_of_type(&self, edge_type: EdgeType) -> usize;

    /// Adds an edge of the requested orientation.
    ///
    /// # Errors
    /// Returns [`GraphError::DirectedEdge`] when a directed edge is requested
    /// from a graph that only stores undirected edges.
    fn add_edge_of_type(
        &mut self,
        edge: Edge,
        u: Vertex,
        v: Vertex,
        edge_type: EdgeType,
    ) -> Result<bool, GraphError>;
}

impl DirectedView for Graph {
    fn source(&self, _id: EdgeId) -> Option<Vertex> {
        None
    }

    fn dest(&self, _id: EdgeId) -> Option<Vertex> {
        None
    }

    fn in_edges(&self, vertex: Vertex) -> Option<Vec<Edge>> {
        self.incident_edges(vertex).map(Iterator::collect)
    }

    fn out_edges(&self, vertex: Vertex) -> Option<Vec<Edge>> {
        self.in_edges(vertex)
    }

    fn in_degree(&self, vertex: Vertex) -> Option<usize> {
        self.degree(vertex)
    }

    fn out_degree(&self, vertex: Vertex) -> Option<usize> {
        self.degree(vertex)
    }

    fn predecessors(&self, vertex: Vertex) -> Option<Vec<Vertex>> {
        self.neighbors(vertex).map(Iterator::collect)
    }

    fn successors(&self, vertex: Vertex) -> Option<Vec<Vertex>> {
        self.predecessors(vertex)
    }

    fn is_predecessor(&self, u: Vertex, v: Vertex) -> bool {
        self.is_neighbor(u, v)
    }

    fn is_successor(&self, u: Vertex, v: Vertex) -> bool {
        self.is_neighbor(u, v)
    }

    fn edge_type(&self, _id: EdgeId) -> EdgeType {
        EdgeType::Undirected
    }

    fn default_edge_type(&self) -> EdgeType {
        EdgeType::Undirected
    }

    fn incident_count(&self, _id: EdgeId) -> usize {
        2
    }

    fn edges_of_type(&self, edge_type: EdgeType) -> Option<Vec<Edge>> {
        match edge_type {
            EdgeType::Undirected => Some(self.edges().collect()),
            EdgeType::Directed => None,
        }
    }

    fn edge_count_of_type(&self, edge_type: EdgeType) -> usize {
        match edge_type {
            EdgeType::Undirected => self.edge_count(),
            EdgeType::Directed => 0,
        }
    }

    fn add_edge_of_type(
        &mut self,
        edge: Edge,
        u: Vertex,
        v: Vertex,
        edge_type: EdgeType,
    ) -> Result<bool, GraphError> {
        match edge_type {
            EdgeType::Undirected => Ok(self.add_edge(edge, u, v)),
            EdgeType::Directed => Err(GraphError::DirectedEdge),
        }
    }
}
