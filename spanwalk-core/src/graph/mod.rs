//! Undirected, simple, capacity-bounded graph built on [`OrderedMap`].
//!
//! Adjacency is a map from each vertex to a map of its neighbours, each
//! neighbour entry holding the connecting [`Edge`]. Every edge is recorded
//! under both endpoints so the adjacency stays symmetric. A second map keyed
//! by [`EdgeId`] remembers each edge's endpoints, which keeps edge lookups
//! and removals from scanning the whole adjacency.
//!
//! Structural mutations report precondition failures by returning `false`
//! and emitting a `debug` event carrying a `reason` field.

mod directed;
mod element;

use tracing::debug;

use crate::map::{OrderedMap, OrderedSet};

pub use self::{
    directed::{DirectedView, EdgeType},
    element::{Edge, EdgeId, Vertex},
};

/// Maximum number of vertices a [`Graph`] accepts.
pub const MAX_VERTICES: usize = 200;

#[derive(Clone, Copy, Debug)]
struct Incidence {
    edge: Edge,
    low: Vertex,
    high: Vertex,
}

/// An undirected simple graph with at most [`MAX_VERTICES`] vertices.
///
/// Self-loops and parallel edges are rejected.
///
/// # Examples
/// ```
/// use spanwalk_core::{Edge, Graph, Vertex};
///
/// let (a, b) = (Vertex::new(0), Vertex::new(1));
/// let mut graph = Graph::new();
/// assert!(graph.add_edge(Edge::new(0, 4), a, b));
/// assert!(!graph.add_edge(Edge::new(1, 2), b, a));
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.endpoints(Edge::new(0, 4).id()), Some((a, b)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: OrderedMap<Vertex, OrderedMap<Vertex, Edge>>,
    incidence: OrderedMap<EdgeId, Incidence>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            adjacency: OrderedMap::new(),
            incidence: OrderedMap::new(),
        }
    }

    /// Registers `vertex` with no neighbours.
    ///
    /// Returns `false` when the vertex is already present or the graph is
    /// full.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.contains_vertex(vertex) {
            debug!(vertex = vertex.id(), reason = "duplicate_vertex", "vertex rejected");
            return false;
        }
        if self.vertex_count() >= MAX_VERTICES {
            debug!(vertex = vertex.id(), reason = "capacity", "vertex rejected");
            return false;
        }
        self.adjacency.put(vertex, OrderedMap::new());
        true
    }

    /// Connects `u` and `v` with `edge`, adding missing endpoints.
    ///
    /// Returns `false` when the edge id is already in use, `u == v`, another
    /// edge already joins the pair, the graph already holds
    /// [`MAX_VERTICES`] vertices, or adding the missing endpoints would
    /// exceed that limit. A rejected call leaves the graph unchanged.
    pub fn add_edge(&mut self, edge: Edge, u: Vertex, v: Vertex) -> bool {
        let reason = if self.contains_edge(edge.id()) {
            Some("duplicate_edge")
        } else if u == v {
            Some("self_loop")
        } else if self.find_edge(u, v).is_some() {
            Some("parallel_edge")
        } else if !self.has_room_for(u, v) {
            Some("capacity")
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!(edge = edge.id().get(), u = u.id(), v = v.id(), reason, "edge rejected");
            return false;
        }

        for endpoint in [u, v] {
            if !self.contains_vertex(endpoint) {
                self.adjacency.put(endpoint, OrderedMap::new());
            }
        }
        for (from, to) in [(u, v), (v, u)] {
            if let Some(neighbours) = self.adjacency.get_mut(&from) {
                neighbours.put(to, edge);
            }
        }
        let (low, high) = if u < v { (u, v) } else { (v, u) };
        self.incidence.put(edge.id(), Incidence { edge, low, high });
        true
    }

    /// Adds `edge` between the two vertices in `vertices`.
    ///
    /// Returns `false` unless exactly two vertices are supplied, then
    /// behaves like [`Graph::add_edge`].
    pub fn add_edge_from_pair(&mut self, edge: Edge, vertices: &[Vertex]) -> bool {
        match *vertices {
            [u, v] => self.add_edge(edge, u, v),
            _ => {
                debug!(
                    edge = edge.id().get(),
                    supplied = vertices.len(),
                    reason = "endpoint_count",
                    "edge rejected"
                );
                false
            }
        }
    }

    /// Removes the edge with identity `id` from both endpoints.
    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        let Some(incidence) = self.incidence.remove(&id) else {
            debug!(edge = id.get(), reason = "missing_edge", "edge removal rejected");
            return false;
        };
        for (from, to) in [
            (incidence.low, incidence.high),
            (incidence.high, incidence.low),
        ] {
            if let Some(neighbours) = self.adjacency.get_mut(&from) {
                neighbours.remove(&to);
            }
        }
        true
    }

    /// Removes `vertex` together with every edge incident to it.
    ///
    /// Each former neighbour loses its entry for `vertex`.
    pub fn remove_vertex(&mut self, vertex: Vertex) -> bool {
        let Some(neighbours) = self.adjacency.remove(&vertex) else {
            debug!(vertex = vertex.id(), reason = "missing_vertex", "vertex removal rejected");
            return false;
        };
        for (neighbour, edge) in &neighbours {
            if let Some(entries) = self.adjacency.get_mut(neighbour) {
                entries.remove(&vertex);
            }
            self.incidence.remove(&edge.id());
        }
        true
    }

    /// Iterates over the vertices.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates over the edges, each reported once.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.incidence.iter().map(|(_, incidence)| incidence.edge)
    }

    /// Iterates over the edges with their endpoints, lower id first.
    pub(crate) fn edges_with_endpoints(&self) -> impl Iterator<Item = (Edge, Vertex, Vertex)> + '_ {
        self.incidence
            .iter()
            .map(|(_, incidence)| (incidence.edge, incidence.low, incidence.high))
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.incidence.len()
    }

    /// Returns `true` when the graph is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` when `vertex` is present.
    #[must_use]
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Returns `true` when an edge with identity `id` is present.
    #[must_use]
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.incidence.contains_key(&id)
    }

    /// Returns the edge with identity `id`.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<Edge> {
        self.incidence.get(&id).map(|incidence| incidence.edge)
    }

    /// Iterates over the neighbours of `vertex`, or `None` when absent.
    pub fn neighbors(&self, vertex: Vertex) -> Option<impl Iterator<Item = Vertex> + '_> {
        self.adjacency
            .get(&vertex)
            .map(|neighbours| neighbours.keys().copied())
    }

    /// Number of neighbours of `vertex`, or `None` when absent.
    #[must_use]
    pub fn neighbor_count(&self, vertex: Vertex) -> Option<usize> {
        self.adjacency.get(&vertex).map(OrderedMap::len)
    }

    /// Degree of `vertex`; equal to its neighbour count in a simple graph.
    #[must_use]
    pub fn degree(&self, vertex: Vertex) -> Option<usize> {
        self.neighbor_count(vertex)
    }

    /// Iterates over the edges touching `vertex`, or `None` when absent.
    pub fn incident_edges(&self, vertex: Vertex) -> Option<impl Iterator<Item = Edge> + '_> {
        self.adjacency
            .get(&vertex)
            .map(|neighbours| neighbours.iter().map(|(_, edge)| *edge))
    }

    /// Returns the edge joining `u` and `v`.
    #[must_use]
    pub fn find_edge(&self, u: Vertex, v: Vertex) -> Option<Edge> {
        self.adjacency.get(&u)?.get(&v).copied()
    }

    /// Collects the edges joining `u` and `v`; at most one in a simple graph.
    #[must_use]
    pub fn find_edge_set(&self, u: Vertex, v: Vertex) -> Option<Vec<Edge>> {
        self.find_edge(u, v).map(|edge| vec![edge])
    }

    /// Returns `true` when an edge joins `u` and `v`.
    #[must_use]
    pub fn is_neighbor(&self, u: Vertex, v: Vertex) -> bool {
        self.find_edge(u, v).is_some()
    }

    /// Returns the endpoints of edge `id`, lower id first.
    #[must_use]
    pub fn endpoints(&self, id: EdgeId) -> Option<(Vertex, Vertex)> {
        self.incidence
            .get(&id)
            .map(|incidence| (incidence.low, incidence.high))
    }

    /// Returns the endpoints of edge `id` as an array, lower id first.
    #[must_use]
    pub fn incident_vertices(&self, id: EdgeId) -> Option<[Vertex; 2]> {
        self.endpoints(id).map(|(low, high)| [low, high])
    }

    /// Returns `true` when `vertex` is an endpoint of edge `id`.
    #[must_use]
    pub fn is_incident(&self, vertex: Vertex, id: EdgeId) -> bool {
        self.endpoints(id)
            .is_some_and(|(low, high)| low == vertex || high == vertex)
    }

    /// Returns the endpoint of edge `id` that is not `vertex`.
    ///
    /// `None` when the edge is absent or `vertex` is not one of its
    /// endpoints.
    #[must_use]
    pub fn opposite(&self, vertex: Vertex, id: EdgeId) -> Option<Vertex> {
        let (low, high) = self.endpoints(id)?;
        if vertex == low {
            Some(high)
        } else if vertex == high {
            Some(low)
        } else {
            None
        }
    }

    /// Collects every vertex reachable from `start` through existing edges,
    /// excluding `start` itself. `None` when `start` is absent.
    ///
    /// # Examples
    /// ```
    /// use spanwalk_core::{Edge, Graph, Vertex};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(Edge::new(0, 1), Vertex::new(0), Vertex::new(1));
    /// graph.add_edge(Edge::new(1, 1), Vertex::new(1), Vertex::new(2));
    /// graph.add_vertex(Vertex::new(3));
    ///
    /// let reachable = graph.reachable_set(Vertex::new(0)).unwrap_or_default();
    /// assert_eq!(reachable.len(), 2);
    /// assert!(!reachable.contains(&Vertex::new(0)));
    /// assert!(!reachable.contains(&Vertex::new(3)));
    /// ```
    #[must_use]
    pub fn reachable_set(&self, start: Vertex) -> Option<OrderedSet<Vertex>> {
        self.reachable_from(start, |_| true)
    }

    /// Depth-first reachability from `start` following only edges accepted
    /// by `follow`. `start` is never part of the result.
    pub(crate) fn reachable_from<F>(&self, start: Vertex, mut follow: F) -> Option<OrderedSet<Vertex>>
    where
        F: FnMut(Edge) -> bool,
    {
        if !self.contains_vertex(start) {
            return None;
        }
        let mut reached = OrderedSet::new();
        let mut pending = vec![start];
        while let Some(current) = pending.pop() {
            let Some(neighbours) = self.adjacency.get(&current) else {
                continue;
            };
            for (neighbour, edge) in neighbours {
                if *neighbour != start && follow(*edge) && reached.add(*neighbour) {
                    pending.push(*neighbour);
                }
            }
        }
        Some(reached)
    }

    fn has_room_for(&self, u: Vertex, v: Vertex) -> bool {
        let count = self.vertex_count();
        let missing = [u, v]
            .into_iter()
            .filter(|endpoint| !self.contains_vertex(*endpoint))
            .count();
        count < MAX_VERTICES && count + missing <= MAX_VERTICES
    }
}

#[cfg(test)]
mod tests;
