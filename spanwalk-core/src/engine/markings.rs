//! Per-vertex and per-edge observation state written by step engines.

use std::fmt;

use crate::{
    graph::{EdgeId, Vertex},
    map::OrderedMap,
};

/// Discrete state tag an engine attaches to a vertex or an edge.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Marking {
    /// Not touched by the engine.
    #[default]
    Unmarked,
    /// Examined and discarded; rejected edges carry this marking.
    Inactive,
    /// Next in line for examination.
    Highlighted,
    /// Part of the algorithm's result.
    Selected,
    /// Left unresolved when the run finished.
    Warning,
}

impl Marking {
    /// Stable lowercase name used in logs and rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unmarked => "none",
            Self::Inactive => "inactive",
            Self::Highlighted => "highlighted",
            Self::Selected => "selected",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Marking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markings keyed by vertex and edge identity.
///
/// Identities that were never marked read as [`Marking::Unmarked`].
#[derive(Clone, Debug, Default)]
pub struct Markings {
    vertices: OrderedMap<Vertex, Marking>,
    edges: OrderedMap<EdgeId, Marking>,
}

impl Markings {
    /// Creates an empty marking table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: OrderedMap::new(),
            edges: OrderedMap::new(),
        }
    }

    /// Current marking of `vertex`.
    #[must_use]
    pub fn vertex(&self, vertex: Vertex) -> Marking {
        self.vertices.get(&vertex).copied().unwrap_or_default()
    }

    /// Current marking of edge `id`.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Marking {
        self.edges.get(&id).copied().unwrap_or_default()
    }

    /// Vertices currently carrying `marking`, in ascending id order.
    ///
    /// Unmarked vertices are not tracked, so asking for
    /// [`Marking::Unmarked`] yields nothing.
    #[must_use]
    pub fn vertices_marked(&self, marking: Marking) -> Vec<Vertex> {
        let mut found: Vec<Vertex> = self
            .vertices
            .iter()
            .filter(|(_, current)| **current == marking)
            .map(|(vertex, _)| *vertex)
            .collect();
        found.sort_unstable();
        found
    }

    /// Edges currently carrying `marking`, in ascending id order.
    #[must_use]
    pub fn edges_marked(&self, marking: Marking) -> Vec<EdgeId> {
        let mut found: Vec<EdgeId> = self
            .edges
            .iter()
            .filter(|(_, current)| **current == marking)
            .map(|(id, _)| *id)
            .collect();
        found.sort_unstable();
        found
    }

    pub(crate) fn mark_vertex(&mut self, vertex: Vertex, marking: Marking) {
        self.vertices.put(vertex, marking);
    }

    pub(crate) fn mark_edge(&mut self, id: EdgeId, marking: Marking) {
        self.edges.put(id, marking);
    }

    pub(crate) fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }
}
