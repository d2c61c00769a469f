//! Identity tokens stored by [`super::Graph`].

use std::{cmp::Ordering, fmt};

/// A graph vertex identified by a caller-chosen id.
///
/// Vertices compare and order by id alone.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Vertex(u32);

impl Vertex {
    /// Creates a vertex token with the given id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn new(id: u32) -> Self { Self(id) }

    /// Returns the vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(self) -> u32 { self.0 }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an [`Edge`], unique within a graph.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(u32);

impl EdgeId {
    /// Wraps a raw edge id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn new(id: u32) -> Self { Self(id) }

    /// Returns the raw edge id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> u32 { self.0 }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A weighted edge token.
///
/// Edges order by ascending weight with ties broken by ascending id, giving
/// a strict total order whenever ids are unique.
///
/// # Examples
/// ```
/// use spanwalk_core::Edge;
///
/// let light = Edge::new(7, 3);
/// let heavy = Edge::new(1, 9);
/// let tied = Edge::new(2, 3);
/// assert!(light < heavy);
/// assert!(tied < light);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    id: EdgeId,
    weight: i64,
}

impl Edge {
    /// Creates an edge token with the given id and weight.
    #[must_use]
    pub const fn new(id: u32, weight: i64) -> Self {
        Self {
            id: EdgeId(id),
            weight,
        }
    }

    /// Returns the edge identity.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(self) -> EdgeId { self.id }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(self) -> i64 { self.weight }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.weight)
    }
}
