//! Spanwalk core library.
//!
//! Provides an unbalanced ordered tree with map and set layers on top, an
//! undirected capacity-bounded graph keyed by those maps, and a step-wise
//! Kruskal engine that records per-vertex and per-edge markings for an
//! external observer.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod graph;
mod map;
mod tree;

#[cfg(test)]
mod test_utils;

pub use crate::{
    engine::{
        Decision, EngineState, KruskalEngine, Marking, Markings, StepEngine, StepOutcome,
    },
    error::{
        EngineError, EngineErrorCode, GraphError, GraphErrorCode, Result, TreeError,
        TreeErrorCode,
    },
    graph::{DirectedView, Edge, EdgeId, EdgeType, Graph, MAX_VERTICES, Vertex},
    map::{Iter as MapIter, OrderedMap, OrderedSet},
    tree::{InOrder, OrderedTree, PreOrder},
};
