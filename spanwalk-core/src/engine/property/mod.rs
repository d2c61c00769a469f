//! Property-based tests for the step-wise Kruskal engine.
//!
//! Generated graphs are drained through the engine and compared with a
//! sequential union-find oracle. Structural checks confirm that every edge
//! ends selected or inactive, that selected edges form a spanning forest,
//! and that the two supported driving styles agree.

mod oracle;
mod strategies;
