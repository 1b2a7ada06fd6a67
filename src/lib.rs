//! __chordify__ computes chordal completions (triangulations) of undirected graphs.
//!
//! Given an arbitrary graph, a triangulation is a supergraph with no induced
//! cycle of length four or more, obtained by adding _fill_ edges.  Triangulations
//! are the starting point for tree decompositions, junction trees and sparse
//! Cholesky orderings.
//!
//! Two algorithms are provided, both built on a single elimination operator
//! (remove a node and connect its surviving neighbours pairwise):
//!
//! * [`greedy_triangulate`](crate::solver::greedy_triangulate) repeatedly
//!   eliminates the node with the lowest depth-limited lookahead cost, using one
//!   of the interchangeable [`Heuristic`](crate::solver::Heuristic)s `fill`,
//!   `width` or `weight`.
//!
//! * [`lb_triangulate`](crate::solver::lb_triangulate) turns a fixed
//!   elimination order into a triangulation by filling the separators of the
//!   components left behind by each node's closed neighbourhood.
//!
//! Neither algorithm guarantees a _minimum_ fill.  The `weight` heuristic is an
//! extension point: the caller supplies the scoring function.
//!
//! # Example
//!
//! ```
//! use chordify::graph::Graph;
//! use chordify::solver::*;
//!
//! // a chordless 4-cycle needs exactly one chord
//! let g = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (3, 4), (4, 1)]);
//! let h = greedy_triangulate(&g, 1, &Heuristic::fill());
//!
//! assert_eq!(h.edge_count(), 5);
//! assert!(chordify::graph::is_chordal(&h));
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

mod error_types;
pub mod graph;
pub mod solver;

pub use crate::error_types::*;

/// crate version string
pub fn version() -> &'static str {
    VERSION
}
