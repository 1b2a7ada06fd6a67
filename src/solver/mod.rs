//! Triangulation algorithms.
//!
//! The free functions [`greedy_triangulate`], [`lb_triangulate`],
//! [`elimination_game`], [`cost`] and [`lookahead_cost`] implement the
//! algorithms directly.  A [`Triangulator`] wraps them behind validated
//! [`TriangulationSettings`] and returns a [`Triangulation`] that also carries
//! the fill edges, the elimination order used and some run statistics.

// internal module structure
pub(crate) mod chordal;
pub(crate) mod core;
mod solution;
mod triangulator;

//Here we expose only part of the solver internals
pub use crate::solver::chordal::{
    cost, elimination_game, greedy_triangulate, lb_triangulate, lookahead_cost, FillHeuristic,
    Heuristic, WeightFn, WeightHeuristic, WidthHeuristic,
};
pub use crate::solver::core::*;
pub use crate::solver::solution::*;
pub use crate::solver::triangulator::*;

pub(crate) use crate::solver::chordal::validate_order;
