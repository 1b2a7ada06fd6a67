use crate::graph::{is_chordal, Graph, NodeId};
use crate::solver::TriangulationInfo;

/// The outcome of a [`Triangulator`](crate::solver::Triangulator) run.
#[derive(Debug, Clone)]
pub struct Triangulation<N: NodeId> {
    /// the input graph with all fill edges added
    pub graph: Graph<N>,
    /// fill edges, in the order they were added
    pub fill: Vec<(N, N)>,
    /// elimination order: chosen by the greedy search, or the one supplied
    pub order: Vec<N>,
    pub info: TriangulationInfo,
}

impl<N: NodeId> Triangulation<N> {
    pub fn fill_count(&self) -> usize {
        self.fill.len()
    }

    /// true if the triangulated graph is chordal.  Always the case for
    /// results produced by this crate.
    pub fn is_chordal(&self) -> bool {
        is_chordal(&self.graph)
    }
}
