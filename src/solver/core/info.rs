#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary statistics of a triangulation run.

#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangulationInfo {
    /// number of fill edges added to the input graph
    pub fill_count: usize,
    /// largest neighbour set met when a node was eliminated or processed.
    /// An upper bound on the treewidth of the input graph.
    pub width: usize,
    /// number of nodes eliminated (or processed, for order-driven methods)
    pub eliminations: usize,
    /// wall clock time of the run, in seconds
    pub solve_time: f64,
}

impl TriangulationInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_elimination(&mut self, neighbors: usize, fill: usize) {
        self.eliminations += 1;
        self.width = self.width.max(neighbors);
        self.fill_count += fill;
    }
}

#[test]
fn test_record_elimination() {
    let mut info = TriangulationInfo::new();
    info.record_elimination(3, 2);
    info.record_elimination(1, 0);
    info.record_elimination(2, 1);
    assert_eq!(info.eliminations, 3);
    assert_eq!(info.width, 3);
    assert_eq!(info.fill_count, 3);
}
