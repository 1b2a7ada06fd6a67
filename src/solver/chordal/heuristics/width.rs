use super::*;

/// Scores a node by the size of its neighbourhood.
#[derive(Clone, Copy, Debug, Default)]
pub struct WidthHeuristic;

impl<N> CostHeuristic<N> for WidthHeuristic
where
    N: NodeId,
{
    fn cost(&self, graph: &Graph<N>, v: usize) -> f64 {
        graph.neighbor_indices(v).len() as f64
    }

    fn tag(&self) -> &'static str {
        "width"
    }
}

#[test]
fn test_width_cost() {
    let g = Graph::from_edges([1, 2, 3, 4, 5], [(1, 2), (2, 3), (2, 4)]);
    let h = Heuristic::width();
    assert_eq!(cost(&g, &2, &h).unwrap(), 3.0);
    assert_eq!(cost(&g, &4, &h).unwrap(), 1.0);
    assert_eq!(cost(&g, &5, &h).unwrap(), 0.0);
}
