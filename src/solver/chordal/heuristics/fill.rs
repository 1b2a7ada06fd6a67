use super::*;

/// Counts the fill edges eliminating a node would create.
#[derive(Clone, Copy, Debug, Default)]
pub struct FillHeuristic;

impl<N> CostHeuristic<N> for FillHeuristic
where
    N: NodeId,
{
    fn cost(&self, graph: &Graph<N>, v: usize) -> f64 {
        graph.fill_in_count(v) as f64
    }

    fn tag(&self) -> &'static str {
        "fill"
    }
}

#[test]
fn test_fill_cost() {
    let mut g = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (2, 4)]);
    let h = Heuristic::fill();

    // neighbours {1,3,4} are pairwise non-adjacent
    assert_eq!(cost(&g, &2, &h).unwrap(), 3.0);
    assert_eq!(cost(&g, &1, &h).unwrap(), 0.0);

    // costing does not touch the graph
    assert_eq!(g.edge_count(), 3);

    // and agrees with the edges elimination really adds
    g.add_edge(1, 3);
    let predicted = cost(&g, &2, &h).unwrap();
    assert_eq!(predicted, 2.0);
    assert_eq!(g.eliminate(&2).unwrap().len() as f64, predicted);
}
