use super::*;
use std::fmt;

/// Scores a node by a caller-supplied function of its neighbour set.
#[derive(Clone)]
pub struct WeightHeuristic<N>
where
    N: NodeId,
{
    scorer: WeightFn<N>,
}

impl<N> WeightHeuristic<N>
where
    N: NodeId,
{
    pub fn new(scorer: WeightFn<N>) -> Self {
        Self { scorer }
    }
}

impl<N> fmt::Debug for WeightHeuristic<N>
where
    N: NodeId,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightHeuristic").finish_non_exhaustive()
    }
}

impl<N> CostHeuristic<N> for WeightHeuristic<N>
where
    N: NodeId,
{
    fn cost(&self, graph: &Graph<N>, v: usize) -> f64 {
        let clique: Vec<N> = graph
            .neighbor_indices(v)
            .iter()
            .map(|&u| graph.label(u).clone())
            .collect();
        (self.scorer)(&clique)
    }

    fn tag(&self) -> &'static str {
        "weight"
    }
}

#[test]
fn test_weight_cost() {
    use std::collections::HashMap;

    // table size of the clique for variables with the given cardinalities
    let domains: HashMap<char, f64> = [('a', 2.0), ('b', 3.0), ('c', 4.0), ('d', 5.0)].into();
    let h = Heuristic::weight(move |clique: &[char]| clique.iter().map(|x| domains[x]).product());

    let g = Graph::from_edges(['a', 'b', 'c', 'd'], [('a', 'b'), ('a', 'c'), ('c', 'd')]);
    // the candidate itself is not part of the scored set
    assert_eq!(cost(&g, &'a', &h).unwrap(), 12.0);
    assert_eq!(cost(&g, &'d', &h).unwrap(), 4.0);
    assert!(format!("{h:?}").contains("WeightHeuristic"));
}
