use super::heuristics::{CostHeuristic, Heuristic};
use crate::graph::{Graph, NodeId};
use crate::TriangulationError;

/// Depth-limited estimate of the cost of eliminating `node` next.
///
/// The estimate is the node's immediate heuristic cost plus, when
/// `depth > 1` and nodes remain afterwards, the smallest lookahead cost over
/// all nodes of the reduced graph at `depth - 1`.  `depth` of 0 or 1 gives
/// the plain heuristic cost.
///
/// The search branches over every remaining node at each level, so its
/// running time grows like `n^depth`.  Keep `depth` small (1 to 3) for all
/// but tiny graphs.
pub fn lookahead_cost<N: NodeId>(
    graph: &Graph<N>,
    node: &N,
    depth: usize,
    heuristic: &Heuristic<N>,
) -> Result<f64, TriangulationError> {
    let v = graph.index_of(node)?;
    Ok(lookahead_cost_index(graph, v, depth, heuristic))
}

pub(crate) fn lookahead_cost_index<N: NodeId>(
    graph: &Graph<N>,
    v: usize,
    depth: usize,
    heuristic: &Heuristic<N>,
) -> f64 {
    let immediate = heuristic.cost(graph, v);
    if depth <= 1 {
        return immediate;
    }

    // snapshot shares the node labels with `graph`
    let mut reduced = graph.clone();
    reduced.eliminate_index(v);
    if reduced.is_empty() {
        return immediate;
    }

    let best = reduced
        .node_indices()
        .map(|r| lookahead_cost_index(&reduced, r, depth - 1, heuristic))
        .fold(f64::INFINITY, f64::min);

    immediate + best
}

#[test]
fn test_lookahead_cost() {
    let mut g = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (2, 4)]);
    let fill = Heuristic::fill();
    assert_eq!(lookahead_cost(&g, &2, 1, &fill).unwrap(), 3.0);

    // after eliminating 2, nodes 3 and 5 are simplicial
    g.add_node(5);
    g.add_edges_from([(1, 5), (4, 5)]);
    assert_eq!(lookahead_cost(&g, &2, 2, &fill).unwrap(), 3.0);
    assert_eq!(lookahead_cost(&g, &2, 3, &fill).unwrap(), 3.0);

    // the graph is left untouched
    assert_eq!(g.edge_count(), 5);
}

#[test]
fn test_lookahead_depth_degenerates() {
    let g = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (3, 4), (4, 1)]);
    let fill = Heuristic::fill();
    for node in 1..=4 {
        assert_eq!(lookahead_cost(&g, &node, 0, &fill).unwrap(), 1.0);
        assert_eq!(lookahead_cost(&g, &node, 1, &fill).unwrap(), 1.0);
        // the chord leaves a triangle, which eliminates for free
        assert_eq!(lookahead_cost(&g, &node, 2, &fill).unwrap(), 1.0);
    }

    // eliminating the only node empties the graph
    let single = Graph::from_edges(["x"], []);
    assert_eq!(lookahead_cost(&single, &"x", 4, &Heuristic::width()).unwrap(), 0.0);
    assert!(lookahead_cost(&single, &"y", 1, &Heuristic::fill()).is_err());
}

#[test]
fn test_lookahead_width_accumulates() {
    // path a-b-c: eliminating b first costs 2, then the best leaf costs 1
    let g = Graph::from_edges(['a', 'b', 'c'], [('a', 'b'), ('b', 'c')]);
    let width = Heuristic::width();
    assert_eq!(lookahead_cost(&g, &'b', 2, &width).unwrap(), 3.0);
    // a leaf costs 1, then b (now a leaf) or c costs 1
    assert_eq!(lookahead_cost(&g, &'a', 2, &width).unwrap(), 2.0);
    // three levels: 1 + 1 + 0
    assert_eq!(lookahead_cost(&g, &'a', 3, &width).unwrap(), 2.0);
}
