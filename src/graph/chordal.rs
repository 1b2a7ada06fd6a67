// Chordality checks by maximum cardinality search.
//
// Reference: Tarjan & Yannakakis, "Simple linear-time algorithms to test
// chordality of graphs, test acyclicity of hypergraphs, and selectively
// reduce acyclic hypergraphs", SIAM J. Comput. 13 (1984).
//
// The reverse of an MCS visiting order is a perfect elimination ordering
// exactly when the graph is chordal.  No attempt is made here to produce a
// *minimal* elimination ordering of a non-chordal graph.

use super::{Graph, NodeId};
use crate::TriangulationError;
use std::cmp::Reverse;

/// Visits every node, each time choosing an unvisited node with the largest
/// number of visited neighbours (earliest inserted on ties).  Returns the
/// nodes in visiting order.
pub fn maximum_cardinality_search<N: NodeId>(graph: &Graph<N>) -> Vec<N> {
    mcs_indices(graph)
        .into_iter()
        .map(|i| graph.label(i).clone())
        .collect()
}

/// A perfect elimination ordering of `graph`, or `None` if the graph is not
/// chordal.  Eliminating nodes in this order adds no fill edges.
pub fn perfect_elimination_order<N: NodeId>(graph: &Graph<N>) -> Option<Vec<N>> {
    let mut order = mcs_indices(graph);
    order.reverse();

    if !is_perfect_elimination_order_index(graph, &order) {
        return None;
    }
    Some(order.into_iter().map(|i| graph.label(i).clone()).collect())
}

/// true if the graph has no chordless cycle of length four or more
pub fn is_chordal<N: NodeId>(graph: &Graph<N>) -> bool {
    let mut order = mcs_indices(graph);
    order.reverse();
    is_perfect_elimination_order_index(graph, &order)
}

/// Checks whether eliminating the nodes in `order` would add no fill edges.
/// `order` must contain every node of the graph exactly once.
pub fn is_perfect_elimination_order<N: NodeId>(
    graph: &Graph<N>,
    order: &[N],
) -> Result<bool, TriangulationError> {
    let order = crate::solver::validate_order(graph, order)?;
    Ok(is_perfect_elimination_order_index(graph, &order))
}

/// For a chordal graph, the size of its largest clique minus one, which is
/// also its treewidth.  Returns `None` if the graph is not chordal and
/// `Some(0)` for a graph without edges.
pub fn chordal_width<N: NodeId>(graph: &Graph<N>) -> Option<usize> {
    let mut order = mcs_indices(graph);
    order.reverse();

    if !is_perfect_elimination_order_index(graph, &order) {
        return None;
    }
    let position = positions(graph, &order);
    let width = order
        .iter()
        .map(|&v| {
            graph
                .neighbor_indices(v)
                .iter()
                .filter(|&&u| position[u] > position[v])
                .count()
        })
        .max()
        .unwrap_or(0);
    Some(width)
}

// ---------------------------------------------------------
// index-level helpers
// ---------------------------------------------------------

fn mcs_indices<N: NodeId>(graph: &Graph<N>) -> Vec<usize> {
    let mut weight = vec![0usize; graph.capacity()];
    let mut visited = vec![false; graph.capacity()];
    let mut order = Vec::with_capacity(graph.node_count());

    while order.len() < graph.node_count() {
        // min_by_key keeps the first of equal keys
        let Some(v) = graph
            .node_indices()
            .filter(|&i| !visited[i])
            .min_by_key(|&i| Reverse(weight[i]))
        else {
            break;
        };

        visited[v] = true;
        order.push(v);

        for &u in graph.neighbor_indices(v) {
            if !visited[u] {
                weight[u] += 1;
            }
        }
    }
    order
}

fn positions<N: NodeId>(graph: &Graph<N>, order: &[usize]) -> Vec<usize> {
    let mut position = vec![usize::MAX; graph.capacity()];
    for (k, &v) in order.iter().enumerate() {
        position[v] = k;
    }
    position
}

// For each node, its neighbours that come later in the order must all be
// adjacent to the earliest of them.
pub(crate) fn is_perfect_elimination_order_index<N: NodeId>(
    graph: &Graph<N>,
    order: &[usize],
) -> bool {
    let position = positions(graph, order);

    order.iter().all(|&v| {
        let later: Vec<usize> = graph
            .neighbor_indices(v)
            .iter()
            .copied()
            .filter(|&u| position[u] > position[v])
            .collect();

        let Some(&parent) = later.iter().min_by_key(|&&u| position[u]) else {
            return true;
        };
        later
            .iter()
            .all(|&w| w == parent || graph.has_edge_index(parent, w))
    })
}

#[test]
fn test_chordal_detection() {
    // chordless 4-cycle
    let mut g = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (3, 4), (4, 1)]);
    assert!(!is_chordal(&g));
    assert!(perfect_elimination_order(&g).is_none());
    assert_eq!(chordal_width(&g), None);

    // add a chord
    g.add_edge(1, 3);
    assert!(is_chordal(&g));
    assert_eq!(chordal_width(&g), Some(2));

    let peo = perfect_elimination_order(&g).unwrap();
    assert!(is_perfect_elimination_order(&g, &peo).unwrap());
    assert!(!is_perfect_elimination_order(&g, &[1, 2, 3, 4]).unwrap());
}

#[test]
fn test_trees_and_edge_cases() {
    let empty = Graph::<u8>::new();
    assert!(is_chordal(&empty));
    assert_eq!(chordal_width(&empty), Some(0));
    assert!(maximum_cardinality_search(&empty).is_empty());

    let isolated = Graph::from_edges(['a', 'b', 'c'], []);
    assert_eq!(chordal_width(&isolated), Some(0));
    assert_eq!(maximum_cardinality_search(&isolated), vec!['a', 'b', 'c']);

    let tree = Graph::from_edges(0..7, [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]);
    assert!(is_chordal(&tree));
    assert_eq!(chordal_width(&tree), Some(1));
}

#[test]
fn test_long_cycle_is_not_chordal() {
    let edges: Vec<(usize, usize)> = (0..6).map(|i| (i, (i + 1) % 6)).collect();
    let g = Graph::from_edges(0..6, edges);
    assert!(!is_chordal(&g));
}
