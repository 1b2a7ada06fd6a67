use super::order::validate_order;
use crate::graph::{chordal_width, Graph, NodeId, VertexSet};
use crate::solver::{Triangulation, TriangulationInfo};
use crate::TriangulationError;
use itertools::Itertools;
use log::debug;
use std::time::Instant;

/// Triangulates `graph` by filling minimal separators along a fixed
/// elimination order (LB-triangulation).
///
/// Nodes are processed in `order`.  For each node `v`, the connected
/// components of the working graph with the closed neighbourhood `N[v]`
/// removed are enumerated, and for each component the nodes of `N[v]`
/// adjacent to it are made pairwise adjacent.  Fill edges persist into the
/// working graph for the nodes that follow.
///
/// The result is always chordal and contains `graph` as a subgraph.  It is a
/// *minimal* triangulation (no fill edge can be dropped without losing
/// chordality) when `order` is a minimal elimination ordering of `graph`;
/// computing such an ordering is left to the caller.  A chordal `graph`
/// is returned unchanged.
///
/// `order` must contain every node of `graph` exactly once, otherwise
/// [`EmptyOrder`](TriangulationError::EmptyOrder) or
/// [`OrderMismatch`](TriangulationError::OrderMismatch) is returned.
pub fn lb_triangulate<N: NodeId>(
    graph: &Graph<N>,
    order: &[N],
) -> Result<Graph<N>, TriangulationError> {
    Ok(lb_search(graph, order)?.graph)
}

pub(crate) fn lb_search<N: NodeId>(
    graph: &Graph<N>,
    order: &[N],
) -> Result<Triangulation<N>, TriangulationError> {
    let start = Instant::now();
    let order_idx = validate_order(graph, order)?;

    let mut h = graph.clone();
    let mut info = TriangulationInfo::new();
    let mut fill = Vec::new();

    for &v in &order_idx {
        let mut closed: VertexSet = h.neighbor_indices(v).clone();
        closed.insert(v);

        let mut added = Vec::new();
        for component in h.components_excluding_index(&closed) {
            let members: VertexSet = component.into_iter().collect();

            // the separator N(C), taken in neighbourhood order
            let separator: Vec<usize> = closed
                .iter()
                .copied()
                .filter(|&x| h.neighbor_indices(x).iter().any(|u| members.contains(u)))
                .collect();

            for (&a, &b) in separator.iter().tuple_combinations() {
                if h.add_edge_index(a, b) {
                    added.push((a, b));
                }
            }
        }

        debug!("processed {:?}: {} fill edges", h.label(v), added.len());
        info.record_elimination(closed.len() - 1, added.len());
        fill.extend(h.label_edges(&added));
    }

    // the triangulation is chordal, so its width is exact
    info.width = chordal_width(&h).unwrap_or(info.width);
    info.solve_time = start.elapsed().as_secs_f64();

    Ok(Triangulation {
        graph: h,
        fill,
        order: order.to_vec(),
        info,
    })
}

#[test]
fn test_lb_four_cycle() {
    let g = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (3, 4), (4, 1)]);
    let t = lb_search(&g, &[1, 2, 3, 4]).unwrap();

    // removing N[1] = {1,2,4} leaves {3}, whose separator is {2,4}
    assert_eq!(t.fill, vec![(2, 4)]);
    assert_eq!(t.info.fill_count, 1);
    assert_eq!(t.info.width, 2);
    assert!(crate::graph::is_chordal(&t.graph));
}

#[test]
fn test_lb_separator_uses_fill_from_earlier_steps() {
    // a 6-cycle: each step works on the chords added by the steps before it
    let edges: Vec<(u8, u8)> = (0..6).map(|i| (i, (i + 1) % 6)).collect();
    let g = Graph::from_edges(0..6, edges);
    let h = lb_triangulate(&g, &[0, 3, 1, 4, 2, 5]).unwrap();
    assert!(crate::graph::is_chordal(&h));
    // any minimal triangulation of a 6-cycle has exactly 3 chords
    assert_eq!(h.edge_count(), 9);
}

#[test]
fn test_lb_rejects_bad_orders() {
    let g = Graph::from_edges([1, 2, 3], [(1, 2), (2, 3)]);
    assert_eq!(lb_triangulate(&g, &[]), Err(TriangulationError::EmptyOrder));
    assert!(matches!(
        lb_triangulate(&g, &[1, 2]),
        Err(TriangulationError::OrderMismatch(_))
    ));
}
