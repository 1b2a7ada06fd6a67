use super::order::validate_order;
use crate::graph::{Graph, NodeId};
use crate::solver::{Triangulation, TriangulationInfo};
use crate::TriangulationError;
use std::time::Instant;

/// Triangulates `graph` by eliminating its nodes in the fixed `order`, adding
/// the fill edges of each elimination to a copy of `graph`.
///
/// This is the classical elimination game.  Eliminating a perfect
/// elimination ordering adds nothing; other orders generally give more fill
/// than [`lb_triangulate`](super::lb_triangulate) on the same order.
pub fn elimination_game<N: NodeId>(
    graph: &Graph<N>,
    order: &[N],
) -> Result<Graph<N>, TriangulationError> {
    Ok(elimination_game_search(graph, order)?.graph)
}

pub(crate) fn elimination_game_search<N: NodeId>(
    graph: &Graph<N>,
    order: &[N],
) -> Result<Triangulation<N>, TriangulationError> {
    let start = Instant::now();
    let order_idx = validate_order(graph, order)?;

    let mut working = graph.clone();
    let mut triangulated = graph.clone();
    let mut info = TriangulationInfo::new();
    let mut fill = Vec::new();

    for v in order_idx {
        let degree = working.neighbor_indices(v).len();
        let added = working.eliminate_index(v);
        info.record_elimination(degree, added.len());

        for &(a, b) in &added {
            triangulated.add_edge_index(a, b);
        }
        fill.extend(working.label_edges(&added));
    }
    info.solve_time = start.elapsed().as_secs_f64();

    Ok(Triangulation {
        graph: triangulated,
        fill,
        order: order.to_vec(),
        info,
    })
}

#[test]
fn test_elimination_game() {
    // star centred on 2: eliminating the centre first fills its neighbourhood
    let g = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (2, 4)]);
    let t = elimination_game_search(&g, &[2, 1, 3, 4]).unwrap();
    assert_eq!(t.fill, vec![(1, 3), (1, 4), (3, 4)]);
    assert_eq!(t.info.width, 3);

    // leaves first adds nothing
    let t = elimination_game_search(&g, &[1, 3, 4, 2]).unwrap();
    assert!(t.fill.is_empty());
    assert_eq!(t.graph, g);
    assert_eq!(t.info.width, 1);
}
