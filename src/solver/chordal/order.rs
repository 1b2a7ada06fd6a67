use crate::graph::{Graph, NodeId, VertexSet};
use crate::TriangulationError;

// Checks that `order` lists every node of `graph` exactly once and returns
// the corresponding node indices.
pub(crate) fn validate_order<N: NodeId>(
    graph: &Graph<N>,
    order: &[N],
) -> Result<Vec<usize>, TriangulationError> {
    if order.is_empty() && !graph.is_empty() {
        return Err(TriangulationError::EmptyOrder);
    }

    let mut seen = VertexSet::with_capacity(order.len());
    for node in order {
        let i = graph.index_of(node).map_err(|_| {
            TriangulationError::OrderMismatch(format!("{node:?} is not a node of the graph"))
        })?;
        if !seen.insert(i) {
            return Err(TriangulationError::OrderMismatch(format!(
                "{node:?} appears more than once"
            )));
        }
    }

    if let Some(missing) = graph.node_indices().find(|i| !seen.contains(i)) {
        return Err(TriangulationError::OrderMismatch(format!(
            "{:?} is missing",
            graph.label(missing)
        )));
    }

    Ok(seen.into_iter().collect())
}

#[test]
fn test_validate_order() {
    let g = Graph::from_edges([1, 2, 3], [(1, 2)]);

    assert_eq!(validate_order(&g, &[3, 1, 2]).unwrap(), vec![2, 0, 1]);
    assert_eq!(validate_order(&g, &[]), Err(TriangulationError::EmptyOrder));
    assert!(validate_order(&Graph::<i32>::new(), &[]).unwrap().is_empty());

    for bad in [&[1, 2][..], &[1, 2, 2, 3], &[1, 2, 3, 4]] {
        assert!(matches!(
            validate_order(&g, bad),
            Err(TriangulationError::OrderMismatch(_))
        ));
    }
    assert_eq!(
        validate_order(&g, &[1, 1, 2]),
        Err(TriangulationError::OrderMismatch("1 appears more than once".into()))
    );
}
