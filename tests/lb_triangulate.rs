mod common;

use chordify::graph::{is_chordal, perfect_elimination_order, Graph};
use chordify::solver::*;
use chordify::TriangulationError;
use common::*;
use rstest::rstest;

#[test]
fn lb_four_cycle_gets_one_chord() {
    let g = cycle(4);
    let h = lb_triangulate(&g, &[0, 1, 2, 3]).unwrap();
    assert_eq!(h.edge_count(), 5);
    assert!(h.has_edge(&1, &3));
    assert!(is_chordal(&h));
}

#[rstest]
fn lb_result_is_a_chordal_supergraph(
    #[values(8, 12)] n: usize,
    #[values(0.2, 0.4)] p: f64,
    #[values(1, 2, 3)] seed: u64,
) {
    init_logging();
    let g = random_graph(n, p, seed);
    let order = random_order(&g, seed + 100);
    let h = lb_triangulate(&g, &order).unwrap();

    assert!(is_fill_of(&g, &h));
    assert!(is_chordal(&h));
}

#[rstest]
fn lb_fill_is_inclusion_minimal(#[values(1, 2, 3, 4, 5)] seed: u64) {
    // a triangulation is minimal iff dropping any single fill edge breaks
    // chordality
    let g = random_graph(9, 0.3, seed);
    let order = random_order(&g, seed);
    let t = Triangulator::<usize>::new(TriangulationSettings::default(), None)
        .unwrap()
        .lb(&g, &order)
        .unwrap();

    for (a, b) in &t.fill {
        let mut reduced = t.graph.clone();
        assert!(reduced.remove_edge(a, b).unwrap());
        assert!(!is_chordal(&reduced), "fill edge {a}-{b} is redundant");
    }
}

#[rstest]
fn lb_keeps_chordal_graphs(#[values(1, 2, 3)] seed: u64) {
    let g = random_graph(10, 0.35, seed);
    let chordal = greedy_triangulate(&g, 1, &Heuristic::fill());

    // with a perfect elimination ordering, and with any other order
    let peo = perfect_elimination_order(&chordal).unwrap();
    assert_eq!(lb_triangulate(&chordal, &peo).unwrap(), chordal);

    let order = random_order(&chordal, seed);
    assert_eq!(lb_triangulate(&chordal, &order).unwrap(), chordal);
}

#[test]
fn lb_minimal_on_long_cycle() {
    // every minimal triangulation of an n-cycle has n - 3 chords
    let g = cycle(8);
    let order: Vec<usize> = (0..8).collect();
    let h = lb_triangulate(&g, &order).unwrap();
    assert_eq!(h.edge_count(), 8 + 5);
}

#[test]
fn lb_order_validation() {
    let g = Graph::from_edges(['a', 'b', 'c'], [('a', 'b'), ('b', 'c')]);

    assert_eq!(lb_triangulate(&g, &[]), Err(TriangulationError::EmptyOrder));
    assert_eq!(
        lb_triangulate(&g, &['a', 'b']),
        Err(TriangulationError::OrderMismatch("'c' is missing".into()))
    );
    assert_eq!(
        lb_triangulate(&g, &['a', 'b', 'c', 'a']),
        Err(TriangulationError::OrderMismatch("'a' appears more than once".into()))
    );
    assert_eq!(
        lb_triangulate(&g, &['a', 'b', 'z']),
        Err(TriangulationError::OrderMismatch("'z' is not a node of the graph".into()))
    );

    // an empty graph takes an empty order
    assert!(lb_triangulate(&Graph::<char>::new(), &[]).unwrap().is_empty());
}

// Separators taken from the input graph's adjacency rather than the working
// graph's.  Fill edges persist in the working graph between steps.
fn lb_with_input_adjacency(g: &Graph<usize>, order: &[usize]) -> Graph<usize> {
    let mut h = g.clone();
    for v in order {
        let mut closed: Vec<usize> = h.neighbors(v).unwrap().copied().collect();
        closed.push(*v);

        for component in h.components_without(&closed).unwrap() {
            let touching: Vec<usize> = closed
                .iter()
                .copied()
                .filter(|x| g.neighbors(x).unwrap().any(|u| component.contains(u)))
                .collect();
            for (i, &a) in touching.iter().enumerate() {
                for &b in &touching[i + 1..] {
                    h.add_edge(a, b);
                }
            }
        }
    }
    h
}

#[rstest]
fn lb_separators_agree_with_input_adjacency(
    #[values(6, 8, 10)] n: usize,
    #[values(1, 2, 3, 4, 5, 6, 7, 8, 9, 10)] seed: u64,
) {
    let g = random_graph(n, 0.3, seed);
    let order = random_order(&g, seed + 50);

    let h = lb_triangulate(&g, &order).unwrap();
    assert_eq!(lb_with_input_adjacency(&g, &order), h);
    assert!(is_chordal(&h));
}
