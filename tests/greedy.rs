mod common;

use chordify::graph::{is_chordal, Graph};
use chordify::solver::*;
use common::*;
use rstest::rstest;

fn heuristic(tag: &str) -> Heuristic<usize> {
    match tag {
        "weight" => Heuristic::weight(|clique: &[usize]| clique.iter().map(|&x| (x % 3 + 2) as f64).product()),
        _ => tag.parse().unwrap(),
    }
}

#[test]
fn greedy_path_needs_no_fill() {
    let g = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (3, 4)]);
    let h = greedy_triangulate(&g, 1, &Heuristic::fill());
    assert_eq!(h, g);
    assert_eq!(h.edge_count(), 3);
}

#[test]
fn greedy_star_fill_cost() {
    let g = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (2, 4)]);
    assert_eq!(cost(&g, &2, &Heuristic::fill()).unwrap(), 3.0);
    // a tree is chordal, so leaves go first and nothing is added
    assert_eq!(greedy_triangulate(&g, 1, &Heuristic::fill()), g);
}

#[test]
fn greedy_bogus_heuristic_is_an_error() {
    assert_eq!(
        "bogus".parse::<Heuristic<usize>>().unwrap_err(),
        chordify::TriangulationError::InvalidHeuristic("bogus".into())
    );
}

#[test]
fn greedy_does_not_mutate_input() {
    let g = cycle(6);
    let before = g.clone();
    let h = greedy_triangulate(&g, 2, &Heuristic::fill());
    assert_eq!(g, before);
    assert_eq!(h.edge_count(), g.edge_count() + 3);
}

#[rstest]
fn greedy_result_is_a_chordal_supergraph(
    #[values("fill", "width", "weight")] tag: &str,
    #[values(1, 2, 3)] depth: usize,
    #[values(1, 2, 3, 4)] seed: u64,
) {
    init_logging();
    let g = random_graph(9, 0.35, seed);
    let h = greedy_triangulate(&g, depth, &heuristic(tag));

    assert!(is_fill_of(&g, &h));
    assert!(is_chordal(&h));
}

#[rstest]
fn greedy_fill_heuristic_keeps_chordal_graphs(#[values(1, 2)] depth: usize, #[values(5, 6, 7)] seed: u64) {
    // triangulate once, then the result must come back unchanged
    let g = random_graph(10, 0.3, seed);
    let chordal = greedy_triangulate(&g, 1, &Heuristic::width());
    assert!(is_chordal(&chordal));

    let again = greedy_triangulate(&chordal, depth, &Heuristic::fill());
    assert_eq!(again, chordal);
}

#[test]
fn greedy_fill_matches_elimination_order() {
    // replaying the chosen order with the elimination game gives the same fill
    let g = random_graph(12, 0.3, 11);
    let t = Triangulator::with_heuristic(TriangulationSettings::default(), Heuristic::fill()).greedy(&g);

    let replay = elimination_game(&g, &t.order).unwrap();
    assert_eq!(replay, t.graph);
    assert_eq!(t.info.fill_count, t.fill.len());
    assert_eq!(t.graph.edge_count(), g.edge_count() + t.fill.len());
    assert_eq!(t.info.eliminations, g.node_count());
}

#[test]
fn greedy_parallel_and_serial_agree() {
    let g = random_graph(9, 0.4, 21);
    let settings = TriangulationSettingsBuilder::default()
        .depth(2)
        .build()
        .unwrap();
    let parallel = Triangulator::<usize>::new(settings.clone(), None).unwrap().greedy(&g);

    let serial_settings = TriangulationSettings {
        parallel: false,
        ..settings
    };
    let serial = Triangulator::<usize>::new(serial_settings, None).unwrap().greedy(&g);

    assert_eq!(parallel.order, serial.order);
    assert_eq!(parallel.fill, serial.fill);
}

#[test]
fn greedy_handles_empty_and_disconnected_graphs() {
    let empty = Graph::<usize>::new();
    assert!(greedy_triangulate(&empty, 3, &Heuristic::fill()).is_empty());

    // two disjoint 4-cycles need one chord each
    let mut g = cycle(4);
    g.add_edges_from([(10, 11), (11, 12), (12, 13), (13, 10)]);
    let h = greedy_triangulate(&g, 2, &Heuristic::fill());
    assert_eq!(h.edge_count(), g.edge_count() + 2);
    assert!(is_chordal(&h));
}

#[rstest]
fn eliminate_cliques_the_former_neighbourhood(#[values(1, 2, 3, 4, 5)] seed: u64) {
    let g = random_graph(10, 0.35, seed);
    for v in g.nodes() {
        let mut h = g.clone();
        let nbrs: Vec<usize> = g.neighbors(v).unwrap().copied().collect();
        let expected = cost(&g, v, &Heuristic::fill()).unwrap();

        let added = h.eliminate(v).unwrap();

        assert!(!h.contains_node(v));
        assert!(h.is_clique(&nbrs).unwrap());
        assert_eq!(added.len() as f64, expected);
        assert_eq!(h.edge_count(), g.edge_count() - nbrs.len() + added.len());
        for (a, b) in &added {
            assert!(!g.has_edge(a, b));
        }
    }
}
