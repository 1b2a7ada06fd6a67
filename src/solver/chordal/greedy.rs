use super::heuristics::Heuristic;
use super::lookahead::lookahead_cost_index;
use crate::graph::{is_chordal, Graph, NodeId};
use crate::solver::{Triangulation, TriangulationInfo};
use log::{debug, trace};
use std::iter::zip;
use std::time::Instant;

/// Triangulates `graph` by greedy elimination.
///
/// At each step every remaining node is scored with
/// [`lookahead_cost`](super::lookahead_cost) at the given `depth`, and the
/// node with the strictly smallest cost is eliminated.  Ties go to the node
/// inserted into `graph` first.  Returns a copy of `graph` with all fill edges
/// added; the input is not modified.
///
/// With the `parallel` feature, candidate costs are evaluated on the rayon
/// thread pool when `depth > 1`.
pub fn greedy_triangulate<N: NodeId>(
    graph: &Graph<N>,
    depth: usize,
    heuristic: &Heuristic<N>,
) -> Graph<N> {
    greedy_search(graph, depth, heuristic, true).graph
}

pub(crate) fn greedy_search<N: NodeId>(
    graph: &Graph<N>,
    depth: usize,
    heuristic: &Heuristic<N>,
    parallel: bool,
) -> Triangulation<N> {
    let start = Instant::now();

    // `working` is consumed by elimination, fill goes into `triangulated`.
    // Both are snapshots of `graph` and share its node indices
    let mut working = graph.clone();
    let mut triangulated = graph.clone();
    let mut info = TriangulationInfo::new();
    let mut fill = Vec::new();
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some((v, cost)) = select_candidate(&working, depth, heuristic, parallel) {
        let degree = working.neighbor_indices(v).len();
        let added = working.eliminate_index(v);

        debug!(
            "eliminated {:?} at cost {cost} ({} fill edges)",
            working.label(v),
            added.len()
        );
        info.record_elimination(degree, added.len());
        order.push(working.label(v).clone());

        for &(a, b) in &added {
            triangulated.add_edge_index(a, b);
        }
        fill.extend(working.label_edges(&added));
    }

    debug_assert!(is_chordal(&triangulated));
    info.solve_time = start.elapsed().as_secs_f64();

    Triangulation {
        graph: triangulated,
        fill,
        order,
        info,
    }
}

// The first node (in index order) of strictly minimal lookahead cost, or
// `None` once the graph is empty.  NaN costs rank as +inf.
fn select_candidate<N: NodeId>(
    graph: &Graph<N>,
    depth: usize,
    heuristic: &Heuristic<N>,
    parallel: bool,
) -> Option<(usize, f64)> {
    let candidates: Vec<usize> = graph.node_indices().collect();
    let costs = evaluate_costs(graph, &candidates, depth, heuristic, parallel);

    let mut best: Option<(usize, f64)> = None;
    for (&v, &cost) in zip(&candidates, &costs) {
        let cost = if cost.is_nan() { f64::INFINITY } else { cost };
        trace!("candidate {:?} has cost {cost}", graph.label(v));
        match best {
            Some((_, min_cost)) if cost >= min_cost => {}
            _ => best = Some((v, cost)),
        }
    }
    best
}

// lookahead costs of `candidates`, in the same order
fn evaluate_costs<N: NodeId>(
    graph: &Graph<N>,
    candidates: &[usize],
    depth: usize,
    heuristic: &Heuristic<N>,
    parallel: bool,
) -> Vec<f64> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "parallel")] {
            if parallel && depth > 1 && candidates.len() > 1 {
                use rayon::prelude::*;
                return candidates
                    .par_iter()
                    .map(|&v| lookahead_cost_index(graph, v, depth, heuristic))
                    .collect();
            }
        } else {
            let _ = parallel;
        }
    }

    candidates
        .iter()
        .map(|&v| lookahead_cost_index(graph, v, depth, heuristic))
        .collect()
}

#[test]
fn test_greedy_path_is_unchanged() {
    let g = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (3, 4)]);
    let h = greedy_triangulate(&g, 1, &Heuristic::fill());
    assert_eq!(h, g);
}

#[test]
fn test_greedy_tie_break_is_first_inserted() {
    // every node of a chordless 4-cycle has fill cost 1, so node 'c'
    // (inserted first) goes first and the chord joins its neighbours
    let g = Graph::from_edges(
        ['c', 'a', 'b', 'd'],
        [('a', 'b'), ('b', 'c'), ('c', 'd'), ('d', 'a')],
    );
    let t = greedy_search(&g, 1, &Heuristic::fill(), false);
    assert_eq!(t.order[0], 'c');
    assert_eq!(t.fill, vec![('b', 'd')]);
    assert_eq!(t.order, vec!['c', 'a', 'b', 'd']);
    assert_eq!(t.info.eliminations, 4);
    assert_eq!(t.info.width, 2);
}

#[test]
fn test_greedy_nan_weight_is_last_resort() {
    let g = Graph::from_edges([1, 2, 3], [(1, 2), (2, 3)]);
    let h = Heuristic::weight(|clique: &[i32]| if clique.len() == 2 { f64::NAN } else { 1.0 });
    let t = greedy_search(&g, 1, &h, false);
    assert_eq!(t.order[0], 1);
    assert!(t.fill.is_empty());
}
