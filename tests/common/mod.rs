#![allow(dead_code)]

use chordify::graph::Graph;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Erdős–Rényi graph on nodes 0..n with edge probability p.
pub fn random_graph(n: usize, p: f64, seed: u64) -> Graph<usize> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut g = Graph::new();
    g.add_nodes_from(0..n);
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.random_bool(p) {
                g.add_edge(a, b);
            }
        }
    }
    g
}

/// The nodes of `g` in a seeded random order.
pub fn random_order(g: &Graph<usize>, seed: u64) -> Vec<usize> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut order: Vec<usize> = g.nodes().copied().collect();
    order.shuffle(&mut rng);
    order
}

pub fn cycle(n: usize) -> Graph<usize> {
    Graph::from_edges(0..n, (0..n).map(|i| (i, (i + 1) % n)))
}

/// true if every edge of `sub` is an edge of `sup`, and they share nodes
pub fn is_fill_of(sub: &Graph<usize>, sup: &Graph<usize>) -> bool {
    sub.node_count() == sup.node_count()
        && sub.nodes().all(|n| sup.contains_node(n))
        && sub.edges().all(|(a, b)| sup.has_edge(a, b))
}
