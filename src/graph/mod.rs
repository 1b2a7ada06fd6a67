//! Undirected simple graphs with node elimination.
//!
//! Nodes are opaque, hashable identifiers.  Internally every node is interned
//! to a dense index on first insertion, and adjacency is held as one
//! [`IndexSet`] of indices per node.  The interning table is shared between
//! clones, so taking a snapshot of a graph copies only the adjacency lists.
//! This is what keeps the recursive lookahead search cheap.

use crate::TriangulationError;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

mod chordal;
mod disjoint_set_union;

pub use chordal::*;
pub(crate) use disjoint_set_union::*;

pub(crate) type VertexSet = IndexSet<usize>;

/// Requirements on node identifiers.
///
/// Blanket implemented for every type satisfying the bounds, e.g. integers,
/// `char`, `String` or `&'static str`.
pub trait NodeId: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug + Send + Sync {}

/// An undirected simple graph (no self-loops, no multi-edges).
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId> {
    // node labels, index i <-> labels[i].  Shared between snapshots
    labels: Arc<IndexSet<N>>,
    // adjacency of each interned node, `None` once the node is removed
    adjacency: Vec<Option<VertexSet>>,
    n_nodes: usize,
    n_edges: usize,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            labels: Arc::new(IndexSet::new()),
            adjacency: Vec::new(),
            n_nodes: 0,
            n_edges: 0,
        }
    }

    /// Creates a graph from a node list and an edge list.  Edge endpoints
    /// that are not in `nodes` are added as nodes; self-loops are dropped.
    pub fn from_edges<I, E>(nodes: I, edges: E) -> Self
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N)>,
    {
        let mut g = Self::new();
        g.add_nodes_from(nodes);
        g.add_edges_from(edges);
        g
    }

    /// number of nodes
    pub fn node_count(&self) -> usize {
        self.n_nodes
    }

    /// number of edges
    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    pub fn is_empty(&self) -> bool {
        self.n_nodes == 0
    }

    /// Adds a node.  Adding a node that is already present is a no-op.
    pub fn add_node(&mut self, node: N) {
        self.intern(node);
    }

    pub fn add_nodes_from<I: IntoIterator<Item = N>>(&mut self, nodes: I) {
        for n in nodes {
            self.add_node(n);
        }
    }

    /// Adds the edge `{a,b}`, adding missing endpoints as nodes.  Returns
    /// `true` if the edge is new.  Self-loops are ignored and return `false`.
    pub fn add_edge(&mut self, a: N, b: N) -> bool {
        if a == b {
            self.add_node(a);
            return false;
        }
        let ia = self.intern(a);
        let ib = self.intern(b);
        self.add_edge_index(ia, ib)
    }

    pub fn add_edges_from<E: IntoIterator<Item = (N, N)>>(&mut self, edges: E) {
        for (a, b) in edges {
            self.add_edge(a, b);
        }
    }

    /// Removes the edge `{a,b}`.  Returns `true` if the edge was present.
    pub fn remove_edge(&mut self, a: &N, b: &N) -> Result<bool, TriangulationError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        Ok(self.remove_edge_index(ia, ib))
    }

    /// Removes a node and all of its incident edges.
    pub fn remove_node(&mut self, node: &N) -> Result<(), TriangulationError> {
        let i = self.index_of(node)?;
        self.remove_node_index(i);
        Ok(())
    }

    /// Removes several nodes.  Fails without modifying the graph if any
    /// node is absent.
    pub fn remove_nodes_from(&mut self, nodes: &[N]) -> Result<(), TriangulationError> {
        let indices = nodes
            .iter()
            .map(|n| self.index_of(n))
            .collect::<Result<Vec<_>, _>>()?;
        for i in indices {
            // duplicates in `nodes` were already removed
            if self.is_alive(i) {
                self.remove_node_index(i);
            }
        }
        Ok(())
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.index_of(node).is_ok()
    }

    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Ok(ia), Ok(ib)) => self.has_edge_index(ia, ib),
            _ => false,
        }
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.node_indices().map(|i| self.label(i))
    }

    /// Edges, each reported once.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.node_indices().flat_map(move |i| {
            self.neighbor_indices(i)
                .iter()
                .filter(move |&&j| i < j)
                .map(move |&j| (self.label(i), self.label(j)))
        })
    }

    /// Neighbours of `node`, in the order their edges were added.
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = &N> + '_, TriangulationError> {
        let i = self.index_of(node)?;
        Ok(self.neighbor_indices(i).iter().map(|&j| self.label(j)))
    }

    pub fn degree(&self, node: &N) -> Result<usize, TriangulationError> {
        let i = self.index_of(node)?;
        Ok(self.neighbor_indices(i).len())
    }

    /// true if the given nodes are pairwise adjacent
    pub fn is_clique(&self, nodes: &[N]) -> Result<bool, TriangulationError> {
        let indices = nodes
            .iter()
            .map(|n| self.index_of(n))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(indices
            .iter()
            .tuple_combinations()
            .all(|(&a, &b)| a == b || self.has_edge_index(a, b)))
    }

    /// Connected components, each listed in node insertion order.
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        self.labelled_components(&VertexSet::new())
    }

    /// Connected components of the subgraph induced on all nodes except
    /// `excluded`.  The graph itself is not modified.
    pub fn components_without(&self, excluded: &[N]) -> Result<Vec<Vec<N>>, TriangulationError> {
        let excluded = excluded
            .iter()
            .map(|n| self.index_of(n))
            .collect::<Result<VertexSet, _>>()?;
        Ok(self.labelled_components(&excluded))
    }

    /// Eliminates `node`: connects all of its neighbours pairwise, then
    /// removes it.  Returns the edges that were added, which is empty if the
    /// neighbourhood was already a clique.
    pub fn eliminate(&mut self, node: &N) -> Result<Vec<(N, N)>, TriangulationError> {
        let i = self.index_of(node)?;
        let added = self.eliminate_index(i);
        Ok(self.label_edges(&added))
    }

    fn labelled_components(&self, excluded: &VertexSet) -> Vec<Vec<N>> {
        self.components_excluding_index(excluded)
            .into_iter()
            .map(|cc| cc.into_iter().map(|i| self.label(i).clone()).collect())
            .collect()
    }

    // ---------------------------------------------------------
    // index-level interface used by the solver
    // ---------------------------------------------------------

    fn intern(&mut self, node: N) -> usize {
        if let Some(i) = self.labels.get_index_of(&node) {
            if self.adjacency[i].is_none() {
                self.adjacency[i] = Some(VertexSet::new());
                self.n_nodes += 1;
            }
            return i;
        }
        let (i, _) = Arc::make_mut(&mut self.labels).insert_full(node);
        self.adjacency.push(Some(VertexSet::new()));
        self.n_nodes += 1;
        i
    }

    pub(crate) fn index_of(&self, node: &N) -> Result<usize, TriangulationError> {
        match self.labels.get_index_of(node) {
            Some(i) if self.is_alive(i) => Ok(i),
            _ => Err(TriangulationError::unknown_node(node)),
        }
    }

    pub(crate) fn label(&self, i: usize) -> &N {
        &self.labels[i]
    }

    pub(crate) fn label_edges(&self, edges: &[(usize, usize)]) -> Vec<(N, N)> {
        edges
            .iter()
            .map(|&(a, b)| (self.label(a).clone(), self.label(b).clone()))
            .collect()
    }

    pub(crate) fn is_alive(&self, i: usize) -> bool {
        matches!(self.adjacency.get(i), Some(Some(_)))
    }

    // size of the index space, including removed nodes
    pub(crate) fn capacity(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter_map(|(i, nbrs)| nbrs.as_ref().map(|_| i))
    }

    // panics on a removed node.  Callers only pass live indices
    pub(crate) fn neighbor_indices(&self, i: usize) -> &VertexSet {
        match &self.adjacency[i] {
            Some(nbrs) => nbrs,
            None => panic!("node index {i} has been removed"),
        }
    }

    fn neighbors_mut(&mut self, i: usize) -> &mut VertexSet {
        match &mut self.adjacency[i] {
            Some(nbrs) => nbrs,
            None => panic!("node index {i} has been removed"),
        }
    }

    pub(crate) fn has_edge_index(&self, a: usize, b: usize) -> bool {
        self.neighbor_indices(a).contains(&b)
    }

    pub(crate) fn add_edge_index(&mut self, a: usize, b: usize) -> bool {
        if a == b || self.has_edge_index(a, b) {
            return false;
        }
        self.neighbors_mut(a).insert(b);
        self.neighbors_mut(b).insert(a);
        self.n_edges += 1;
        true
    }

    fn remove_edge_index(&mut self, a: usize, b: usize) -> bool {
        // shift_remove keeps the remaining neighbours in insertion order
        if !self.neighbors_mut(a).shift_remove(&b) {
            return false;
        }
        self.neighbors_mut(b).shift_remove(&a);
        self.n_edges -= 1;
        true
    }

    pub(crate) fn remove_node_index(&mut self, i: usize) {
        let Some(nbrs) = self.adjacency[i].take() else {
            return;
        };
        for &j in nbrs.iter() {
            self.neighbors_mut(j).shift_remove(&i);
        }
        self.n_edges -= nbrs.len();
        self.n_nodes -= 1;
    }

    /// Number of edges `eliminate_index(i)` would add, counted as unordered
    /// pairs.  Does not modify the graph.
    pub(crate) fn fill_in_count(&self, i: usize) -> usize {
        self.neighbor_indices(i)
            .iter()
            .tuple_combinations()
            .filter(|&(&a, &b)| !self.has_edge_index(a, b))
            .count()
    }

    pub(crate) fn eliminate_index(&mut self, i: usize) -> Vec<(usize, usize)> {
        let nbrs: Vec<usize> = self.neighbor_indices(i).iter().copied().collect();
        let mut added = Vec::new();
        for (&a, &b) in nbrs.iter().tuple_combinations() {
            if self.add_edge_index(a, b) {
                added.push((a, b));
            }
        }
        self.remove_node_index(i);
        added
    }

    // Components of the graph with the `excluded` nodes (and their edges)
    // removed.  Components and their members follow index order.
    pub(crate) fn components_excluding_index(&self, excluded: &VertexSet) -> Vec<Vec<usize>> {
        let mut dsu = DisjointSetUnion::new(self.capacity());
        let kept = |i: &usize| !excluded.contains(i);

        for i in self.node_indices().filter(kept) {
            for &j in self.neighbor_indices(i).iter().filter(|&&j| kept(&j)) {
                if i < j {
                    dsu.union(i, j);
                }
            }
        }

        let mut components: IndexMap<usize, Vec<usize>> = IndexMap::new();
        for i in self.node_indices().filter(kept) {
            components.entry(dsu.find(i)).or_default().push(i);
        }
        components.into_values().collect()
    }
}

/// Graphs are equal if they have the same node set and the same edge set,
/// regardless of insertion order.
impl<N: NodeId> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        if self.n_nodes != other.n_nodes || self.n_edges != other.n_edges {
            return false;
        }
        self.node_indices().all(|i| {
            let Ok(j) = other.index_of(self.label(i)) else {
                return false;
            };
            let nbrs = other.neighbor_indices(j);
            nbrs.len() == self.neighbor_indices(i).len()
                && self
                    .neighbor_indices(i)
                    .iter()
                    .all(|&k| matches!(other.index_of(self.label(k)), Ok(l) if nbrs.contains(&l)))
        })
    }
}

impl<N: NodeId> Eq for Graph<N> {}

// ---------------------------------------------------------
// tests
// ---------------------------------------------------------

#[cfg(test)]
fn star() -> Graph<i32> {
    Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (2, 4)])
}

#[test]
fn test_add_and_remove() {
    let mut g = star();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 3);

    // duplicates and self loops are ignored
    assert!(!g.add_edge(3, 2));
    assert!(!g.add_edge(1, 1));
    assert_eq!(g.edge_count(), 3);

    g.remove_node(&2).unwrap();
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 0);
    assert!(!g.contains_node(&2));
    assert_eq!(g.remove_node(&2), Err(TriangulationError::UnknownNode("2".into())));

    // a removed node can be re-added
    g.add_edge(2, 4);
    assert_eq!(g.degree(&2).unwrap(), 1);
    assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn test_remove_edge() {
    let mut g = star();
    assert!(g.remove_edge(&3, &2).unwrap());
    assert!(!g.remove_edge(&3, &2).unwrap());
    assert!(g.remove_edge(&3, &7).is_err());
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.neighbors(&2).unwrap().copied().collect::<Vec<_>>(), vec![1, 4]);
}

#[test]
fn test_eliminate() {
    let mut g = star();
    let added = g.eliminate(&2).unwrap();
    assert_eq!(added, vec![(1, 3), (1, 4), (3, 4)]);
    assert!(!g.contains_node(&2));
    assert!(g.is_clique(&[1, 3, 4]).unwrap());

    // neighbourhood already a clique
    assert!(g.eliminate(&1).unwrap().is_empty());
    assert_eq!(g.edge_count(), 1);

    assert!(matches!(
        g.eliminate(&9),
        Err(TriangulationError::UnknownNode(_))
    ));
}

#[test]
fn test_fill_in_count() {
    let g = star();
    assert_eq!(g.fill_in_count(g.index_of(&2).unwrap()), 3);
    assert_eq!(g.fill_in_count(g.index_of(&1).unwrap()), 0);
}

#[test]
fn test_components() {
    let g = Graph::from_edges(1..=6, [(1, 2), (2, 3), (4, 5)]);
    assert_eq!(
        g.connected_components(),
        vec![vec![1, 2, 3], vec![4, 5], vec![6]]
    );
    assert_eq!(
        g.components_without(&[2, 5]).unwrap(),
        vec![vec![1], vec![3], vec![4], vec![6]]
    );
    assert!(g.components_without(&[7]).is_err());
}

#[test]
fn test_snapshots_are_independent() {
    let g = star();
    let mut h = g.clone();
    h.eliminate(&2).unwrap();
    h.add_edge(7, 8);
    assert_eq!(g, star());
    assert!(!g.contains_node(&7));
    assert!(h.contains_node(&7));
}

#[test]
fn test_equality_ignores_order() {
    let g = Graph::from_edges([1, 2, 3], [(1, 2), (2, 3)]);
    let h = Graph::from_edges([3, 2, 1], [(3, 2), (1, 2)]);
    assert_eq!(g, h);
    let k = Graph::from_edges([3, 2, 1], [(3, 1), (1, 2)]);
    assert_ne!(g, k);
}
