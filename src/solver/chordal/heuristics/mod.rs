use crate::graph::{Graph, NodeId};
use crate::TriangulationError;
use enum_dispatch::*;
use std::str::FromStr;
use std::sync::Arc;

mod fill;
mod weight;
mod width;
pub use fill::*;
pub use weight::*;
pub use width::*;

/// Caller-supplied scoring function for the `weight` heuristic.  It receives
/// the neighbour set of a candidate node, i.e. the clique that eliminating
/// the candidate would create, and returns its cost (typically the size of
/// the clique's state-space table).
pub type WeightFn<N> = Arc<dyn Fn(&[N]) -> f64 + Send + Sync>;

// All cost heuristics implement the following trait.  Costs are compared
// with `<`, so lower is better.

#[enum_dispatch]
pub(crate) trait CostHeuristic<N>
where
    N: NodeId,
{
    // cost of eliminating the live node index `v` from `graph` next
    fn cost(&self, graph: &Graph<N>, v: usize) -> f64;

    // tag used to select the heuristic in settings
    fn tag(&self) -> &'static str;
}

/// The cost heuristics used to rank elimination candidates.
///
/// * `Fill`: the number of edges eliminating the node would add, counted
///   as unordered pairs.  Always equal to the length of the edge list
///   [`Graph::eliminate`] returns for the same node.
/// * `Width`: the number of neighbours of the node, i.e. the size of the
///   clique its elimination creates.
/// * `Weight`: a caller-supplied [`WeightFn`] applied to the neighbour set.
#[enum_dispatch(CostHeuristic<N>)]
#[derive(Clone, Debug)]
pub enum Heuristic<N>
where
    N: NodeId,
{
    Fill(FillHeuristic),
    Width(WidthHeuristic),
    Weight(WeightHeuristic<N>),
}

impl<N> Heuristic<N>
where
    N: NodeId,
{
    pub fn fill() -> Self {
        FillHeuristic.into()
    }

    pub fn width() -> Self {
        WidthHeuristic.into()
    }

    pub fn weight<F>(scorer: F) -> Self
    where
        F: Fn(&[N]) -> f64 + Send + Sync + 'static,
    {
        WeightHeuristic::new(Arc::new(scorer)).into()
    }

    /// Resolves a heuristic tag.  `weight_fn` is required for `"weight"`
    /// and ignored otherwise.
    pub fn from_tag(tag: &str, weight_fn: Option<WeightFn<N>>) -> Result<Self, TriangulationError> {
        match tag {
            "fill" => Ok(Self::fill()),
            "width" => Ok(Self::width()),
            "weight" => weight_fn
                .map(|scorer| WeightHeuristic::new(scorer).into())
                .ok_or(TriangulationError::MissingWeightFunction),
            _ => Err(TriangulationError::InvalidHeuristic(tag.to_string())),
        }
    }

    /// the tag this heuristic is selected by
    pub fn name(&self) -> &'static str {
        self.tag()
    }
}

/// Parses `"fill"` or `"width"`.  `"weight"` fails with
/// [`MissingWeightFunction`](TriangulationError::MissingWeightFunction) since
/// no scorer can be given here; use [`Heuristic::from_tag`] instead.
impl<N> FromStr for Heuristic<N>
where
    N: NodeId,
{
    type Err = TriangulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s, None)
    }
}

/// Cost of eliminating `node` next, without modifying the graph.
pub fn cost<N: NodeId>(
    graph: &Graph<N>,
    node: &N,
    heuristic: &Heuristic<N>,
) -> Result<f64, TriangulationError> {
    let v = graph.index_of(node)?;
    Ok(heuristic.cost(graph, v))
}

#[test]
fn test_heuristic_tags() {
    assert_eq!("fill".parse::<Heuristic<u32>>().unwrap().name(), "fill");
    assert_eq!("width".parse::<Heuristic<u32>>().unwrap().name(), "width");

    assert_eq!(
        "bogus".parse::<Heuristic<u32>>().unwrap_err(),
        TriangulationError::InvalidHeuristic("bogus".to_string())
    );
    // tags are matched by value, and case sensitively
    assert!(Heuristic::<u32>::from_tag(&String::from("FILL"), None).is_err());

    assert_eq!(
        "weight".parse::<Heuristic<u32>>().unwrap_err(),
        TriangulationError::MissingWeightFunction
    );
    let scorer: WeightFn<u32> = Arc::new(|clique: &[u32]| clique.len() as f64);
    let h = Heuristic::from_tag("weight", Some(scorer)).unwrap();
    assert_eq!(h.name(), "weight");
}

#[test]
fn test_cost_unknown_node() {
    let g = Graph::from_edges([1, 2], [(1, 2)]);
    assert_eq!(
        cost(&g, &3, &Heuristic::fill()),
        Err(TriangulationError::UnknownNode("3".to_string()))
    );
}
