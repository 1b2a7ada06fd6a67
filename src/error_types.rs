use crate::solver::SettingsError;
use thiserror::Error;

/// Error type returned by graph mutation and triangulation operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriangulationError {
    /// An operation referenced a node that is not in the graph
    #[error("Node {0} is not present in the graph")]
    UnknownNode(String),
    /// A heuristic tag that is not one of `fill`, `width` or `weight`
    #[error("Unrecognized heuristic \"{0}\"")]
    InvalidHeuristic(String),
    /// An empty elimination order was supplied for a nonempty graph
    #[error("Elimination order is empty")]
    EmptyOrder,
    /// The elimination order is not a permutation of the graph's nodes
    #[error("Elimination order does not match the graph ({0})")]
    OrderMismatch(String),
    /// The `weight` heuristic was requested without a scoring function
    #[error("The weight heuristic requires a weight function")]
    MissingWeightFunction,
    /// Invalid triangulation settings
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl TriangulationError {
    pub(crate) fn unknown_node<N: std::fmt::Debug>(node: &N) -> Self {
        TriangulationError::UnknownNode(format!("{node:?}"))
    }
}
