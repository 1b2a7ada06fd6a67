use crate::graph::{Graph, NodeId};
use crate::solver::chordal::{
    elimination_game_search, greedy_search, lb_search, Heuristic, WeightFn,
};
use crate::solver::{Triangulation, TriangulationSettings};
use crate::TriangulationError;
use log::Level;

/// A configured triangulation front end.
///
/// The heuristic tag in the settings is resolved once, on construction.
///
/// ```
/// use chordify::graph::Graph;
/// use chordify::solver::*;
///
/// let settings = TriangulationSettingsBuilder::default()
///     .heuristic("width".to_string())
///     .depth(2)
///     .build()
///     .unwrap();
/// let triangulator = Triangulator::new(settings, None).unwrap();
///
/// let g = Graph::from_edges(1..=5, [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
/// let t = triangulator.greedy(&g);
/// assert_eq!(t.fill_count(), 2);
/// assert!(t.is_chordal());
/// ```
#[derive(Debug, Clone)]
pub struct Triangulator<N: NodeId> {
    settings: TriangulationSettings,
    heuristic: Heuristic<N>,
}

impl<N: NodeId> Triangulator<N> {
    /// Validates `settings` and resolves its heuristic.  `weight_fn` is
    /// required when the heuristic is `"weight"`.
    pub fn new(
        settings: TriangulationSettings,
        weight_fn: Option<WeightFn<N>>,
    ) -> Result<Self, TriangulationError> {
        settings.validate()?;
        let heuristic = Heuristic::from_tag(&settings.heuristic, weight_fn)?;
        Ok(Self {
            settings,
            heuristic,
        })
    }

    /// Uses `heuristic` in place of the tag in `settings`.
    pub fn with_heuristic(mut settings: TriangulationSettings, heuristic: Heuristic<N>) -> Self {
        settings.heuristic = heuristic.name().to_string();
        Self {
            settings,
            heuristic,
        }
    }

    pub fn settings(&self) -> &TriangulationSettings {
        &self.settings
    }

    pub fn heuristic(&self) -> &Heuristic<N> {
        &self.heuristic
    }

    /// Greedy lookahead triangulation, see
    /// [`greedy_triangulate`](crate::solver::greedy_triangulate).
    pub fn greedy(&self, graph: &Graph<N>) -> Triangulation<N> {
        let t = greedy_search(
            graph,
            self.settings.depth,
            &self.heuristic,
            self.settings.parallel,
        );
        self.report("greedy", &t);
        t
    }

    /// LB-triangulation along `order`, see
    /// [`lb_triangulate`](crate::solver::lb_triangulate).  The heuristic is
    /// not used.
    pub fn lb(&self, graph: &Graph<N>, order: &[N]) -> Result<Triangulation<N>, TriangulationError> {
        let t = lb_search(graph, order)?;
        self.report("lb", &t);
        Ok(t)
    }

    /// Elimination game along `order`, see
    /// [`elimination_game`](crate::solver::elimination_game).
    pub fn elimination_game(
        &self,
        graph: &Graph<N>,
        order: &[N],
    ) -> Result<Triangulation<N>, TriangulationError> {
        let t = elimination_game_search(graph, order)?;
        self.report("elimination game", &t);
        Ok(t)
    }

    fn report(&self, method: &str, t: &Triangulation<N>) {
        let level = if self.settings.verbose {
            Level::Info
        } else {
            Level::Debug
        };
        log::log!(
            level,
            "{method} triangulation ({}, depth {}): {} nodes, {} fill edges, width {}, {:.3e}s",
            self.heuristic.name(),
            self.settings.depth,
            t.info.eliminations,
            t.info.fill_count,
            t.info.width,
            t.info.solve_time
        );
    }
}

#[test]
fn test_triangulator_construction() {
    let settings = TriangulationSettings {
        heuristic: "weight".to_string(),
        ..TriangulationSettings::default()
    };
    assert_eq!(
        Triangulator::<u32>::new(settings.clone(), None).unwrap_err(),
        TriangulationError::MissingWeightFunction
    );

    let scorer: WeightFn<u32> = std::sync::Arc::new(|clique: &[u32]| clique.len() as f64);
    let t = Triangulator::new(settings, Some(scorer)).unwrap();
    assert_eq!(t.heuristic().name(), "weight");

    let bad = TriangulationSettings {
        heuristic: "bogus".to_string(),
        ..TriangulationSettings::default()
    };
    assert!(matches!(
        Triangulator::<u32>::new(bad, None),
        Err(TriangulationError::Settings(_))
    ));

    let t = Triangulator::<u32>::with_heuristic(TriangulationSettings::default(), Heuristic::width());
    assert_eq!(t.settings().heuristic, "width");
}
