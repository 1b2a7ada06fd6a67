mod common;

use chordify::graph::{chordal_width, Graph};
use chordify::solver::*;
use chordify::TriangulationError;
use common::*;
use std::collections::HashMap;
use std::sync::Arc;

#[test]
fn triangulator_reports_statistics() {
    init_logging();
    let settings = TriangulationSettingsBuilder::default()
        .depth(2)
        .verbose(true)
        .build()
        .unwrap();
    let triangulator = Triangulator::<usize>::new(settings, None).unwrap();

    let g = cycle(7);
    let t = triangulator.greedy(&g);
    assert_eq!(t.fill_count(), 4);
    assert_eq!(t.info.fill_count, 4);
    assert_eq!(t.info.eliminations, 7);
    assert_eq!(t.info.width, 2);
    assert_eq!(chordal_width(&t.graph), Some(t.info.width));
    assert!(t.is_chordal());

    let order: Vec<usize> = (0..7).rev().collect();
    let t = triangulator.lb(&g, &order).unwrap();
    assert_eq!(t.order, order);
    assert_eq!(t.fill_count(), 4);
    assert_eq!(t.info.width, 2);

    let t = triangulator.elimination_game(&g, &order).unwrap();
    assert_eq!(t.fill_count(), 4);
}

#[test]
fn triangulator_weight_heuristic() {
    // variable cardinalities of a small Markov network
    let cards: HashMap<&'static str, f64> =
        [("a", 2.0), ("b", 10.0), ("c", 2.0), ("d", 10.0)].into();
    let scorer: WeightFn<&'static str> =
        Arc::new(move |clique: &[&'static str]| -> f64 {
            clique.iter().map(|x| cards[x]).product()
        });

    let settings = TriangulationSettingsBuilder::default()
        .heuristic("weight".to_string())
        .build()
        .unwrap();
    let triangulator = Triangulator::new(settings, Some(scorer)).unwrap();

    // 4-cycle a-b-c-d: eliminating a or c costs 100, b or d costs 4,
    // so b goes first and the chord joins a and c
    let g = Graph::from_edges(
        ["a", "b", "c", "d"],
        [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
    );
    let t = triangulator.greedy(&g);
    assert_eq!(t.order[0], "b");
    assert_eq!(t.fill, vec![("a", "c")]);
}

#[test]
fn triangulator_rejects_bad_configuration() {
    let settings = TriangulationSettings {
        heuristic: "weight".to_string(),
        ..TriangulationSettings::default()
    };
    assert_eq!(
        Triangulator::<usize>::new(settings, None).unwrap_err(),
        TriangulationError::MissingWeightFunction
    );

    assert!(TriangulationSettingsBuilder::default()
        .heuristic("bogus".to_string())
        .build()
        .is_err());
}

#[cfg(feature = "serde")]
#[test]
fn triangulator_settings_serde() {
    let settings = TriangulationSettingsBuilder::default()
        .heuristic("width".to_string())
        .depth(3)
        .build()
        .unwrap();
    let json = serde_json::to_string(&settings).unwrap();
    let back: TriangulationSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);

    // missing fields take their defaults
    let partial: TriangulationSettings = serde_json::from_str(r#"{"depth": 2}"#).unwrap();
    assert_eq!(partial.heuristic, "fill");
    assert_eq!(partial.depth, 2);
}
