// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workouts saved by earlier releases still load.

use std::fs;
use workout_tracker::models::{Coords, WorkoutKind};
use workout_tracker::services::WorkoutStore;

fn load_fixture() -> WorkoutStore {
    let blob = fs::read("tests/fixtures/legacy_workouts.json").expect("Failed to read fixture");
    let mut store = WorkoutStore::new();
    store.hydrate(&blob).expect("Legacy blob should hydrate");
    store
}

#[test]
fn test_legacy_workouts_load_in_order() {
    let store = load_fixture();
    let ids: Vec<&str> = store.all().iter().map(|w| w.id().as_str()).collect();
    assert_eq!(ids, vec!["8453565118", "8665202950"]);
}

#[test]
fn test_legacy_fields_map_onto_variants() {
    let store = load_fixture();

    let run = store.find_by_id(&"8453565118".into()).unwrap();
    assert_eq!(run.kind(), WorkoutKind::Running);
    assert_eq!(run.coords(), Coords::new(51.50735, -0.12776));
    assert_eq!(run.duration_min(), 24.0);
    assert_eq!(run.pace_min_per_km(), Some(4.615384615384615));
    assert_eq!(run.label(), "Running on July 4");

    let ride = store.find_by_id(&"8665202950".into()).unwrap();
    assert_eq!(ride.kind(), WorkoutKind::Cycling);
    assert_eq!(ride.speed_km_per_h(), Some(17.05263157894737));
    assert_eq!(ride.label(), "Cycling on July 6");
}

#[test]
fn test_legacy_blob_rewritten_in_current_format() {
    let store = load_fixture();
    let value: serde_json::Value = serde_json::from_slice(&store.serialize().unwrap()).unwrap();

    assert_eq!(value[0]["kind"], "running");
    assert_eq!(value[0]["createdAt"], "2023-07-04T07:12:45.118Z");
    assert_eq!(value[1]["elevationGainM"], 223.0);
    assert!(value[1].get("type").is_none());

    let mut again = WorkoutStore::new();
    again.hydrate(&store.serialize().unwrap()).unwrap();
    assert_eq!(again.all(), store.all());
}
