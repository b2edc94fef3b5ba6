use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use workout_tracker::models::{Coords, Workout};
use workout_tracker::services::WorkoutStore;

/// A season of alternating runs and rides.
fn build_store(count: usize) -> WorkoutStore {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 7, 0, 0).unwrap();
    let mut store = WorkoutStore::new();
    for i in 0..count {
        let created_at = start + Duration::hours(i as i64 * 13);
        let coords = Coords::new(51.5 + i as f64 * 1e-4, -0.12 - i as f64 * 1e-4);
        let workout = if i % 2 == 0 {
            Workout::running_at(
                format!("run-{}", i).into(),
                created_at,
                coords,
                5.0 + (i % 7) as f64,
                25.0 + (i % 11) as f64,
                170.0,
            )
        } else {
            Workout::cycling_at(
                format!("ride-{}", i).into(),
                created_at,
                coords,
                20.0 + (i % 13) as f64,
                60.0 + (i % 17) as f64,
                (i % 300) as f64,
            )
        };
        store.append(workout);
    }
    store
}

fn benchmark_store(c: &mut Criterion) {
    let store = build_store(1000);
    let blob = store.serialize().expect("workouts encode");

    let mut group = c.benchmark_group("workout_store");

    group.bench_function("serialize_1000", |b| {
        b.iter(|| black_box(&store).serialize().expect("workouts encode"))
    });

    group.bench_function("hydrate_1000", |b| {
        b.iter(|| {
            let mut fresh = WorkoutStore::new();
            fresh.hydrate(black_box(&blob)).expect("blob should hydrate");
            fresh
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_store);
criterion_main!(benches);
