// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration tests for the workout-tracker binary.

use std::path::Path;
use std::process::Command;
use workout_tracker::services::WorkoutStore;

/// Run the CLI in `dir` with no home position configured.
fn run_cli(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_workout-tracker"))
        .current_dir(dir)
        .env_remove("HOME_LAT")
        .env_remove("HOME_LNG")
        .env_remove("WORKOUT_DATA_DIR")
        .env_remove("MAP_ZOOM")
        .env_remove("NOTICE_DISMISS_MS")
        .env_remove("ALLOW_NON_POSITIVE_ELEVATION")
        .args(["--data-dir", "data"])
        .args(args)
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn stored(dir: &Path) -> WorkoutStore {
    let bytes = std::fs::read(dir.join("data").join("workouts.json")).unwrap();
    let mut store = WorkoutStore::new();
    store.hydrate(&bytes).unwrap();
    store
}

#[test]
fn test_add_at_without_home_position() {
    let dir = tempfile::tempdir().unwrap();

    let (exit_code, stdout, stderr) = run_cli(
        dir.path(),
        &[
            "add", "--kind", "running", "--distance", "5", "--duration", "25", "--extra", "170",
            "--at", "51.5,-0.12",
        ],
    );

    assert_eq!(exit_code, 0, "add should succeed, stderr: {}", stderr);
    assert!(stdout.contains("Running on"), "stdout: {}", stdout);
    assert!(!stderr.contains("Click on the map"), "stderr: {}", stderr);

    let store = stored(dir.path());
    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].coords().lat, 51.5);
    assert_eq!(store.all()[0].coords().lng, -0.12);
}

#[test]
fn test_add_without_any_location_fails() {
    let dir = tempfile::tempdir().unwrap();

    let (exit_code, _stdout, stderr) = run_cli(
        dir.path(),
        &["add", "--kind", "running", "--distance", "5", "--duration", "25", "--extra", "170"],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Click on the map to choose a location first"));
    assert!(!dir.path().join("data").join("workouts.json").exists());
}

#[test]
fn test_show_unknown_id() {
    let dir = tempfile::tempdir().unwrap();

    let (exit_code, _stdout, stderr) = run_cli(dir.path(), &["show", "nope"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Workout not found: nope"), "stderr: {}", stderr);
}
