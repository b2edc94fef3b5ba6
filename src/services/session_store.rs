// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory workout collection and its persisted JSON form.
//!
//! The store is append-only: workouts stay in creation order for the whole
//! session. `serialize` writes every field including derived metrics, and
//! `hydrate` rebuilds each entry as a complete variant in one step, trusting
//! stored derived values rather than recomputing them.

use crate::models::workout::{self, Coords, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered, append-only collection of workouts for one session.
#[derive(Debug, Default, Clone)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with the workouts in a persisted blob.
    ///
    /// An empty blob yields an empty store. On error the store is left
    /// empty.
    pub fn hydrate(&mut self, bytes: &[u8]) -> Result<(), DeserializationError> {
        self.workouts.clear();

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }

        let stored: Vec<StoredWorkout> = serde_json::from_slice(bytes)?;
        let mut seen = HashSet::with_capacity(stored.len());
        let mut workouts = Vec::with_capacity(stored.len());

        for (index, entry) in stored.into_iter().enumerate() {
            let workout = entry
                .into_workout()
                .map_err(|reason| DeserializationError::InvalidEntry { index, reason })?;
            if !seen.insert(workout.id().clone()) {
                return Err(DeserializationError::DuplicateId(workout.id().to_string()));
            }
            workouts.push(workout);
        }

        tracing::debug!(count = workouts.len(), "Hydrated workouts");
        self.workouts = workouts;
        Ok(())
    }

    /// Add a workout at the end.
    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Persisted representation of every workout.
    ///
    /// On error nothing should be written; the previous blob stays valid.
    pub fn serialize(&self) -> Result<Vec<u8>, serde_json::Error> {
        let stored: Vec<StoredWorkout> = self.workouts.iter().map(StoredWorkout::from).collect();
        serde_json::to_vec(&stored)
    }

    pub fn find_by_id(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

/// Errors from decoding a persisted blob.
#[derive(Debug, thiserror::Error)]
pub enum DeserializationError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entry {index} is invalid: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Duplicate workout id: {0}")]
    DuplicateId(String),
}

/// One workout as stored.
///
/// Aliases accept the field names written by earlier releases.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredWorkout {
    #[serde(alias = "type")]
    kind: WorkoutKind,
    id: String,
    #[serde(alias = "date")]
    created_at: DateTime<Utc>,
    coords: Coords,
    #[serde(alias = "distance")]
    distance_km: f64,
    #[serde(alias = "duration")]
    duration_min: f64,
    #[serde(alias = "cadence", default, skip_serializing_if = "Option::is_none")]
    cadence_spm: Option<f64>,
    #[serde(
        alias = "elevationGain",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    elevation_gain_m: Option<f64>,
    #[serde(alias = "description", default)]
    label: Option<String>,
    #[serde(alias = "pace", default, skip_serializing_if = "Option::is_none")]
    pace_min_per_km: Option<f64>,
    #[serde(alias = "speed", default, skip_serializing_if = "Option::is_none")]
    speed_km_per_h: Option<f64>,
}

impl StoredWorkout {
    fn into_workout(self) -> Result<Workout, String> {
        if !self.coords.is_finite() {
            return Err("coordinates are not finite".to_string());
        }
        if !(self.distance_km.is_finite() && self.distance_km > 0.0) {
            return Err(format!("distance {} is not positive", self.distance_km));
        }
        if !(self.duration_min.is_finite() && self.duration_min > 0.0) {
            return Err(format!("duration {} is not positive", self.duration_min));
        }

        let details = match self.kind {
            WorkoutKind::Running => {
                let cadence_spm = self
                    .cadence_spm
                    .ok_or_else(|| "running entry has no cadence".to_string())?;
                WorkoutDetails::Running {
                    cadence_spm,
                    pace_min_per_km: self.pace_min_per_km.unwrap_or_else(|| {
                        workout::pace_min_per_km(self.distance_km, self.duration_min)
                    }),
                }
            }
            WorkoutKind::Cycling => {
                let elevation_gain_m = self
                    .elevation_gain_m
                    .ok_or_else(|| "cycling entry has no elevation gain".to_string())?;
                WorkoutDetails::Cycling {
                    elevation_gain_m,
                    speed_km_per_h: self.speed_km_per_h.unwrap_or_else(|| {
                        workout::speed_km_per_h(self.distance_km, self.duration_min)
                    }),
                }
            }
        };

        let label = self
            .label
            .unwrap_or_else(|| workout::describe(self.kind, self.created_at));

        Ok(Workout::from_parts(
            self.id.into(),
            self.created_at,
            self.coords,
            self.distance_km,
            self.duration_min,
            label,
            details,
        ))
    }
}

impl From<&Workout> for StoredWorkout {
    fn from(w: &Workout) -> Self {
        let (cadence_spm, pace_min_per_km, elevation_gain_m, speed_km_per_h) = match *w.details() {
            WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            } => (Some(cadence_spm), Some(pace_min_per_km), None, None),
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => (None, None, Some(elevation_gain_m), Some(speed_km_per_h)),
        };

        Self {
            kind: w.kind(),
            id: w.id().to_string(),
            created_at: w.created_at(),
            coords: w.coords(),
            distance_km: w.distance_km(),
            duration_min: w.duration_min(),
            cadence_spm,
            elevation_gain_m,
            label: Some(w.label().to_string()),
            pace_min_per_km,
            speed_km_per_h,
        }
    }
}
