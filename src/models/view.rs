// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View data handed to the map surface.

use crate::models::workout::{Coords, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
use serde::Serialize;

/// Popup text for the marker at the user's own position.
pub const CURRENT_POSITION_POPUP: &str = "You are here";
/// Style class for the marker at the user's own position.
pub const CURRENT_POSITION_CLASS: &str = "current-position";

/// Icon shown next to a workout of the given kind.
pub fn kind_icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃‍♂️",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}

/// A map marker with an open popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub coords: Coords,
    pub icon: String,
    pub popup_text: String,
    pub style_class: String,
}

impl Marker {
    /// Marker for a logged workout.
    pub fn for_workout(workout: &Workout) -> Self {
        let icon = kind_icon(workout.kind());
        Self {
            coords: workout.coords(),
            icon: icon.to_string(),
            popup_text: format!("{} {}", icon, workout.label()),
            style_class: format!("{}-popup", workout.kind()),
        }
    }

    /// Marker for the user's current position.
    pub fn current_position(coords: Coords) -> Self {
        Self {
            coords,
            icon: String::new(),
            popup_text: CURRENT_POSITION_POPUP.to_string(),
            style_class: CURRENT_POSITION_CLASS.to_string(),
        }
    }
}

/// One `icon value unit` row of a list entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// A rendered list entry; `id` is what the surface hands back on selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: Vec<DetailRow>,
}

impl ListEntry {
    pub fn for_workout(workout: &Workout) -> Self {
        let mut details = vec![
            DetailRow {
                icon: kind_icon(workout.kind()),
                value: workout.distance_km().to_string(),
                unit: "km",
            },
            DetailRow {
                icon: "⏱",
                value: workout.duration_min().to_string(),
                unit: "min",
            },
        ];

        match *workout.details() {
            WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                details.push(DetailRow {
                    icon: "⚡️",
                    value: format!("{:.1}", pace_min_per_km),
                    unit: "min/km",
                });
                details.push(DetailRow {
                    icon: "🦶🏼",
                    value: cadence_spm.to_string(),
                    unit: "spm",
                });
            }
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                details.push(DetailRow {
                    icon: "⚡️",
                    value: format!("{:.1}", speed_km_per_h),
                    unit: "km/h",
                });
                details.push(DetailRow {
                    icon: "⛰",
                    value: elevation_gain_m.to_string(),
                    unit: "m",
                });
            }
        }

        Self {
            id: workout.id().clone(),
            kind: workout.kind(),
            title: workout.label().to_string(),
            details,
        }
    }
}
