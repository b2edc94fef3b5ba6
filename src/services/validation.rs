// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Turns raw form fields into a workout or a rejection reason.

use crate::models::{Coords, Workout, WorkoutKind};

/// Raw field values as read from the input surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// "running" or "cycling"
    pub kind: String,
    pub distance: String,
    pub duration: String,
    /// Cadence for running, elevation gain for cycling
    pub extra: String,
}

/// Which numeric field a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Distance => "distance",
            Field::Duration => "duration",
            Field::Cadence => "cadence",
            Field::Elevation => "elevation gain",
        })
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unknown workout type: {0:?}")]
    UnknownKind(String),

    #[error("Inputs must be positive numbers! ({0} is not a number)")]
    NotANumber(Field),

    #[error("Inputs must be positive numbers! ({0} must be greater than zero)")]
    NotPositive(Field),

    #[error("Location is not a valid coordinate")]
    InvalidCoords,
}

/// Validation knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Whether elevation gain must be greater than zero like every other
    /// numeric field.
    pub require_positive_elevation: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_positive_elevation: true,
        }
    }
}

/// Validate `fields` and build a workout at `coords`.
pub fn build_workout(
    fields: &FormFields,
    coords: Coords,
    policy: ValidationPolicy,
) -> Result<Workout, ValidationError> {
    let kind: WorkoutKind = fields.kind.parse().map_err(ValidationError::UnknownKind)?;

    if !coords.is_finite() {
        return Err(ValidationError::InvalidCoords);
    }

    let distance = parse_number(&fields.distance, Field::Distance)?;
    let duration = parse_number(&fields.duration, Field::Duration)?;
    let extra_field = match kind {
        WorkoutKind::Running => Field::Cadence,
        WorkoutKind::Cycling => Field::Elevation,
    };
    let extra = parse_number(&fields.extra, extra_field)?;

    require_positive(distance, Field::Distance)?;
    require_positive(duration, Field::Duration)?;
    match kind {
        WorkoutKind::Running => require_positive(extra, Field::Cadence)?,
        WorkoutKind::Cycling if policy.require_positive_elevation => {
            require_positive(extra, Field::Elevation)?
        }
        WorkoutKind::Cycling => {}
    }

    Ok(match kind {
        WorkoutKind::Running => Workout::running(coords, distance, duration, extra),
        WorkoutKind::Cycling => Workout::cycling(coords, distance, duration, extra),
    })
}

/// Parse a finite number, ignoring surrounding whitespace.
fn parse_number(raw: &str, field: Field) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber(field))
}

fn require_positive(value: f64, field: Field) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive(field))
    }
}
