// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model and derived metrics.
//!
//! A [`Workout`] carries the fields common to every activity plus a
//! [`WorkoutDetails`] payload for the kind-specific input and its derived
//! metric. Derived values are computed once by the constructors and never
//! recomputed afterwards.

use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month names indexed by zero-based calendar month.
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

/// GeoJSON and `geo` use x = longitude, y = latitude.
impl From<Coords> for geo::Point<f64> {
    fn from(c: Coords) -> Self {
        geo::Point::new(c.lng, c.lat)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

/// Kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase name as stored and used in CSS-style classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name used in labels.
    pub fn title(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(other.to_string()),
        }
    }
}

/// Opaque workout identifier, unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WorkoutId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkoutId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind-specific input together with its derived metric.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutDetails {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// A logged activity.
///
/// Fields are private so that a record cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: Coords,
    distance_km: f64,
    duration_min: f64,
    label: String,
    details: WorkoutDetails,
}

impl Workout {
    /// Create a running workout stamped with the current time.
    ///
    /// Inputs must already be validated: a non-positive `distance_km` makes
    /// the pace non-finite.
    pub fn running(coords: Coords, distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self::running_at(
            WorkoutId::generate(),
            Utc::now(),
            coords,
            distance_km,
            duration_min,
            cadence_spm,
        )
    }

    /// Create a cycling workout stamped with the current time.
    ///
    /// Inputs must already be validated: a non-positive `duration_min` makes
    /// the speed non-finite.
    pub fn cycling(
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self::cycling_at(
            WorkoutId::generate(),
            Utc::now(),
            coords,
            distance_km,
            duration_min,
            elevation_gain_m,
        )
    }

    /// Create a running workout with an explicit id and timestamp.
    pub fn running_at(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            label: describe(WorkoutKind::Running, created_at),
            details: WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km: pace_min_per_km(distance_km, duration_min),
            },
        }
    }

    /// Create a cycling workout with an explicit id and timestamp.
    pub fn cycling_at(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            label: describe(WorkoutKind::Cycling, created_at),
            details: WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h: speed_km_per_h(distance_km, duration_min),
            },
        }
    }

    /// Reassemble a workout from persisted parts without recomputing
    /// anything. Used by the store decoder.
    pub(crate) fn from_parts(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        label: String,
        details: WorkoutDetails,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            label,
            details,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    /// Pace in min/km, running workouts only.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => Some(pace_min_per_km),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Speed in km/h, cycling workouts only.
    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            WorkoutDetails::Running { .. } => None,
        }
    }
}

/// Minutes per kilometre.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Kilometres per hour.
pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// Build the display label for a workout created at `created_at`, using the
/// local calendar date.
pub fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    label_for_date(kind, &created_at.with_timezone(&Local))
}

/// "{Kind} on {Month} {day}" for any calendar date.
pub fn label_for_date<D: Datelike>(kind: WorkoutKind, date: &D) -> String {
    format!(
        "{} on {} {}",
        kind.title(),
        MONTHS[date.month0() as usize],
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_running_pace() {
        let w = Workout::running(Coords::new(51.5, -0.12), 10.0, 50.0, 180.0);
        assert_eq!(w.kind(), WorkoutKind::Running);
        assert_eq!(w.pace_min_per_km(), Some(5.0));
        assert_eq!(w.speed_km_per_h(), None);
    }

    #[test]
    fn test_cycling_speed() {
        let w = Workout::cycling(Coords::new(51.5, -0.12), 20.0, 60.0, 150.0);
        assert_eq!(w.kind(), WorkoutKind::Cycling);
        assert_eq!(w.speed_km_per_h(), Some(20.0));
        assert_eq!(w.pace_min_per_km(), None);
    }

    #[test]
    fn test_zero_distance_gives_non_finite_pace() {
        assert!(!pace_min_per_km(0.0, 30.0).is_finite());
        assert!(!speed_km_per_h(10.0, 0.0).is_finite());
    }

    #[test]
    fn test_label_for_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            label_for_date(WorkoutKind::Running, &date),
            "Running on March 5"
        );

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(
            label_for_date(WorkoutKind::Cycling, &date),
            "Cycling on December 31"
        );
    }

    #[test]
    fn test_label_computed_at_creation() {
        // Noon UTC mid-month lands on the same local date in any timezone.
        let w = Workout::running_at(
            "abc".into(),
            noon(2024, 1, 15),
            Coords::new(0.0, 0.0),
            5.0,
            25.0,
            170.0,
        );
        assert_eq!(w.label(), "Running on January 15");
        assert_eq!(w.id().as_str(), "abc");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Workout::running(Coords::new(0.0, 0.0), 1.0, 1.0, 1.0);
        let b = Workout::running(Coords::new(0.0, 0.0), 1.0, 1.0, 1.0);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(" Running ".parse::<WorkoutKind>(), Ok(WorkoutKind::Running));
        assert_eq!("cycling".parse::<WorkoutKind>(), Ok(WorkoutKind::Cycling));
        assert!("swimming".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn test_coords_serialize_as_pair() {
        let json = serde_json::to_string(&Coords::new(51.5, -0.12)).unwrap();
        assert_eq!(json, "[51.5,-0.12]");
        let back: Coords = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Coords::new(51.5, -0.12));
    }
}
