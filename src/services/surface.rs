// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collaborator seams the session controller drives.

use crate::models::{Coords, ListEntry, Marker};
use crate::services::validation::FormFields;
use async_trait::async_trait;
use std::time::Duration;

/// Geolocation failed or was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Location unavailable")]
pub struct LocationUnavailable;

/// One-shot source of the user's position.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Resolve the current position once.
    async fn request_position(&self) -> Result<Coords, LocationUnavailable>;
}

/// Map and list rendering.
pub trait MapSurface {
    /// Move the view to `coords` at `zoom`.
    fn center_on(&mut self, coords: Coords, zoom: u8);

    /// Add a marker with its popup open.
    fn place_marker(&mut self, marker: &Marker);

    /// Add an entry to the workout list.
    fn render_list_entry(&mut self, entry: &ListEntry);
}

/// Workout form and notice area.
pub trait InputSurface {
    /// Current raw field values.
    fn read_fields(&self) -> FormFields;

    /// Blank the numeric fields.
    fn clear_fields(&mut self);

    /// Switch between the cadence and elevation fields.
    fn toggle_extra_field_visibility(&mut self);

    /// Show a notice that disappears after `auto_dismiss`.
    fn show_error_notice(&mut self, message: &str, auto_dismiss: Duration);
}

/// Geolocator that always answers with a configured position, or always
/// fails when none is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGeolocator {
    position: Option<Coords>,
}

impl FixedGeolocator {
    pub fn new(position: Option<Coords>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn request_position(&self) -> Result<Coords, LocationUnavailable> {
        self.position.ok_or(LocationUnavailable)
    }
}
