// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map surface that records markers as GeoJSON.
//!
//! Markers become `Point` features whose properties carry the popup text and
//! style class, so the collection can be dropped onto any web map. The view
//! center and zoom are kept as foreign members of the collection.

use crate::models::{Coords, ListEntry, Marker};
use crate::services::surface::MapSurface;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue};
use std::fs;
use std::path::Path;

/// In-memory map surface backed by a GeoJSON feature collection.
#[derive(Debug, Default, Clone)]
pub struct GeoJsonMap {
    center: Option<(Coords, u8)>,
    features: Vec<Feature>,
    entries: Vec<ListEntry>,
}

impl GeoJsonMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last view center and zoom.
    pub fn center(&self) -> Option<(Coords, u8)> {
        self.center
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// List entries in render order.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Build the feature collection.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let foreign_members = self.center.map(|(coords, zoom)| {
            let mut members = JsonObject::new();
            members.insert(
                "center".to_string(),
                serde_json::json!([coords.lat, coords.lng]),
            );
            members.insert("zoom".to_string(), JsonValue::from(zoom));
            members
        });

        FeatureCollection {
            bbox: None,
            features: self.features.clone(),
            foreign_members,
        }
    }

    /// Write the feature collection to `path`.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GeoJsonExportError> {
        let geojson = GeoJson::from(self.to_feature_collection());
        fs::write(path.as_ref(), geojson.to_string())?;
        tracing::info!(
            path = %path.as_ref().display(),
            features = self.features.len(),
            "Wrote GeoJSON"
        );
        Ok(())
    }
}

impl MapSurface for GeoJsonMap {
    fn center_on(&mut self, coords: Coords, zoom: u8) {
        self.center = Some((coords, zoom));
    }

    fn place_marker(&mut self, marker: &Marker) {
        let point: geo::Point<f64> = marker.coords.into();

        let mut properties = JsonObject::new();
        properties.insert("icon".to_string(), JsonValue::from(marker.icon.clone()));
        properties.insert(
            "popup".to_string(),
            JsonValue::from(marker.popup_text.clone()),
        );
        properties.insert(
            "className".to_string(),
            JsonValue::from(marker.style_class.clone()),
        );

        self.features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&point))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    fn render_list_entry(&mut self, entry: &ListEntry) {
        self.entries.push(entry.clone());
    }
}

/// Errors from writing the GeoJSON export.
#[derive(Debug, thiserror::Error)]
pub enum GeoJsonExportError {
    #[error("Failed to write GeoJSON: {0}")]
    Io(#[from] std::io::Error),
}
