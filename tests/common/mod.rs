// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use workout_tracker::db::{KeyValueStore, MemoryStore, StorageError};
use workout_tracker::models::{Coords, ListEntry, Marker};
use workout_tracker::services::{
    FormFields, Geolocator, InputSurface, LocationUnavailable, MapSurface, SessionController,
    SessionOptions,
};

/// Map surface that records every call.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub centered: Vec<(Coords, u8)>,
    pub markers: Vec<Marker>,
    pub entries: Vec<ListEntry>,
}

impl MapSurface for RecordingMap {
    fn center_on(&mut self, coords: Coords, zoom: u8) {
        self.centered.push((coords, zoom));
    }

    fn place_marker(&mut self, marker: &Marker) {
        self.markers.push(marker.clone());
    }

    fn render_list_entry(&mut self, entry: &ListEntry) {
        self.entries.push(entry.clone());
    }
}

/// Form whose fields the test sets directly.
#[derive(Debug, Default)]
pub struct TestForm {
    pub fields: FormFields,
    pub notices: Vec<(String, Duration)>,
    pub cleared: usize,
}

impl TestForm {
    pub fn fill(&mut self, kind: &str, distance: &str, duration: &str, extra: &str) {
        self.fields = FormFields {
            kind: kind.to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            extra: extra.to_string(),
        };
    }
}

impl InputSurface for TestForm {
    fn read_fields(&self) -> FormFields {
        self.fields.clone()
    }

    fn clear_fields(&mut self) {
        self.fields.distance.clear();
        self.fields.duration.clear();
        self.fields.extra.clear();
        self.cleared += 1;
    }

    fn toggle_extra_field_visibility(&mut self) {}

    fn show_error_notice(&mut self, message: &str, auto_dismiss: Duration) {
        self.notices.push((message.to_string(), auto_dismiss));
    }
}

/// Geolocator that counts requests and answers with a fixed outcome.
pub struct CountingGeolocator {
    pub outcome: Result<Coords, LocationUnavailable>,
    pub calls: AtomicUsize,
}

impl CountingGeolocator {
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            outcome: Ok(Coords::new(lat, lng)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            outcome: Err(LocationUnavailable),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geolocator for CountingGeolocator {
    async fn request_position(&self) -> Result<Coords, LocationUnavailable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
    }
}

pub type TestSession = SessionController<MemoryStore, RecordingMap, TestForm>;

/// Session over the given key-value store with recording surfaces.
pub fn session_with(kv: MemoryStore) -> TestSession {
    SessionController::new(
        kv,
        RecordingMap::default(),
        TestForm::default(),
        SessionOptions::default(),
    )
}

/// Key-value store whose first `failures_left` writes fail.
#[derive(Debug, Default)]
pub struct FailingWrites {
    pub inner: MemoryStore,
    pub failures_left: usize,
}

impl FailingWrites {
    pub fn new(failures: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            failures_left: failures,
        }
    }
}

impl KeyValueStore for FailingWrites {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(StorageError::Io {
                path: key.to_string(),
                source: std::io::Error::other("disk full"),
            });
        }
        self.inner.set(key, bytes)
    }
}
