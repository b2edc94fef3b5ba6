// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session controller.
//!
//! Owns the workout store and the collaborator handles for one session and
//! drives them through the session lifecycle:
//! 1. Hydrate the store from the key-value store
//! 2. Request the user's position once
//! 3. Open the form on map clicks or directly chosen coordinates
//! 4. Validate submissions, append, persist and render them
//!
//! Every handler runs to completion on `&mut self`, so store mutation and
//! persistence never interleave.

use crate::db::{keys, KeyValueStore};
use crate::error::{AppError, Result};
use crate::models::{Coords, ListEntry, Marker, WorkoutId};
use crate::services::session_store::WorkoutStore;
use crate::services::surface::{Geolocator, InputSurface, MapSurface};
use crate::services::validation::{self, ValidationPolicy};
use std::time::Duration;

/// Zoom level used when centering the map.
pub const DEFAULT_ZOOM: u8 = 15;
/// How long error notices stay visible.
pub const DEFAULT_NOTICE_DISMISS: Duration = Duration::from_millis(2500);

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// Created, nothing loaded or requested yet.
    Init,
    /// Geolocation requested, no answer yet.
    AwaitingLocation,
    /// Map shown at `position`.
    Ready { position: Coords },
    /// Form open for a workout at `target`. `position` is `None` when the
    /// target was chosen without a located map.
    FormOpen {
        position: Option<Coords>,
        target: Coords,
    },
    /// No position; existing workouts can be browsed. New ones need a
    /// target chosen with [`SessionController::on_target_chosen`].
    Degraded,
}

/// Tunables for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub zoom: u8,
    pub notice_dismiss: Duration,
    pub policy: ValidationPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            notice_dismiss: DEFAULT_NOTICE_DISMISS,
            policy: ValidationPolicy::default(),
        }
    }
}

/// Drives one session over a key-value store, a map surface and an input
/// surface.
pub struct SessionController<K, M, I> {
    kv: K,
    map: M,
    input: I,
    store: WorkoutStore,
    state: SessionState,
    options: SessionOptions,
    location_requested: bool,
}

impl<K, M, I> SessionController<K, M, I>
where
    K: KeyValueStore,
    M: MapSurface,
    I: InputSurface,
{
    pub fn new(kv: K, map: M, input: I, options: SessionOptions) -> Self {
        Self {
            kv,
            map,
            input,
            store: WorkoutStore::new(),
            state: SessionState::Init,
            options,
            location_requested: false,
        }
    }

    /// Load stored workouts, then request the position and apply the
    /// outcome.
    pub async fn start<G>(&mut self, geolocator: &G)
    where
        G: Geolocator + ?Sized,
    {
        if self.location_requested {
            tracing::warn!("Session already started");
            return;
        }

        self.load();
        self.begin_location_request();

        match geolocator.request_position().await {
            Ok(position) => self.on_location_resolved(position),
            Err(_) => self.on_location_failed(),
        }
    }

    /// Hydrate the store from the key-value store.
    ///
    /// Missing, unreadable or corrupt data leaves the store empty.
    pub fn load(&mut self) {
        let blob = match self.kv.get(keys::WORKOUTS) {
            Ok(blob) => blob,
            Err(e) => {
                self.notify(&AppError::from(e));
                None
            }
        };

        let Some(bytes) = blob else {
            tracing::info!("No stored workouts");
            return;
        };

        match self.store.hydrate(&bytes) {
            Ok(()) => tracing::info!(count = self.store.len(), "Loaded stored workouts"),
            Err(e) => self.notify(&AppError::from(e)),
        }
    }

    /// Mark the position as requested.
    ///
    /// Returns `false` if it was already requested; the caller must not ask
    /// the geolocator again.
    pub fn begin_location_request(&mut self) -> bool {
        if self.location_requested {
            tracing::warn!("Location already requested for this session");
            return false;
        }
        self.location_requested = true;
        self.state = SessionState::AwaitingLocation;
        true
    }

    /// Geolocation succeeded: show the map and every stored workout.
    pub fn on_location_resolved(&mut self, position: Coords) {
        if self.state != SessionState::AwaitingLocation {
            tracing::warn!(state = ?self.state, "Ignoring unexpected location result");
            return;
        }
        tracing::info!(%position, "Location resolved");

        self.map.center_on(position, self.options.zoom);
        self.map.place_marker(&Marker::current_position(position));
        for workout in self.store.all() {
            self.map.place_marker(&Marker::for_workout(workout));
        }
        for workout in self.store.all() {
            self.map.render_list_entry(&ListEntry::for_workout(workout));
        }

        self.state = SessionState::Ready { position };
    }

    /// Geolocation failed: keep the list usable, disable new workouts.
    pub fn on_location_failed(&mut self) {
        if self.state != SessionState::AwaitingLocation {
            tracing::warn!(state = ?self.state, "Ignoring unexpected location failure");
            return;
        }
        tracing::warn!("Location unavailable, continuing without map");

        for workout in self.store.all() {
            self.map.render_list_entry(&ListEntry::for_workout(workout));
        }
        self.notify(&AppError::LocationUnavailable);

        self.state = SessionState::Degraded;
    }

    /// A click on the map opens the form for that point.
    pub fn on_map_clicked(&mut self, target: Coords) {
        match self.state {
            SessionState::Ready { position } => {
                tracing::debug!(%target, "Form opened");
                self.state = SessionState::FormOpen {
                    position: Some(position),
                    target,
                };
            }
            SessionState::FormOpen { position, .. } => {
                tracing::debug!(%target, "Form target moved");
                self.state = SessionState::FormOpen { position, target };
            }
            state => tracing::debug!(?state, "Ignoring map click without a map"),
        }
    }

    /// Open the form for a coordinate the user supplied directly.
    ///
    /// Unlike a map click this also works in `Degraded`, since the target
    /// does not depend on the map. Ignored before geolocation has answered.
    pub fn on_target_chosen(&mut self, target: Coords) {
        let position = match self.state {
            SessionState::Ready { position } => Some(position),
            SessionState::FormOpen { position, .. } => position,
            SessionState::Degraded => None,
            state => {
                tracing::debug!(?state, "Ignoring target before location answered");
                return;
            }
        };
        tracing::debug!(%target, "Form opened for chosen target");
        self.state = SessionState::FormOpen { position, target };
    }

    /// Validate the form and log a workout at the clicked point.
    ///
    /// On rejection the form stays open with its contents and the reason is
    /// shown as a notice.
    pub fn submit(&mut self) -> Result<WorkoutId> {
        let SessionState::FormOpen { position, target } = self.state else {
            let err = AppError::NoTarget;
            self.notify(&err);
            return Err(err);
        };

        let fields = self.input.read_fields();
        let workout = match validation::build_workout(&fields, target, self.options.policy) {
            Ok(workout) => workout,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected workout");
                let err = AppError::from(e);
                self.notify(&err);
                return Err(err);
            }
        };

        let id = workout.id().clone();
        let marker = Marker::for_workout(&workout);
        let entry = ListEntry::for_workout(&workout);
        tracing::info!(
            id = %id,
            kind = %workout.kind(),
            distance_km = workout.distance_km(),
            duration_min = workout.duration_min(),
            "Workout logged"
        );

        self.store.append(workout);
        self.persist();

        self.map.place_marker(&marker);
        self.map.render_list_entry(&entry);
        self.input.clear_fields();
        self.state = match position {
            Some(position) => SessionState::Ready { position },
            None => SessionState::Degraded,
        };

        Ok(id)
    }

    /// Center the map on a listed workout.
    ///
    /// An unknown id leaves the map and state untouched and returns
    /// `NotFound` without showing a notice.
    pub fn select_entry(&mut self, id: &WorkoutId) -> Result<Coords> {
        let Some(coords) = self.store.find_by_id(id).map(|w| w.coords()) else {
            tracing::debug!(id = %id, "Selected workout not found");
            return Err(AppError::NotFound(id.to_string()));
        };
        self.map.center_on(coords, self.options.zoom);
        Ok(coords)
    }

    /// Show the extra field matching the other workout kind.
    pub fn toggle_kind(&mut self) {
        self.input.toggle_extra_field_visibility();
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access to the input surface, for hosts whose form values live
    /// in the surface itself and change between submit events.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// The persistence backend.
    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Write the store; a failed write keeps the in-memory workout and the
    /// next append rewrites the whole list.
    fn persist(&mut self) {
        let result = self
            .store
            .serialize()
            .map_err(AppError::from)
            .and_then(|blob| Ok(self.kv.set(keys::WORKOUTS, &blob)?));
        if let Err(e) = result {
            self.notify(&e);
        }
    }

    fn notify(&mut self, err: &AppError) {
        if let Some(message) = err.notice() {
            self.input
                .show_error_notice(&message, self.options.notice_dismiss);
        }
    }
}
