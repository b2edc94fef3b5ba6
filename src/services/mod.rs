// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod controller;
pub mod geojson_map;
pub mod session_store;
pub mod surface;
pub mod validation;

pub use controller::{SessionController, SessionOptions, SessionState};
pub use geojson_map::GeoJsonMap;
pub use session_store::WorkoutStore;
pub use surface::{FixedGeolocator, Geolocator, InputSurface, LocationUnavailable, MapSurface};
pub use validation::{FormFields, ValidationError, ValidationPolicy};
