// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod view;
pub mod workout;

pub use view::{DetailRow, ListEntry, Marker};
pub use workout::{Coords, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
