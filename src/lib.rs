// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Tracker: log runs and rides on a map
//!
//! This crate provides the workout record model, input validation, the
//! persisted session store and the session controller that ties them to a
//! map surface, an input surface and a geolocation provider.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
