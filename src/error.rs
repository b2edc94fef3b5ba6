// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Application error types and the notices they surface to the user.

use crate::db::StorageError;
use crate::services::session_store::DeserializationError;
use crate::services::validation::ValidationError;

/// Application error type.
///
/// None of these are fatal: each one maps to a smaller but still usable
/// session state.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Click on the map to choose a location first")]
    NoTarget,

    #[error("Unable to access user location.")]
    LocationUnavailable,

    #[error("Workout not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Stored workouts are unreadable: {0}")]
    Deserialization(#[from] DeserializationError),

    #[error("Failed to encode workouts: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Text to show the user, or `None` for errors that are handled silently.
    pub fn notice(&self) -> Option<String> {
        match self {
            AppError::InvalidInput(_) | AppError::NoTarget | AppError::LocationUnavailable => {
                Some(self.to_string())
            }
            AppError::NotFound(_) => Some(self.to_string()),
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                None
            }
            AppError::Deserialization(err) => {
                tracing::warn!(error = %err, "Discarding stored workouts");
                None
            }
            AppError::Serialization(err) => {
                tracing::error!(error = %err, "Skipping write of unencodable workouts");
                None
            }
        }
    }
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, AppError>;
