//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present.

use crate::models::Coords;
use crate::services::controller::{SessionOptions, DEFAULT_NOTICE_DISMISS, DEFAULT_ZOOM};
use crate::services::validation::ValidationPolicy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the file-backed key-value store
    pub data_dir: PathBuf,
    /// Position reported by the fixed geolocator (None = unavailable)
    pub home_position: Option<Coords>,
    /// Zoom level used when centering the map
    pub map_zoom: u8,
    /// How long error notices stay visible
    pub notice_dismiss: Duration,
    /// Accept zero or negative elevation gain for cycling
    pub allow_non_positive_elevation: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            home_position: None,
            map_zoom: DEFAULT_ZOOM,
            notice_dismiss: DEFAULT_NOTICE_DISMISS,
            allow_non_positive_elevation: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let home_position = match (env::var("HOME_LAT").ok(), env::var("HOME_LNG").ok()) {
            (Some(lat), Some(lng)) => {
                let coords = Coords::new(parse_var("HOME_LAT", &lat)?, parse_var("HOME_LNG", &lng)?);
                if !coords.is_finite() {
                    return Err(ConfigError::Invalid("HOME_LAT/HOME_LNG", format!("{}", coords)));
                }
                Some(coords)
            }
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("HOME_LNG")),
            (None, Some(_)) => return Err(ConfigError::Missing("HOME_LAT")),
        };

        Ok(Self {
            data_dir: env::var("WORKOUT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            home_position,
            map_zoom: match env::var("MAP_ZOOM") {
                Ok(v) => parse_var("MAP_ZOOM", &v)?,
                Err(_) => DEFAULT_ZOOM,
            },
            notice_dismiss: match env::var("NOTICE_DISMISS_MS") {
                Ok(v) => Duration::from_millis(parse_var("NOTICE_DISMISS_MS", &v)?),
                Err(_) => DEFAULT_NOTICE_DISMISS,
            },
            allow_non_positive_elevation: match env::var("ALLOW_NON_POSITIVE_ELEVATION") {
                Ok(v) => parse_var("ALLOW_NON_POSITIVE_ELEVATION", &v)?,
                Err(_) => false,
            },
        })
    }

    /// Session tunables derived from this configuration.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            zoom: self.map_zoom,
            notice_dismiss: self.notice_dismiss,
            policy: ValidationPolicy {
                require_positive_elevation: !self.allow_non_positive_elevation,
            },
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(name, value.to_string()))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
