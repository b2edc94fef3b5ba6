// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Tracker CLI
//!
//! Runs one session per invocation against a file-backed store, using the
//! configured home position as the current location.
//!
//! ```bash
//! workout-tracker add --kind running --distance 10 --duration 50 --extra 180 --at 51.51,-0.13
//! workout-tracker list --geojson map.geojson
//! workout-tracker show 3f2c9a...
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workout_tracker::{
    config::Config,
    db::FileStore,
    models::{Coords, ListEntry, WorkoutId},
    services::{FixedGeolocator, FormFields, GeoJsonMap, InputSurface, SessionController},
    time_utils::{format_local_minutes, format_utc_rfc3339},
};

#[derive(Parser)]
#[command(name = "workout-tracker", about = "Log runs and rides on a map")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (default: $WORKOUT_DATA_DIR or ./data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Write map markers to this GeoJSON file
    #[arg(long, global = true)]
    geojson: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List all logged workouts
    List,

    /// Log a new workout
    Add {
        /// "running" or "cycling"
        #[arg(long)]
        kind: String,
        /// Distance in km
        #[arg(long, allow_hyphen_values = true)]
        distance: String,
        /// Duration in minutes
        #[arg(long, allow_hyphen_values = true)]
        duration: String,
        /// Cadence (spm) for running, elevation gain (m) for cycling
        #[arg(long, allow_hyphen_values = true)]
        extra: String,
        /// Location as LAT,LNG (default: current position; works without one)
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        at: Option<Coords>,
    },

    /// Center the map on a workout and print it
    Show {
        /// Workout id
        id: String,
    },
}

/// Form backed by command-line arguments; notices go to stderr.
struct ArgsForm {
    fields: FormFields,
}

impl InputSurface for ArgsForm {
    fn read_fields(&self) -> FormFields {
        self.fields.clone()
    }

    fn clear_fields(&mut self) {
        self.fields = FormFields {
            kind: std::mem::take(&mut self.fields.kind),
            ..FormFields::default()
        };
    }

    fn toggle_extra_field_visibility(&mut self) {}

    fn show_error_notice(&mut self, message: &str, _auto_dismiss: Duration) {
        eprintln!("⚠️  {}", message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_logging();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "Starting session");

    let fields = match &cli.command {
        Command::Add {
            kind,
            distance,
            duration,
            extra,
            ..
        } => FormFields {
            kind: kind.clone(),
            distance: distance.clone(),
            duration: duration.clone(),
            extra: extra.clone(),
        },
        _ => FormFields::default(),
    };

    let kv = FileStore::open(&config.data_dir)?;
    let mut session = SessionController::new(
        kv,
        GeoJsonMap::new(),
        ArgsForm { fields },
        config.session_options(),
    );
    session
        .start(&FixedGeolocator::new(config.home_position))
        .await;

    let mut status = ExitCode::SUCCESS;
    match cli.command {
        Command::List => {
            if session.store().is_empty() {
                println!("No workouts logged yet.");
            }
            for entry in session.map().entries() {
                print_entry(&session, entry);
            }
        }
        Command::Add { at, .. } => {
            match (at, config.home_position) {
                (Some(target), _) => session.on_target_chosen(target),
                (None, Some(home)) => session.on_map_clicked(home),
                (None, None) => {}
            }
            match session.submit() {
                Ok(id) => {
                    if let Some(entry) = session.map().entries().iter().find(|e| e.id == id) {
                        print_entry(&session, entry);
                    }
                }
                Err(_) => status = ExitCode::FAILURE,
            }
        }
        Command::Show { id } => {
            let id: WorkoutId = id.into();
            match session.select_entry(&id) {
                Ok(_) => {
                    if let Some(workout) = session.store().find_by_id(&id) {
                        print_entry(&session, &ListEntry::for_workout(workout));
                        println!("  created  {}", format_utc_rfc3339(workout.created_at()));
                        println!("  at       {}", workout.coords());
                    }
                }
                Err(err) => {
                    if let Some(message) = err.notice() {
                        eprintln!("⚠️  {}", message);
                    }
                    status = ExitCode::FAILURE;
                }
            }
        }
    }

    if let Some(path) = cli.geojson {
        session.map().write_to_file(path)?;
    }

    Ok(status)
}

fn print_entry<K, I>(session: &SessionController<K, GeoJsonMap, I>, entry: &ListEntry)
where
    K: workout_tracker::db::KeyValueStore,
    I: InputSurface,
{
    let when = session
        .store()
        .find_by_id(&entry.id)
        .map(|w| format_local_minutes(w.created_at()))
        .unwrap_or_default();
    let details: Vec<String> = entry
        .details
        .iter()
        .map(|d| format!("{} {} {}", d.icon, d.value, d.unit))
        .collect();
    println!("{}  {}  ({})", entry.id, entry.title, when);
    println!("  {}", details.join("   "));
}

fn parse_coords(s: &str) -> Result<Coords, String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got {:?}", s))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude: {}", e))?;
    let lng: f64 = lng.trim().parse().map_err(|e| format!("bad longitude: {}", e))?;
    Ok(Coords::new(lat, lng))
}

/// Initialize logging to stderr; JSON when `LOG_FORMAT=json`.
fn init_logging() {
    let filter = EnvFilter::from_default_env()
        .add_directive("workout_tracker=debug".parse().unwrap())
        .add_directive("info".parse().unwrap());

    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
