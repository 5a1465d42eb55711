// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Waypoint-Tracker listing tool
//!
//! Restores the persisted workout log and prints it. Configured by
//! environment variables; takes no flags.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waypoint_tracker::{
    config::Config, services::SessionController, store::LocalStore,
    time_utils::format_utc_rfc3339, AppState,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "Starting Waypoint-Tracker");

    let store = LocalStore::open(&config.data_dir)?;
    let mut session = SessionController::new(store);

    match session.restore() {
        Ok(count) => tracing::info!(count, "Workout log restored"),
        Err(e) if e.is_recoverable() => {
            tracing::warn!(error = %e, "Stored workout log unusable; starting empty");
        }
        Err(e) => return Err(e.into()),
    }

    let state = AppState { config, session };

    if state.session.log().is_empty() {
        println!("No workouts recorded yet.");
        return Ok(());
    }

    for workout in state.session.log().workouts() {
        let metric = workout.metric();
        println!(
            "{}  {}  {:.1} km  {:.0} min  {:.1} {}",
            format_utc_rfc3339(workout.created_at),
            workout.description,
            workout.distance_km,
            workout.duration_min,
            metric.value(),
            metric.unit(),
        );
    }

    Ok(())
}

/// Initialize logging, controllable through `RUST_LOG`.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("waypoint_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
