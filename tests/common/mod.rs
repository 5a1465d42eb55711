// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use waypoint_tracker::models::{Position, SportType};
use waypoint_tracker::services::{SessionController, WorkoutForm};
use waypoint_tracker::store::LocalStore;

/// Position used across tests.
#[allow(dead_code)]
pub fn test_position() -> Position {
    Position::new(39.0, -12.0)
}

/// A valid running submission.
#[allow(dead_code)]
pub fn running_form() -> WorkoutForm {
    WorkoutForm {
        distance_km: Some(5.2),
        duration_min: Some(24.0),
        cadence_spm: Some(178.0),
        elevation_gain_m: None,
    }
}

/// A valid cycling submission.
#[allow(dead_code)]
pub fn cycling_form() -> WorkoutForm {
    WorkoutForm {
        distance_km: Some(27.0),
        duration_min: Some(95.0),
        cadence_spm: None,
        elevation_gain_m: Some(523.0),
    }
}

/// Create a controller over an in-memory store.
#[allow(dead_code)]
pub fn memory_session() -> SessionController {
    SessionController::new(LocalStore::in_memory())
}

/// Submit one running and one cycling workout; returns their ids in order.
///
/// Ids derive from the creation timestamp, so submissions are spaced a few
/// milliseconds apart to keep them unique.
#[allow(dead_code)]
pub fn submit_mixed(session: &mut SessionController) -> Vec<String> {
    let running = session
        .submit_new_workout(SportType::Running, test_position(), &running_form())
        .expect("running submission should succeed");
    pause_for_unique_id();
    let cycling = session
        .submit_new_workout(SportType::Cycling, test_position(), &cycling_form())
        .expect("cycling submission should succeed");

    vec![running.id, cycling.id]
}

/// Space out timestamp-derived ids.
#[allow(dead_code)]
pub fn pause_for_unique_id() {
    std::thread::sleep(std::time::Duration::from_millis(2));
}
