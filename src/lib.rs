// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Waypoint-Tracker: record running and cycling workouts pinned to map
//! positions.
//!
//! This crate provides the workout domain model, the in-memory log, and the
//! persistence round-trip against a local durable store. Restoring goes
//! through explicit rehydration so a restored workout behaves exactly like
//! one created fresh in the current session.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::SessionController;

/// Shared application state, built once at process entry.
pub struct AppState {
    pub config: Config,
    pub session: SessionController,
}
