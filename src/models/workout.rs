// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout entity model: the base record plus the Running/Cycling variants.
//!
//! A workout is immutable after construction except for its click counter.
//! Sport-specific behavior (derived metric, description) dispatches on the
//! [`SportDetails`] tag rather than living in per-kind types, so the
//! persistence layer can rebuild full entities through the same path as
//! fresh creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::time_utils::format_month_day;

/// Workout ids keep the last 10 digits of the epoch-milliseconds timestamp.
const ID_DIGITS: usize = 10;

/// Map position where a workout was recorded.
///
/// Serializes as a two-element `[lat, lng]` array to match the stored
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<[f64; 2]> for Position {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> [f64; 2] {
        [p.lat, p.lng]
    }
}

/// Sport discriminator for a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SportType {
    Running,
    Cycling,
}

impl SportType {
    /// Lowercase tag used in the stored format.
    pub fn tag(self) -> &'static str {
        match self {
            SportType::Running => "running",
            SportType::Cycling => "cycling",
        }
    }

    /// Parse a stored tag. Unknown tags are the caller's problem to report.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "running" => Some(SportType::Running),
            "cycling" => Some(SportType::Cycling),
            _ => None,
        }
    }

    /// Capitalized English name, used in workout descriptions.
    pub fn display_name(self) -> &'static str {
        match self {
            SportType::Running => "Running",
            SportType::Cycling => "Cycling",
        }
    }
}

impl std::fmt::Display for SportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Sport-specific data carried by a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SportDetails {
    Running {
        /// Steps per minute.
        cadence_spm: u32,
    },
    Cycling {
        /// Meters climbed. Negative records a net descent.
        elevation_gain_m: f64,
    },
}

impl SportDetails {
    pub fn sport_type(&self) -> SportType {
        match self {
            SportDetails::Running { .. } => SportType::Running,
            SportDetails::Cycling { .. } => SportType::Cycling,
        }
    }
}

/// Derived performance metric of a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Running pace in minutes per kilometer.
    PaceMinPerKm(f64),
    /// Cycling speed in kilometers per hour.
    SpeedKmPerH(f64),
}

impl Metric {
    /// Numeric value without the unit tag.
    pub fn value(self) -> f64 {
        match self {
            Metric::PaceMinPerKm(v) | Metric::SpeedKmPerH(v) => v,
        }
    }

    /// Unit label for display.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::PaceMinPerKm(_) => "min/km",
            Metric::SpeedKmPerH(_) => "km/h",
        }
    }
}

/// A single recorded workout session.
///
/// Construct via [`Workout::new`] for fresh entries or
/// [`Workout::rehydrated`] when restoring stored data; both run the same
/// checks and compute the description before the entity becomes observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    /// Unique id, derived from the creation timestamp.
    pub id: String,
    /// When the workout was recorded (UTC). Immutable.
    pub created_at: DateTime<Utc>,
    /// Map position where the workout was logged.
    pub position: Position,
    /// Distance in kilometers. Positive.
    pub distance_km: f64,
    /// Duration in minutes. Positive.
    pub duration_min: f64,
    /// Sport tag plus sport-specific data.
    pub details: SportDetails,
    /// Display string, computed once at construction ("Running on April 14").
    pub description: String,
    /// Times the rendered workout was selected. Session-local, not stored.
    clicks: u32,
}

impl Workout {
    /// Create a new workout recorded now.
    ///
    /// Bounds validation of user input happens at the submission boundary;
    /// the constructor re-checks the core metrics so a non-positive value
    /// can never produce an entity.
    pub fn new(
        details: SportDetails,
        position: Position,
        distance_km: f64,
        duration_min: f64,
    ) -> Result<Self> {
        let created_at = Utc::now();
        let id = id_from_timestamp(created_at);
        Self::build(id, created_at, details, position, distance_km, duration_min)
    }

    /// Rebuild a workout from stored fields.
    ///
    /// Id and timestamp are kept verbatim, never regenerated. Description
    /// and metric are recomputed from the base fields, never copied from
    /// storage. Used by the persistence layer on load.
    pub fn rehydrated(
        id: String,
        created_at: DateTime<Utc>,
        details: SportDetails,
        position: Position,
        distance_km: f64,
        duration_min: f64,
    ) -> Result<Self> {
        Self::build(id, created_at, details, position, distance_km, duration_min)
    }

    fn build(
        id: String,
        created_at: DateTime<Utc>,
        details: SportDetails,
        position: Position,
        distance_km: f64,
        duration_min: f64,
    ) -> Result<Self> {
        if !(distance_km > 0.0) || !(duration_min > 0.0) {
            return Err(AppError::InvalidMetric(format!(
                "distance {} km, duration {} min: both must be positive",
                distance_km, duration_min
            )));
        }

        let description = format!(
            "{} on {}",
            details.sport_type().display_name(),
            format_month_day(created_at)
        );

        Ok(Self {
            id,
            created_at,
            position,
            distance_km,
            duration_min,
            details,
            description,
            clicks: 0,
        })
    }

    pub fn sport_type(&self) -> SportType {
        self.details.sport_type()
    }

    /// Derived performance metric.
    ///
    /// Recomputed from the base fields on every call so the value can never
    /// drift from them, fresh or restored.
    pub fn metric(&self) -> Metric {
        match self.details {
            SportDetails::Running { .. } => {
                Metric::PaceMinPerKm(self.duration_min / self.distance_km)
            }
            SportDetails::Cycling { .. } => {
                Metric::SpeedKmPerH(self.distance_km / (self.duration_min / 60.0))
            }
        }
    }

    /// Record the user selecting this workout. Unbounded counter.
    pub fn record_click(&mut self) {
        self.clicks += 1;
    }

    /// How many times the workout has been selected this session.
    pub fn clicks(&self) -> u32 {
        self.clicks
    }
}

/// Last [`ID_DIGITS`] digits of the epoch-milliseconds timestamp.
///
/// Collisions are possible in principle but not with interactive single-user
/// entry; the log re-checks on append.
fn id_from_timestamp(at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(ID_DIGITS);
    millis[start..].to_string()
}
