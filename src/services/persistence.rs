// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Save/restore of the workout log through the local store.
//!
//! Storage captures plain data fields only. Restoring therefore goes
//! through an explicit rehydration step that dispatches on the stored kind
//! tag and rebuilds each entity through the same constructor path as fresh
//! creation. Stored description/metric values are convenience output for
//! other readers of the file; on load they are ignored and recomputed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Metric, Position, SportDetails, SportType, Workout};
use crate::services::tracker::WorkoutLog;
use crate::store::{keys, LocalStore};

/// One workout as stored. Flat map, camelCase field names.
///
/// No version field; readers treat its absence as version 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredWorkout {
    id: String,
    kind: String,
    created_at: DateTime<Utc>,
    position: Position,
    distance_km: f64,
    duration_min: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    cadence_spm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elevation_gain_m: Option<f64>,

    // Convenience fields, written on save and ignored on load.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pace_min_per_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed_km_per_h: Option<f64>,
}

impl StoredWorkout {
    fn from_workout(workout: &Workout) -> Self {
        let (cadence_spm, elevation_gain_m) = match workout.details {
            SportDetails::Running { cadence_spm } => (Some(cadence_spm), None),
            SportDetails::Cycling { elevation_gain_m } => (None, Some(elevation_gain_m)),
        };
        let (pace_min_per_km, speed_km_per_h) = match workout.metric() {
            Metric::PaceMinPerKm(v) => (Some(v), None),
            Metric::SpeedKmPerH(v) => (None, Some(v)),
        };

        Self {
            id: workout.id.clone(),
            kind: workout.sport_type().tag().to_string(),
            created_at: workout.created_at,
            position: workout.position,
            distance_km: workout.distance_km,
            duration_min: workout.duration_min,
            cadence_spm,
            elevation_gain_m,
            description: Some(workout.description.clone()),
            pace_min_per_km,
            speed_km_per_h,
        }
    }

    /// Rebuild a full workout, dispatching on the stored kind tag.
    ///
    /// Id and timestamp are adopted verbatim; everything derived is
    /// recomputed. A record that names a kind but lacks that kind's field,
    /// or carries an unknown tag, is corrupt.
    fn rehydrate(self) -> Result<Workout> {
        let details = match SportType::from_tag(&self.kind) {
            Some(SportType::Running) => SportDetails::Running {
                cadence_spm: self.cadence_spm.ok_or_else(|| {
                    AppError::CorruptState(format!(
                        "running workout {} has no cadenceSpm",
                        self.id
                    ))
                })?,
            },
            Some(SportType::Cycling) => SportDetails::Cycling {
                elevation_gain_m: self.elevation_gain_m.ok_or_else(|| {
                    AppError::CorruptState(format!(
                        "cycling workout {} has no elevationGainM",
                        self.id
                    ))
                })?,
            },
            None => {
                return Err(AppError::CorruptState(format!(
                    "workout {} has unknown kind tag {:?}",
                    self.id, self.kind
                )))
            }
        };

        Workout::rehydrated(
            self.id,
            self.created_at,
            details,
            self.position,
            self.distance_km,
            self.duration_min,
        )
        // A non-positive stored metric is tampered or broken data, not input
        .map_err(|e| AppError::CorruptState(e.to_string()))
    }
}

/// Serialize the full log and write it under the workouts key.
///
/// The whole value is buffered before the store issues its single write.
pub fn save(log: &WorkoutLog, store: &LocalStore) -> Result<()> {
    let records: Vec<StoredWorkout> = log
        .workouts()
        .iter()
        .map(StoredWorkout::from_workout)
        .collect();
    let value = serde_json::to_string(&records)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serializing workout log: {e}")))?;

    store.set(keys::WORKOUTS, &value)?;
    tracing::debug!(count = records.len(), "Workout log saved");
    Ok(())
}

/// Load the stored log, rehydrating every record.
///
/// An absent key yields an empty log. A present but malformed value is a
/// corrupt-state error; the caller picks the policy (the controller starts
/// empty and warns).
pub fn load(store: &LocalStore) -> Result<WorkoutLog> {
    let Some(value) = store.get(keys::WORKOUTS)? else {
        return Ok(WorkoutLog::new());
    };

    let records: Vec<StoredWorkout> = serde_json::from_str(&value)
        .map_err(|e| AppError::CorruptState(format!("workout log does not parse: {e}")))?;

    let mut workouts = Vec::with_capacity(records.len());
    for record in records {
        workouts.push(record.rehydrate()?);
    }

    let mut log = WorkoutLog::new();
    log.replace_all(workouts);
    tracing::debug!(count = log.len(), "Workout log restored");
    Ok(log)
}

/// Remove the stored log entirely. Reset path only.
pub fn clear(store: &LocalStore) -> Result<()> {
    store.remove(keys::WORKOUTS)
}
