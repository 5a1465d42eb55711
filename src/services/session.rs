// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session controller: turns user events into log mutations and persistence.
//!
//! One controller is built at process entry and threaded through
//! explicitly. It owns the log and the store handle; validation happens
//! here, before anything reaches the domain model.

use crate::error::{AppError, Result};
use crate::models::{Position, SportDetails, SportType, Workout};
use crate::services::persistence;
use crate::services::tracker::WorkoutLog;
use crate::store::LocalStore;

/// Raw form fields as submitted by the UI, before validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutForm {
    pub distance_km: Option<f64>,
    pub duration_min: Option<f64>,
    /// Running only.
    pub cadence_spm: Option<f64>,
    /// Cycling only.
    pub elevation_gain_m: Option<f64>,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    /// Id of the newly created workout.
    pub id: String,
    /// False when the save failed and the session degraded to memory-only.
    pub persisted: bool,
}

/// Drives a workout session.
pub struct SessionController {
    store: LocalStore,
    log: WorkoutLog,
}

impl SessionController {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            log: WorkoutLog::new(),
        }
    }

    /// Restore the log from the store.
    ///
    /// Returns the number of workouts restored. Corrupt state leaves the
    /// log empty and propagates the error so the caller can decide whether
    /// to warn or abort.
    pub fn restore(&mut self) -> Result<usize> {
        self.log = persistence::load(&self.store)?;
        Ok(self.log.len())
    }

    /// The only entity-creation entry point reachable from outside.
    ///
    /// Validates the raw fields before construction; a validation failure
    /// mutates neither the log nor the store. On success the entity is
    /// created, appended, and the whole log is saved. A failed save keeps
    /// the entity and degrades to in-memory-only operation.
    pub fn submit_new_workout(
        &mut self,
        sport: SportType,
        position: Position,
        form: &WorkoutForm,
    ) -> Result<SubmitReceipt> {
        let (details, distance_km, duration_min) = validate(sport, position, form)?;

        let workout = Workout::new(details, position, distance_km, duration_min)?;
        let id = workout.id.clone();

        if let Err(e) = self.log.append(workout) {
            tracing::error!(error = %e, "Workout id collision on append");
            return Err(e);
        }

        let persisted = match persistence::save(&self.log, &self.store) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Save failed; continuing in memory only");
                false
            }
        };

        tracing::info!(id = %id, sport = sport.tag(), persisted, "Workout recorded");
        Ok(SubmitReceipt { id, persisted })
    }

    /// Record a selection of a workout. Unknown ids are a normal outcome.
    pub fn select_workout(&mut self, id: &str) -> bool {
        self.log.record_click(id)
    }

    /// Clear the store and the in-memory log. Irreversible.
    pub fn reset_all(&mut self) -> Result<()> {
        persistence::clear(&self.store)?;
        self.log.clear();
        tracing::info!("Workout log reset");
        Ok(())
    }

    pub fn log(&self) -> &WorkoutLog {
        &self.log
    }
}

// ─── Validation ──────────────────────────────────────────────

/// Validate raw form fields into constructor inputs.
///
/// Running requires distance, duration and cadence finite and positive,
/// cadence a whole number. Cycling checks elevation for presence and
/// finiteness only: negative elevation gain records a net descent.
fn validate(
    sport: SportType,
    position: Position,
    form: &WorkoutForm,
) -> Result<(SportDetails, f64, f64)> {
    if !position.is_finite() {
        return Err(AppError::Validation(
            "position must be a pair of finite coordinates".to_string(),
        ));
    }

    let distance_km = require_positive("distance", form.distance_km)?;
    let duration_min = require_positive("duration", form.duration_min)?;

    let details = match sport {
        SportType::Running => {
            let cadence = require_positive("cadence", form.cadence_spm)?;
            if cadence.fract() != 0.0 || cadence > f64::from(u32::MAX) {
                return Err(AppError::Validation(
                    "cadence must be a whole number of steps per minute".to_string(),
                ));
            }
            SportDetails::Running {
                cadence_spm: cadence as u32,
            }
        }
        SportType::Cycling => {
            let elevation = form
                .elevation_gain_m
                .ok_or_else(|| AppError::Validation("elevation gain is required".to_string()))?;
            if !elevation.is_finite() {
                return Err(AppError::Validation(
                    "elevation gain must be a finite number".to_string(),
                ));
            }
            SportDetails::Cycling {
                elevation_gain_m: elevation,
            }
        }
    };

    Ok((details, distance_km, duration_min))
}

fn require_positive(field: &str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(_) => Err(AppError::Validation(format!(
            "{field} must be a positive number"
        ))),
        None => Err(AppError::Validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position() -> Position {
        Position::new(39.0, -12.0)
    }

    fn running_form() -> WorkoutForm {
        WorkoutForm {
            distance_km: Some(5.2),
            duration_min: Some(24.0),
            cadence_spm: Some(178.0),
            elevation_gain_m: None,
        }
    }

    fn cycling_form() -> WorkoutForm {
        WorkoutForm {
            distance_km: Some(27.0),
            duration_min: Some(95.0),
            cadence_spm: None,
            elevation_gain_m: Some(523.0),
        }
    }

    #[test]
    fn test_submit_running_workout() {
        let mut session = SessionController::new(LocalStore::in_memory());

        let receipt = session
            .submit_new_workout(SportType::Running, position(), &running_form())
            .unwrap();

        assert!(receipt.persisted);
        assert_eq!(session.log().len(), 1);
        let workout = session.log().find_by_id(&receipt.id).unwrap();
        assert_eq!(workout.sport_type(), SportType::Running);
        assert_eq!(
            workout.details,
            SportDetails::Running { cadence_spm: 178 }
        );
    }

    #[test]
    fn test_negative_distance_rejected_without_mutation() {
        let mut session = SessionController::new(LocalStore::in_memory());
        let form = WorkoutForm {
            distance_km: Some(-1.0),
            duration_min: Some(20.0),
            cadence_spm: Some(150.0),
            elevation_gain_m: None,
        };

        let result = session.submit_new_workout(SportType::Running, position(), &form);

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(session.log().is_empty());
        // The store was never written either
        assert!(persistence::load(&session.store).unwrap().is_empty());
    }

    #[test]
    fn test_missing_cadence_rejected() {
        let mut session = SessionController::new(LocalStore::in_memory());
        let form = WorkoutForm {
            distance_km: Some(5.0),
            duration_min: Some(25.0),
            cadence_spm: None,
            elevation_gain_m: None,
        };

        let result = session.submit_new_workout(SportType::Running, position(), &form);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_fractional_cadence_rejected() {
        let mut session = SessionController::new(LocalStore::in_memory());
        let form = WorkoutForm {
            cadence_spm: Some(170.5),
            ..running_form()
        };

        let result = session.submit_new_workout(SportType::Running, position(), &form);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_non_finite_duration_rejected() {
        let mut session = SessionController::new(LocalStore::in_memory());
        let form = WorkoutForm {
            duration_min: Some(f64::NAN),
            ..running_form()
        };

        let result = session.submit_new_workout(SportType::Running, position(), &form);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_non_finite_position_rejected() {
        let mut session = SessionController::new(LocalStore::in_memory());

        let result = session.submit_new_workout(
            SportType::Running,
            Position::new(f64::NAN, -12.0),
            &running_form(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_negative_elevation_gain_accepted() {
        let mut session = SessionController::new(LocalStore::in_memory());
        let form = WorkoutForm {
            elevation_gain_m: Some(-210.0),
            ..cycling_form()
        };

        let receipt = session
            .submit_new_workout(SportType::Cycling, position(), &form)
            .unwrap();

        let workout = session.log().find_by_id(&receipt.id).unwrap();
        assert_eq!(
            workout.details,
            SportDetails::Cycling {
                elevation_gain_m: -210.0
            }
        );
    }

    #[test]
    fn test_missing_elevation_rejected() {
        let mut session = SessionController::new(LocalStore::in_memory());
        let form = WorkoutForm {
            elevation_gain_m: None,
            ..cycling_form()
        };

        let result = session.submit_new_workout(SportType::Cycling, position(), &form);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_select_workout() {
        let mut session = SessionController::new(LocalStore::in_memory());
        let receipt = session
            .submit_new_workout(SportType::Cycling, position(), &cycling_form())
            .unwrap();

        assert!(session.select_workout(&receipt.id));
        assert!(session.select_workout(&receipt.id));
        assert_eq!(session.log().find_by_id(&receipt.id).unwrap().clicks(), 2);

        assert!(!session.select_workout("0000000000"));
    }

    #[test]
    fn test_reset_all_clears_log_and_store() {
        let mut session = SessionController::new(LocalStore::in_memory());
        session
            .submit_new_workout(SportType::Running, position(), &running_form())
            .unwrap();

        session.reset_all().unwrap();

        assert!(session.log().is_empty());
        assert!(persistence::load(&session.store).unwrap().is_empty());
    }
}
