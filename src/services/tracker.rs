// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ordered, append-only log of recorded workouts.

use crate::error::{AppError, Result};
use crate::models::Workout;

/// In-memory collection of workouts, insertion order preserved.
///
/// Owns its entities exclusively. Lookups hand out shared references; the
/// only mutation besides append/replace is the select path.
#[derive(Debug, Default)]
pub struct WorkoutLog {
    workouts: Vec<Workout>,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a workout, rejecting id collisions.
    ///
    /// A collision means the id generator misbehaved, not bad input. The
    /// log is left unchanged on failure.
    pub fn append(&mut self, workout: Workout) -> Result<()> {
        if self.find_by_id(&workout.id).is_some() {
            return Err(AppError::DuplicateId(workout.id.clone()));
        }
        self.workouts.push(workout);
        Ok(())
    }

    /// Look up a workout by id. Not found is a normal outcome.
    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Record a selection of the given workout.
    ///
    /// Returns `false` when the id is unknown.
    pub fn record_click(&mut self, id: &str) -> bool {
        match self.workouts.iter_mut().find(|w| w.id == id) {
            Some(workout) => {
                workout.record_click();
                true
            }
            None => false,
        }
    }

    /// Discard current contents and adopt the given entities in order.
    ///
    /// Restore path only; the persistence layer has already rehydrated
    /// every entity.
    pub fn replace_all(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    /// All workouts in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Drop every workout. Reset path only.
    pub fn clear(&mut self) {
        self.workouts.clear();
    }
}
