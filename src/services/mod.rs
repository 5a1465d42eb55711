// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod persistence;
pub mod session;
pub mod tracker;

pub use session::{SessionController, SubmitReceipt, WorkoutForm};
pub use tracker::WorkoutLog;
