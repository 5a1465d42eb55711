// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared across the crate.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A non-positive core metric reached the entity constructor. Bounds
    /// checking happens at the submission boundary, so this is defensive.
    #[error("Invalid workout metric: {0}")]
    InvalidMetric(String),

    /// User-submitted form fields failed the finite/positive checks.
    /// Recoverable: surface the message and re-prompt.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A workout id collided inside the log. Indicates a broken invariant,
    /// not bad user input.
    #[error("Duplicate workout id: {0}")]
    DuplicateId(String),

    /// The durable store could not be written or read.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Stored state exists but could not be parsed or rehydrated.
    #[error("Corrupt stored state: {0}")]
    CorruptState(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether the session can keep running after this error (degrade to
    /// in-memory operation or re-prompt the user) instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::StorageUnavailable(_) | AppError::CorruptState(_)
        )
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
