//! Durable local key/value store.

pub mod local;

pub use local::LocalStore;

/// Store keys as constants.
pub mod keys {
    /// The single key holding the serialized workout log.
    pub const WORKOUTS: &str = "workouts";
}
