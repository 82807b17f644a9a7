//! Error types for the session layer.
//!
//! These never cross the transition-operation boundary: the contract is
//! that operations communicate outcomes through notifications, not
//! errors. `AuthError` exists for the internal persistence paths
//! (restore at startup, persist on commit), where the manager maps it to
//! a warning log plus a safe fallback.

use campusgate_store::StoreError;

/// A failure while reading or writing the persisted session record.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The persisted store itself failed.
    #[error("session store failed: {0}")]
    Store(#[from] StoreError),

    /// The stored record exists but is not a valid session profile.
    /// Callers treat this exactly like an absent record.
    #[error("persisted session record is malformed: {0}")]
    MalformedRecord(#[source] serde_json::Error),
}
