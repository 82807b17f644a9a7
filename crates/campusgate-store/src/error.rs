//! Error types for the store layer.

/// Errors that can occur while touching the persisted store.
///
/// Note what is NOT here: corrupt contents. A store that fails to parse is
/// treated as empty (logged, entries read as absent), because the session
/// layer defines malformed persisted state as a recoverable absence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store i/o failed: {0}")]
    Io(#[source] std::io::Error),

    /// Serializing the store contents for writing failed.
    #[error("store serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}
