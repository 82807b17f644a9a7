//! Persisted key-value stores for Campusgate.
//!
//! Provides the [`SessionStore`] trait that abstracts over the
//! cookie-equivalent durability mechanism: a tiny string-keyed store where
//! every value carries an expiry, values outlive a "reload", and a missing
//! or expired entry simply reads as absent.
//!
//! Two implementations ship here:
//!
//! - [`MemoryStore`] — in-process, monotonic-clock expiry. Used in tests
//!   and anywhere a simulated restart shares the store handle.
//! - [`FileStore`] — a JSON file with wall-clock expiry. The durable
//!   variant real deployments of the demo use.
//!
//! The store never interprets its values; the session layer decides what
//! gets serialized into them.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;
use std::time::Duration;

/// A string-keyed store with per-entry expiry.
///
/// # Semantics
///
/// - `set` overwrites any existing entry under the key and restarts its
///   lifetime at `ttl` from now.
/// - `get` returns `None` for keys that were never set, were removed, or
///   whose ttl has elapsed. Expiry is observed lazily on read; callers
///   never see a stale value.
/// - `remove` on an absent key is a no-op.
///
/// Methods take `&self`: implementations use interior mutability so a
/// shared handle (e.g. an `Arc<MemoryStore>`) can be read back after the
/// owning session manager is dropped — that is how tests simulate a
/// process restart.
///
/// # Errors
///
/// Only real I/O or serialization failures surface as [`StoreError`].
/// A corrupt store is NOT an error at this level of the API: implementations
/// log it and report the affected entries as absent, because the layer
/// above treats "malformed" and "missing" identically.
pub trait SessionStore: Send + Sync + 'static {
    /// Reads the live (non-expired) value under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, expiring `ttl` from now.
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Deletes the entry under `key`, if any.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// A shared handle to a store is itself a store.
///
/// Lets callers keep one `Arc<MemoryStore>` for later inspection while
/// handing a clone of it to the session manager.
impl<S: SessionStore> SessionStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        (**self).set(key, value, ttl)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
