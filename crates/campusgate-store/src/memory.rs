//! In-memory store: a HashMap with monotonic-clock expiry.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::{SessionStore, StoreError};

/// One stored value and the instant it stops being valid.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

/// An in-process [`SessionStore`].
///
/// Expiry uses `Instant` — the monotonic clock — because entries never
/// need to outlive the process. Expired entries are dropped lazily the
/// next time the key is read; nothing sweeps in the background.
///
/// The map sits behind a `Mutex` so the store can be shared through an
/// `Arc`. Contention is a non-issue: every operation is a short critical
/// section and the execution model above this is effectively
/// single-threaded.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the map. A poisoned lock still holds consistent data (each
    /// critical section is a single insert/remove), so recover it rather
    /// than propagating the panic.
    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.entries();

        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                Ok(Some(entry.value.clone()))
            }
            Some(_) => {
                // Expired: drop it now so the map doesn't accumulate
                // dead entries, then report it as absent.
                entries.remove(key);
                tracing::debug!(key, "entry expired, treated as absent");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let entry = Entry {
            value: value.to_owned(),
            expires_at: Instant::now() + ttl,
        };
        self.entries().insert(key.to_owned(), entry);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries().remove(key);
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// A week, the ttl the session layer uses in practice.
    const LONG_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    #[test]
    fn test_get_missing_key_returns_none() {
        let store = MemoryStore::new();

        assert!(store.get("userData").expect("get should not fail").is_none());
    }

    #[test]
    fn test_set_then_get_returns_value() {
        let store = MemoryStore::new();
        store.set("userData", "{\"role\":\"admin\"}", LONG_TTL).unwrap();

        let value = store.get("userData").unwrap();

        assert_eq!(value.as_deref(), Some("{\"role\":\"admin\"}"));
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let store = MemoryStore::new();
        store.set("userData", "old", LONG_TTL).unwrap();
        store.set("userData", "new", LONG_TTL).unwrap();

        assert_eq!(store.get("userData").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_get_expired_entry_returns_none() {
        // A zero ttl expires the entry at the instant it is written.
        let store = MemoryStore::new();
        store.set("userData", "value", Duration::ZERO).unwrap();

        assert!(store.get("userData").unwrap().is_none());
    }

    #[test]
    fn test_remove_deletes_entry() {
        let store = MemoryStore::new();
        store.set("userData", "value", LONG_TTL).unwrap();

        store.remove("userData").unwrap();

        assert!(store.get("userData").unwrap().is_none());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::new();

        store.remove("never-set").expect("remove should not fail");
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::new();
        store.set("a", "1", LONG_TTL).unwrap();
        store.set("b", "2", Duration::ZERO).unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert!(store.get("b").unwrap().is_none(), "b expired independently");
    }

    #[test]
    fn test_shared_arc_observes_writes() {
        // The Arc blanket impl is how tests hand the same store to a
        // manager and inspect it afterwards.
        let store = std::sync::Arc::new(MemoryStore::new());
        let handle = std::sync::Arc::clone(&store);

        handle.set("userData", "value", LONG_TTL).unwrap();

        assert_eq!(store.get("userData").unwrap().as_deref(), Some("value"));
    }
}
