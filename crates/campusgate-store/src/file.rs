//! File-backed store: a JSON document with wall-clock expiry.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::{SessionStore, StoreError};

/// One persisted entry. `expires_at` is unix seconds — the wall clock,
/// not the monotonic one, because the whole point of this store is to
/// survive a process restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileEntry {
    value: String,
    expires_at: u64,
}

/// A [`SessionStore`] backed by a single JSON file.
///
/// The file holds a key → entry map and is rewritten in full on every
/// mutation. That is fine at this scale: the session layer keeps exactly
/// one small record in it.
///
/// A file that is missing or fails to parse reads as an empty store — a
/// corrupt store must never take the application down, it just signs the
/// user out.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file (and its parent directory) is created on first write, not
    /// here; constructing a store is infallible.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and parses the backing file.
    ///
    /// Missing file → empty map. Corrupt file → warn and empty map.
    /// Only genuine I/O failures (permissions, etc.) become errors.
    fn load(&self) -> Result<HashMap<String, FileEntry>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "store file is corrupt, treating as empty"
                );
                Ok(HashMap::new())
            }
        }
    }

    /// Serializes and writes the full map back to disk.
    fn save(&self, entries: &HashMap<String, FileEntry>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StoreError::Io)?;
            }
        }
        let raw = serde_json::to_string(entries).map_err(StoreError::Serialize)?;
        fs::write(&self.path, raw).map_err(StoreError::Io)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.load()?;

        match entries.get(key) {
            Some(entry) if entry.expires_at > now_secs() => {
                Ok(Some(entry.value.clone()))
            }
            Some(_) => {
                // Expired entries are reported absent here and physically
                // dropped on the next mutation.
                tracing::debug!(key, "entry expired, treated as absent");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let mut entries = self.load()?;

        let now = now_secs();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.to_owned(),
            FileEntry {
                value: value.to_owned(),
                expires_at: now.saturating_add(ttl.as_secs()),
            },
        );

        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;

        // Only rewrite the file if there was something to delete; remove
        // on an absent key must not create the file.
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// Seconds since the unix epoch. A clock before 1970 is treated as 0.
fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    /// A unique path under the system temp dir, so parallel tests don't
    /// trample each other's files.
    fn temp_path(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir().join(format!(
            "campusgate-store-{tag}-{}-{nanos}.json",
            std::process::id()
        ))
    }

    /// Removes the backing file when the test ends, pass or fail.
    struct Cleanup(PathBuf);
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_get_missing_file_returns_none() {
        let path = temp_path("missing");
        let store = FileStore::new(&path);

        assert!(store.get("userData").expect("get should not fail").is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let path = temp_path("roundtrip");
        let _cleanup = Cleanup(path.clone());
        let store = FileStore::new(&path);

        store.set("userData", "{\"role\":\"student\"}", LONG_TTL).unwrap();

        assert_eq!(
            store.get("userData").unwrap().as_deref(),
            Some("{\"role\":\"student\"}")
        );
    }

    #[test]
    fn test_fresh_store_on_same_path_sees_value() {
        // Simulates a process restart: a brand-new FileStore over the same
        // file must read what the previous one wrote.
        let path = temp_path("restart");
        let _cleanup = Cleanup(path.clone());

        FileStore::new(&path).set("userData", "persisted", LONG_TTL).unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("userData").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_get_expired_entry_returns_none() {
        let path = temp_path("expired");
        let _cleanup = Cleanup(path.clone());
        let store = FileStore::new(&path);

        store.set("userData", "value", Duration::ZERO).unwrap();

        assert!(store.get("userData").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let path = temp_path("corrupt");
        let _cleanup = Cleanup(path.clone());
        fs::write(&path, "not json at all {{{").unwrap();

        let store = FileStore::new(&path);

        assert!(
            store.get("userData").expect("corrupt store must not error").is_none(),
            "corrupt contents should read as absent"
        );
    }

    #[test]
    fn test_corrupt_file_is_replaced_on_next_set() {
        let path = temp_path("corrupt-set");
        let _cleanup = Cleanup(path.clone());
        fs::write(&path, "garbage").unwrap();

        let store = FileStore::new(&path);
        store.set("userData", "fresh", LONG_TTL).unwrap();

        assert_eq!(store.get("userData").unwrap().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_remove_deletes_entry() {
        let path = temp_path("remove");
        let _cleanup = Cleanup(path.clone());
        let store = FileStore::new(&path);
        store.set("userData", "value", LONG_TTL).unwrap();

        store.remove("userData").unwrap();

        assert!(store.get("userData").unwrap().is_none());
    }

    #[test]
    fn test_remove_on_missing_file_does_not_create_it() {
        let path = temp_path("remove-missing");
        let store = FileStore::new(&path);

        store.remove("userData").unwrap();

        assert!(!path.exists(), "remove must not create the backing file");
    }

    #[test]
    fn test_set_prunes_expired_entries_from_disk() {
        let path = temp_path("prune");
        let _cleanup = Cleanup(path.clone());
        let store = FileStore::new(&path);

        store.set("dead", "value", Duration::ZERO).unwrap();
        store.set("live", "value", LONG_TTL).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("dead"), "expired entry should be gone from disk");
        assert!(raw.contains("live"));
    }
}
