//! Expiry envelope over a storage backend.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Storage, StorageError};

/// A stored value paired with its write time (milliseconds since epoch).
///
/// An entry is valid while `now - timestamp < ttl`. Stale entries are not
/// deleted; they are simply ignored on read and overwritten on the next
/// write, which matches how the page treats them as "absent".
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CachedEntry<T> {
    pub value: T,
    pub timestamp: i64,
}

/// A key-value store whose reads honor a fixed time-to-live.
///
/// Every `write` wraps the value in a [`CachedEntry`] stamped with the
/// current time. Every `read` checks the stamp lazily; there is no eviction
/// task. Missing, corrupt, and expired entries all degrade silently to the
/// caller-provided default.
#[derive(Clone)]
pub struct ExpiringStore {
    storage: Arc<dyn Storage>,
    ttl: Duration,
}

impl ExpiringStore {
    /// Wrap `storage` with a `ttl` expiry window.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, ttl: Duration) -> Self {
        Self { storage, ttl }
    }

    /// Store `value` under `key` with the current timestamp, overwriting
    /// any prior entry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the backend write fails.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let entry = CachedEntry {
            value,
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        let json = serde_json::to_string(&entry)?;
        self.storage.put(key, json)
    }

    /// Return the value stored under `key` if it is still within the TTL
    /// window, `default` otherwise.
    ///
    /// Never fails: an unreadable or stale entry is treated as absent.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.storage.get(key) else {
            return default;
        };
        let Ok(entry) = serde_json::from_str::<CachedEntry<T>>(&raw) else {
            tracing::debug!(key, "ignoring unreadable cache entry");
            return default;
        };

        let age_ms = chrono::Utc::now().timestamp_millis() - entry.timestamp;
        let ttl_ms = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        if age_ms < ttl_ms {
            entry.value
        } else {
            tracing::debug!(key, age_ms, "cache entry expired");
            default
        }
    }
}
