//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{Storage, StorageError};

/// A `HashMap`-backed store. Nothing survives a restart; intended for
/// tests and local experiments.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .map(|entries| entries.get(key).cloned())
            .unwrap_or_default()
    }

    fn put(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_returns_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("absent"), None);
    }

    #[test]
    fn test_put_then_get() {
        let storage = MemoryStorage::new();
        storage.put("cep", "01310100".to_string()).expect("put");
        assert_eq!(storage.get("cep").as_deref(), Some("01310100"));
    }

    #[test]
    fn test_put_overwrites() {
        let storage = MemoryStorage::new();
        storage.put("cep", "01310100".to_string()).expect("put");
        storage.put("cep", "20040010".to_string()).expect("put");
        assert_eq!(storage.get("cep").as_deref(), Some("20040010"));
    }

    #[test]
    fn test_poisoned_lock_fails_the_write() {
        let storage = std::sync::Arc::new(MemoryStorage::new());

        let poisoner = std::sync::Arc::clone(&storage);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.lock().expect("lock");
            panic!("poison the entries lock");
        })
        .join();

        assert!(matches!(
            storage.put("cep", "01310100".to_string()),
            Err(StorageError::Poisoned)
        ));
    }
}
