//! JSON-file storage backend.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{Storage, StorageError};

/// A store persisted as a single JSON object on disk.
///
/// The whole map is loaded on open and rewritten on every `put`. The data
/// set is a handful of short strings, so write-through is cheaper than it
/// sounds and keeps the on-disk file inspectable.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open a store backed by `path`, loading any existing entries.
    ///
    /// A missing file starts the store empty. A file that exists but does
    /// not parse also starts the store empty, with a warning; its content
    /// will be replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "state file is not valid JSON, starting empty"
                    );
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .map(|entries| entries.get(key).cloned())
            .unwrap_or_default()
    }

    fn put(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value);
        self.flush(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path().join("state.json")).expect("open");
        assert_eq!(storage.get("cep"), None);
    }

    #[test]
    fn test_put_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");

        let storage = FileStorage::open(&path).expect("open");
        storage.put("cep", "01310100".to_string()).expect("put");
        drop(storage);

        let reopened = FileStorage::open(&path).expect("reopen");
        assert_eq!(reopened.get("cep").as_deref(), Some("01310100"));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").expect("write");

        let storage = FileStorage::open(&path).expect("open");
        assert_eq!(storage.get("cep"), None);

        // Writes replace the corrupt content
        storage.put("cep", "01310100".to_string()).expect("put");
        let reopened = FileStorage::open(&path).expect("reopen");
        assert_eq!(reopened.get("cep").as_deref(), Some("01310100"));
    }

    #[test]
    fn test_poisoned_lock_fails_the_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = std::sync::Arc::new(
            FileStorage::open(dir.path().join("state.json")).expect("open"),
        );

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

    #[test]
    fn test_put_overwrites_prior_entry() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path().join("state.json")).expect("open");
        storage.put("selectedSize", "Small".to_string()).expect("put");
        storage.put("selectedSize", "Large".to_string()).expect("put");
        assert_eq!(storage.get("selectedSize").as_deref(), Some("Large"));
    }
}
