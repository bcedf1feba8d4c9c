//! Persistent key-value storage for user selections.
//!
//! # Architecture
//!
//! The page treats storage the way a browser page treats `localStorage`:
//! an injected key-value store whose only capabilities are `get` and `put`.
//! Two backends implement the [`Storage`] trait:
//!
//! - [`MemoryStorage`] - `HashMap` behind a mutex, used in tests
//! - [`FileStorage`] - a single JSON file on disk, write-through on `put`
//!
//! [`ExpiringStore`] layers the 15-minute expiry envelope on top of any
//! backend; raw backends never interpret the values they hold.

mod expiring;
mod file;
mod memory;

pub use expiring::{CachedEntry, ExpiringStore};
pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Fixed keys under which selection fields are persisted.
///
/// Each key carries its own expiry clock; one field going stale never
/// invalidates the others.
pub mod keys {
    pub const MAIN_IMAGE: &str = "mainImage";
    pub const SELECTED_SIZE: &str = "selectedSize";
    pub const SELECTED_COLOR: &str = "selectedColor";
    pub const CEP: &str = "cep";
    pub const ADDRESS: &str = "address";
}

/// Errors that can occur when writing to a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The in-process lock over the entries was poisoned by a panic.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Minimal key-value capability surface.
///
/// Reads are infallible by contract: a backend that cannot produce a value
/// returns `None` and the caller falls back to a default. Only writes can
/// fail, and a `put` that returns `Ok` has actually persisted the value.
pub trait Storage: Send + Sync {
    /// Return the raw string stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any prior entry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot persist the value.
    fn put(&self, key: &str, value: String) -> Result<(), StorageError>;
}
