//! Persistent key-value storage ports.
//!
//! This module provides:
//!
//! - [`PreferenceStorage`]: synchronous string get/set/remove
//! - [`MemoryStorage`]: shared in-memory map, optionally "unavailable"
//! - [`FileStorage`]: a JSON string map on disk that survives restarts
//!
//! Ports report failures as [`StorageError`]; deciding what a failure means is
//! left to [`PreferenceStore`](crate::PreferenceStore).

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Synchronous string storage scoped to one application.
pub trait PreferenceStorage {
    /// Reads the value stored under `key`, `Ok(None)` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStorage + ?Sized> PreferenceStorage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
