//! Error types.
//!
//! [`StorageError`] is what storage ports report; the preference store absorbs
//! it and never hands it to callers of resolve/persist/toggle. [`ThemeError`]
//! covers configuration-time failures only.

use std::path::PathBuf;

/// A failure reported by a [`PreferenceStorage`](crate::PreferenceStorage) port.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Storage is not accessible in this environment.
    #[error("persistent storage is unavailable")]
    Unavailable,
    /// Reading or writing the backing file failed.
    #[error("storage file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file exists but does not hold a string map.
    #[error("storage file {path:?} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while building a theme setup from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The storage key is empty or contains whitespace/control characters.
    #[error("invalid storage key '{0}': must be a non-empty identifier")]
    InvalidStorageKey(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("cannot read config {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}
