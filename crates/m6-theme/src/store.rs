//! Resolution and persistence of the dark-mode flag.
//!
//! [`PreferenceStore`] owns the three ports the flag depends on and applies
//! the precedence rules:
//!
//! 1. **Display marker**: a root already carrying [`DARK_CLASS`] (set by a
//!    bootstrap script before mount) wins outright
//! 2. **Stored value**: a non-empty value under the key; only `"true"` is dark
//! 3. **Ambient signal**: the host's color-scheme preference, light if silent
//!
//! Storage failures never surface. A failed read falls through to the ambient
//! signal; a failed write is logged and skipped, leaving the marker and the
//! caller's in-memory value authoritative.

use tracing::{debug, warn};

use crate::ambient::AmbientSignal;
use crate::display::{DisplayRoot, DARK_CLASS};
use crate::key::StorageKey;
use crate::preference::{decode_stored, encode_stored};
use crate::storage::PreferenceStorage;

/// Where an initial value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    DisplayMarker,
    Storage,
    Ambient,
}

/// Reads and writes one persisted boolean through injected ports.
#[derive(Debug)]
pub struct PreferenceStore<S, D, A> {
    storage: S,
    display: D,
    ambient: A,
}

impl<S, D, A> PreferenceStore<S, D, A>
where
    S: PreferenceStorage,
    D: DisplayRoot,
    A: AmbientSignal,
{
    pub fn new(storage: S, display: D, ambient: A) -> Self {
        Self {
            storage,
            display,
            ambient,
        }
    }

    /// Computes the initial flag for `key`. Has no side effects.
    pub fn resolve_initial(&self, key: &StorageKey) -> bool {
        self.resolve_with_source(key).0
    }

    /// Like [`resolve_initial`](Self::resolve_initial), also reporting which
    /// source decided.
    pub fn resolve_with_source(&self, key: &StorageKey) -> (bool, ResolvedFrom) {
        if self.display.has_class(DARK_CLASS) {
            debug!(%key, "theme resolved from pre-set display marker");
            return (true, ResolvedFrom::DisplayMarker);
        }

        if let Some(is_dark) = self.read_stored(key) {
            debug!(%key, is_dark, "theme resolved from storage");
            return (is_dark, ResolvedFrom::Storage);
        }

        let is_dark = self.ambient.prefers_dark().unwrap_or(false);
        debug!(%key, is_dark, "theme resolved from ambient signal");
        (is_dark, ResolvedFrom::Ambient)
    }

    /// Writes the flag under `key` and syncs the display marker.
    ///
    /// Idempotent. A storage failure is logged and otherwise ignored.
    pub fn persist(&mut self, key: &StorageKey, is_dark: bool) {
        self.display.set_class(DARK_CLASS, is_dark);

        match self.storage.set(key.as_str(), encode_stored(is_dark)) {
            Ok(()) => debug!(%key, is_dark, "theme preference persisted"),
            Err(err) => warn!(%key, error = %err, "could not persist theme preference"),
        }
    }

    /// Drops any stored value for `key` so the next resolution falls back to
    /// the ambient signal. The display marker is left as is.
    pub fn forget(&mut self, key: &StorageKey) {
        if let Err(err) = self.storage.remove(key.as_str()) {
            warn!(%key, error = %err, "could not clear stored theme preference");
        }
    }

    /// The stored flag, if any. Read failures count as absent.
    pub fn stored(&self, key: &StorageKey) -> Option<bool> {
        self.read_stored(key)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn ambient(&self) -> &A {
        &self.ambient
    }

    fn read_stored(&self, key: &StorageKey) -> Option<bool> {
        match self.storage.get(key.as_str()) {
            Ok(raw) => raw.as_deref().and_then(decode_stored),
            Err(err) => {
                warn!(%key, error = %err, "could not read stored theme preference");
                None
            }
        }
    }
}
