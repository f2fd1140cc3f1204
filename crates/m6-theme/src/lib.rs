//! # m6-theme - persisted dark/light preference
//!
//! `m6-theme` owns a single boolean, "is dark mode on", and keeps two pieces of
//! global state in step with it: a `dark` class on the display root and a
//! `"true"`/`"false"` string in persistent key-value storage.
//!
//! ## Resolution
//!
//! The initial value is computed once, at mount, from the first source that
//! has an answer:
//!
//! 1. A `dark` class already on the root (a bootstrap script set it to avoid
//!    flashing the wrong palette on first paint)
//! 2. A value stored under the storage key (default `"m6-ui-theme"`)
//! 3. The host's ambient color-scheme preference, light if it reports none
//!
//! ## Ports
//!
//! Global state is injected, never reached for:
//!
//! - [`PreferenceStorage`]: [`MemoryStorage`] or the on-disk [`FileStorage`]
//! - [`DisplayRoot`]: [`ClassList`]
//! - [`AmbientSignal`]: [`SystemAmbient`] (OS, via `dark-light`) or [`FixedAmbient`]
//!
//! Storage failures are logged through `tracing` and absorbed; the in-memory
//! value stays authoritative for the session.
//!
//! ## Quick start
//!
//! ```rust
//! use m6_theme::{
//!     ClassList, FixedAmbient, MemoryStorage, PreferenceStore, StorageKey, ThemeToggle,
//!     DARK_CLASS,
//! };
//!
//! let storage = MemoryStorage::new();
//! let root = ClassList::new();
//! let store = PreferenceStore::new(storage.clone(), root.clone(), FixedAmbient::dark());
//!
//! let mut theme = ThemeToggle::mount(store, StorageKey::default());
//! assert!(theme.state().is_dark_mode);
//! assert_eq!(storage.peek("m6-ui-theme").as_deref(), Some("true"));
//! assert!(root.contains(DARK_CLASS));
//!
//! theme.toggle_dark_mode();
//! theme.flush();
//! assert!(!root.contains(DARK_CLASS));
//! ```

pub mod ambient;
pub mod config;
pub mod display;
pub mod error;
pub mod hook;
pub mod key;
pub mod preference;
pub mod storage;
pub mod store;

pub use ambient::{
    reset_ambient_detector, set_ambient_detector, AmbientSignal, FixedAmbient, SystemAmbient,
};
pub use config::{config_root_dir, default_storage_path, ThemeConfig};
pub use display::{ClassList, DisplayRoot, DARK_CLASS};
pub use error::{StorageError, ThemeError};
pub use hook::{SubscriptionId, ThemeState, ThemeToggle, Toggler};
pub use key::{StorageKey, DEFAULT_STORAGE_KEY};
pub use preference::ThemePreference;
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
pub use store::{PreferenceStore, ResolvedFrom};
