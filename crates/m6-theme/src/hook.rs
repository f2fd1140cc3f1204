//! Reactive owner of one theme preference.
//!
//! A [`ThemeToggle`] is mounted once per host. Mounting resolves the initial
//! value through its [`PreferenceStore`] and immediately runs the persist
//! effect for it. After that the value only changes through toggles.
//!
//! Toggles are queued rather than applied in place: event callbacks hold a
//! cloneable [`Toggler`] and call it synchronously, and the host runs
//! [`ThemeToggle::flush`] once the handler has returned. Each queued flip is
//! applied on its own, in call order:
//!
//! 1. the new value is committed and becomes visible through [`ThemeToggle::state`]
//! 2. subscribers are notified (the render step)
//! 3. the store persists it exactly once (the effect step)
//!
//! # Example
//!
//! ```rust
//! use m6_theme::{
//!     ClassList, FixedAmbient, MemoryStorage, PreferenceStore, StorageKey, ThemeToggle,
//! };
//!
//! let store =
//!     PreferenceStore::new(MemoryStorage::new(), ClassList::new(), FixedAmbient::light());
//! let mut theme = ThemeToggle::mount(store, StorageKey::default());
//! assert!(!theme.state().is_dark_mode);
//!
//! let on_click = theme.toggler();
//! on_click.toggle_dark_mode();
//! theme.flush();
//! assert!(theme.state().is_dark_mode);
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::ambient::AmbientSignal;
use crate::display::DisplayRoot;
use crate::key::StorageKey;
use crate::preference::ThemePreference;
use crate::storage::PreferenceStorage;
use crate::store::PreferenceStore;

/// Snapshot of the committed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark_mode: bool,
}

impl ThemeState {
    pub fn preference(self) -> ThemePreference {
        ThemePreference::from_dark(self.is_dark_mode)
    }
}

/// Handle that schedules flips on the [`ThemeToggle`] it came from.
#[derive(Debug, Clone)]
pub struct Toggler {
    pending: Rc<Cell<usize>>,
}

impl Toggler {
    /// Schedules exactly one flip, applied on the next flush.
    pub fn toggle_dark_mode(&self) {
        self.pending.set(self.pending.get() + 1);
    }
}

/// Identifies a subscriber for [`ThemeToggle::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(ThemePreference)>;

/// Owns one preference and keeps the display marker and storage in step with
/// it.
pub struct ThemeToggle<S, D, A> {
    store: PreferenceStore<S, D, A>,
    key: StorageKey,
    is_dark_mode: bool,
    pending: Rc<Cell<usize>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S, D, A> ThemeToggle<S, D, A>
where
    S: PreferenceStorage,
    D: DisplayRoot,
    A: AmbientSignal,
{
    /// Resolves the initial value once and runs its persist effect.
    pub fn mount(store: PreferenceStore<S, D, A>, key: StorageKey) -> Self {
        let mut toggle = Self {
            is_dark_mode: store.resolve_initial(&key),
            store,
            key,
            pending: Rc::new(Cell::new(0)),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        debug!(key = %toggle.key, is_dark_mode = toggle.is_dark_mode, "theme mounted");
        toggle.store.persist(&toggle.key, toggle.is_dark_mode);
        toggle
    }

    pub fn state(&self) -> ThemeState {
        ThemeState {
            is_dark_mode: self.is_dark_mode,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        ThemePreference::from_dark(self.is_dark_mode)
    }

    pub fn key(&self) -> &StorageKey {
        &self.key
    }

    /// A handle event callbacks can hold to schedule flips.
    pub fn toggler(&self) -> Toggler {
        Toggler {
            pending: Rc::clone(&self.pending),
        }
    }

    /// Schedules one flip. Same as calling it on a [`Toggler`].
    pub fn toggle_dark_mode(&self) {
        self.toggler().toggle_dark_mode();
    }

    /// Number of flips scheduled but not yet applied.
    pub fn pending(&self) -> usize {
        self.pending.get()
    }

    /// Runs the reactive cycle, applying the flips scheduled so far in order.
    ///
    /// Flips scheduled by subscribers while the cycle runs are left queued for
    /// the next flush. Returns how many flips were applied.
    pub fn flush(&mut self) -> usize {
        let queued = self.pending.get();
        for _ in 0..queued {
            self.pending.set(self.pending.get() - 1);
            self.apply_flip();
        }
        queued
    }

    /// Registers `callback` to run after each committed change, before the
    /// change is persisted.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(ThemePreference) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn store(&self) -> &PreferenceStore<S, D, A> {
        &self.store
    }

    /// Tears the hook down, handing back its store.
    pub fn into_store(self) -> PreferenceStore<S, D, A> {
        self.store
    }

    fn apply_flip(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
        let preference = ThemePreference::from_dark(self.is_dark_mode);
        debug!(key = %self.key, %preference, "theme toggled");

        for (_, subscriber) in &mut self.subscribers {
            subscriber(preference);
        }

        self.store.persist(&self.key, self.is_dark_mode);
    }
}

impl<S, D, A> fmt::Debug for ThemeToggle<S, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeToggle")
            .field("key", &self.key)
            .field("is_dark_mode", &self.is_dark_mode)
            .field("pending", &self.pending.get())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::ambient::FixedAmbient;
    use crate::display::{ClassList, DARK_CLASS};
    use crate::storage::MemoryStorage;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn toggles_alternate_and_stay_in_sync(
            initial in prop::bool::ANY,
            batches in prop::collection::vec(0usize..4, 0..8),
        ) {
            let storage = MemoryStorage::new();
            let root = ClassList::new();
            let store =
                PreferenceStore::new(storage.clone(), root.clone(), FixedAmbient(Some(initial)));
            let mut theme = ThemeToggle::mount(store, StorageKey::default());
            let toggler = theme.toggler();

            let mut expected = initial;
            let mut writes = 1;
            for flips in batches {
                for _ in 0..flips {
                    toggler.toggle_dark_mode();
                }
                prop_assert_eq!(theme.flush(), flips);
                if flips % 2 == 1 {
                    expected = !expected;
                }
                writes += flips;

                prop_assert_eq!(theme.state().is_dark_mode, expected);
                prop_assert_eq!(root.contains(DARK_CLASS), expected);
                let stored = storage.peek("m6-ui-theme");
                prop_assert_eq!(stored.as_deref(), Some(if expected { "true" } else { "false" }));
                prop_assert_eq!(storage.write_count(), writes);
            }
        }
    }
}
