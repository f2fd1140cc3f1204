//! The ambient color-scheme signal reported by the host.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::preference::ThemePreference;

/// Read-only query for the user's system-wide color preference.
pub trait AmbientSignal {
    /// `Some(true)` when the system prefers dark, `None` when the host
    /// reports nothing.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Ambient signal backed by the operating system.
///
/// The query goes through a process-wide detector, see
/// [`set_ambient_detector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAmbient;

impl AmbientSignal for SystemAmbient {
    fn prefers_dark(&self) -> Option<bool> {
        detect_ambient().map(ThemePreference::is_dark)
    }
}

/// Ambient signal with a fixed answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedAmbient(pub Option<bool>);

impl FixedAmbient {
    pub fn dark() -> Self {
        Self(Some(true))
    }

    pub fn light() -> Self {
        Self(Some(false))
    }

    /// A host that reports no preference at all.
    pub fn silent() -> Self {
        Self(None)
    }
}

impl AmbientSignal for FixedAmbient {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

impl<T: AmbientSignal + ?Sized> AmbientSignal for Box<T> {
    fn prefers_dark(&self) -> Option<bool> {
        (**self).prefers_dark()
    }
}

type AmbientDetector = fn() -> Option<ThemePreference>;

static AMBIENT_DETECTOR: Lazy<Mutex<AmbientDetector>> = Lazy::new(|| Mutex::new(os_detector));

/// Overrides the detector [`SystemAmbient`] consults.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_ambient_detector(detector: AmbientDetector) {
    let mut guard = AMBIENT_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_ambient_detector() {
    set_ambient_detector(os_detector);
}

pub(crate) fn detect_ambient() -> Option<ThemePreference> {
    let detector = *AMBIENT_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    detector()
}

fn os_detector() -> Option<ThemePreference> {
    match detect_os_theme() {
        OsThemeMode::Dark => Some(ThemePreference::Dark),
        OsThemeMode::Light => Some(ThemePreference::Light),
    }
}
