//! Validated storage keys.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ThemeError;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "m6-ui-theme";

/// The key a preference is persisted under.
///
/// Keys are non-empty and contain no whitespace or control characters.
/// Instances with distinct keys are fully independent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ThemeError> {
        let key = key.into();
        let valid =
            !key.is_empty() && !key.chars().any(|c| c.is_whitespace() || c.is_control());
        if valid {
            Ok(Self(key))
        } else {
            Err(ThemeError::InvalidStorageKey(key))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StorageKey {
    fn default() -> Self {
        Self(DEFAULT_STORAGE_KEY.to_string())
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for StorageKey {
    type Error = ThemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for StorageKey {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for StorageKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        StorageKey::new(raw).map_err(serde::de::Error::custom)
    }
}
