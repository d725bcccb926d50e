//! Light/dark theme preference.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;

/// Storage key holding the theme preference.
pub const THEME_KEY: &str = "theme";
/// Body class applied in dark mode.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored value. Only `"dark"` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value storage for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&mut self, key: &str, value: &str) -> FolioResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Current theme, read once at load and persisted on every toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeToggle {
    current: Theme,
}

impl ThemeToggle {
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let current = Theme::from_stored(store.load(THEME_KEY).as_deref());
        tracing::debug!(theme = %current, "Loaded theme preference");
        Self { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it.
    ///
    /// The in-memory theme flips even if persisting fails; the error is
    /// returned so the caller can log it.
    pub fn toggle<S: PreferenceStore + ?Sized>(&mut self, store: &mut S) -> FolioResult<Theme> {
        self.current = self.current.toggled();
        store.store(THEME_KEY, self.current.as_str())?;
        Ok(self.current)
    }
}
