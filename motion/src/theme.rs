//! Dark/light preference and how it is presented.
//!
//! The preference is a single boolean ("is dark") stored as the strings
//! `"true"` / `"false"` under one key. Only an explicit `"false"` selects the
//! light theme; a missing key, garbage, or an unreachable store all mean dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Decode a stored value. Only the exact string `"false"` selects light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("false") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Encode for storage.
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Dark => "true",
            Self::Light => "false",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Font Awesome icon class shown on the toggle button.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fa-moon",
            Self::Light => "fa-sun",
        }
    }

    /// Tooltip describing what the next click does.
    #[must_use]
    pub fn toggle_title(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference store is unavailable")]
    Unavailable,
    #[error("preference store rejected write: {0}")]
    Write(String),
}

/// String key-value persistence for the preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store for tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Read the persisted theme, treating store failures as "nothing stored".
pub fn load_theme(store: &impl PreferenceStore, key: &str) -> Theme {
    match store.load(key) {
        Ok(raw) => Theme::from_stored(raw.as_deref()),
        Err(err) => {
            log::warn!("theme preference unreadable, using dark: {err}");
            Theme::Dark
        }
    }
}

/// Flip `current`, persist the result best-effort, and return it.
pub fn toggle_theme(store: &impl PreferenceStore, key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(err) = store.save(key, next.as_stored()) {
        log::warn!("theme preference not saved: {err}");
    }
    next
}
