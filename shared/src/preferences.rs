//! Theme preference persisted in a key-value store

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;

/// Storage key holding the theme flag
pub const THEME_STORAGE_KEY: &str = "mavuno-theme";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err("Unknown theme"),
        }
    }
}

/// String key-value store such as browser local storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-process store for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Saved theme if valid, otherwise the system preference
pub fn load_theme<S: PreferenceStore + ?Sized>(
    store: &S,
    prefers_dark: bool,
) -> Result<Theme, PreferenceError> {
    let saved = store
        .get(THEME_STORAGE_KEY)?
        .and_then(|value| value.parse::<Theme>().ok());

    Ok(saved.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light }))
}

/// Flip `current` and persist the result
pub fn toggle_theme<S: PreferenceStore + ?Sized>(
    store: &mut S,
    current: Theme,
) -> Result<Theme, PreferenceError> {
    let next = current.toggled();
    store.set(THEME_STORAGE_KEY, next.as_str())?;
    Ok(next)
}
