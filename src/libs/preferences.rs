//! Durable user preferences (language and theme).
//!
//! Two string-valued keys persisted as JSON in the application data
//! directory. Reads never fail: a missing file, missing key, or unparseable
//! value falls back to the documented default (`Korean` / `Dark`). Writes go
//! straight through to disk and notify a `watch` channel per setting so
//! interested code can observe changes without polling.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tokio::sync::watch;

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageMode {
    English,
    Korean,
}

impl LanguageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageMode::English => "ENGLISH",
            LanguageMode::Korean => "KOREAN",
        }
    }

    /// Unknown values fall back to the default rather than erroring.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "ENGLISH" => LanguageMode::English,
            "KOREAN" => LanguageMode::Korean,
            _ => LanguageMode::default(),
        }
    }
}

impl Default for LanguageMode {
    fn default() -> Self {
        LanguageMode::Korean
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "LIGHT",
            ThemeMode::Dark => "DARK",
            ThemeMode::System => "SYSTEM",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "LIGHT" => ThemeMode::Light,
            "DARK" => ThemeMode::Dark,
            "SYSTEM" => ThemeMode::System,
            _ => ThemeMode::default(),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

/// On-disk shape. Values are stored as enum-name strings so a hand-edited or
/// corrupt file degrades to defaults instead of failing deserialization.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    language_mode: Option<String>,
    #[serde(default)]
    theme_mode: Option<String>,
}

pub struct Preferences {
    path: PathBuf,
    stored: StoredPreferences,
    language_tx: watch::Sender<LanguageMode>,
    theme_tx: watch::Sender<ThemeMode>,
}

impl Preferences {
    pub fn load() -> Result<Self> {
        let path = DataStorage::new().get_path(PREFERENCES_FILE_NAME)?;
        let stored = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => StoredPreferences::default(),
        };

        let (language_tx, _) = watch::channel(language_of(&stored));
        let (theme_tx, _) = watch::channel(theme_of(&stored));

        Ok(Self {
            path,
            stored,
            language_tx,
            theme_tx,
        })
    }

    pub fn language_mode(&self) -> LanguageMode {
        language_of(&self.stored)
    }

    pub fn theme_mode(&self) -> ThemeMode {
        theme_of(&self.stored)
    }

    pub fn set_language_mode(&mut self, mode: LanguageMode) -> Result<()> {
        self.stored.language_mode = Some(mode.as_str().to_string());
        self.save()?;
        let _ = self.language_tx.send(mode);
        Ok(())
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) -> Result<()> {
        self.stored.theme_mode = Some(mode.as_str().to_string());
        self.save()?;
        let _ = self.theme_tx.send(mode);
        Ok(())
    }

    pub fn watch_language(&self) -> watch::Receiver<LanguageMode> {
        self.language_tx.subscribe()
    }

    pub fn watch_theme(&self) -> watch::Receiver<ThemeMode> {
        self.theme_tx.subscribe()
    }

    fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.stored)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn language_of(stored: &StoredPreferences) -> LanguageMode {
    stored.language_mode.as_deref().map(LanguageMode::parse).unwrap_or_default()
}

fn theme_of(stored: &StoredPreferences) -> ThemeMode {
    stored.theme_mode.as_deref().map(ThemeMode::parse).unwrap_or_default()
}
