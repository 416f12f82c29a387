//! Language and theme preferences, persisted as a small JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use factcheck_core::model::{Language, Theme};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Persisted UI preferences. Each field defaults on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// UI language.
    #[serde(default)]
    pub language: Language,
    /// Colour theme.
    #[serde(default)]
    pub theme: Theme,
}

/// Loads preferences at start and writes them back on every change.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
    current: Preferences,
}

impl PreferenceStore {
    /// Store that never touches disk.
    pub fn in_memory(initial: Preferences) -> Self {
        Self {
            path: None,
            current: initial,
        }
    }

    /// Reads `path`, falling back to defaults when it is missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let current = match read_prefs(&path) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Preferences::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
                Preferences::default()
            }
        };
        Self {
            path: Some(path),
            current,
        }
    }

    /// Both preferences.
    pub fn get(&self) -> Preferences {
        self.current
    }

    /// Stored language.
    pub fn language(&self) -> Language {
        self.current.language
    }

    /// Stored theme.
    pub fn theme(&self) -> Theme {
        self.current.theme
    }

    /// Updates the in-memory value first; a failed write is returned but the
    /// new value stays active.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.current.language = language;
        self.persist()
    }

    /// Same contract as [`Self::set_language`].
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.current.theme = theme;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let s = serde_json::to_string_pretty(&self.current).context("serialize preferences")?;
        std::fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

fn read_prefs(path: &Path) -> Result<Option<Preferences>> {
    if !path.exists() {
        return Ok(None);
    }
    let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let raw: serde_json::Value =
        serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(Preferences {
        language: field_or_default(&raw, "language"),
        theme: field_or_default(&raw, "theme"),
    }))
}

/// Decodes one field on its own; a missing or invalid value falls back to
/// the default without affecting the other fields.
fn field_or_default<T>(raw: &serde_json::Value, name: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(value) = raw.get(name) else {
        return T::default();
    };
    match T::deserialize(value) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(field = name, value = %value, error = %e, "ignoring invalid preference");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::load(dir.path().join("prefs.json"));
        assert_eq!(store.language(), Language::Uk);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn persists_every_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = PreferenceStore::load(&path);
        store.set_language(Language::En).unwrap();
        store.set_theme(Theme::Dark).unwrap();

        let reloaded = PreferenceStore::load(&path);
        assert_eq!(
            reloaded.get(),
            Preferences {
                language: Language::En,
                theme: Theme::Dark
            }
        );
    }

    #[test]
    fn fields_default_independently() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let store = PreferenceStore::load(&path);
        assert_eq!(store.language(), Language::Uk);
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn invalid_field_does_not_reset_the_other() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"language": "fr", "theme": "dark"}"#).unwrap();

        let store = PreferenceStore::load(&path);
        assert_eq!(store.language(), Language::Uk);
        assert_eq!(store.theme(), Theme::Dark);

        std::fs::write(&path, r#"{"language": "en", "theme": 7}"#).unwrap();
        let store = PreferenceStore::load(&path);
        assert_eq!(store.language(), Language::En);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = PreferenceStore::load(&path);
        assert_eq!(store.get(), Preferences::default());
    }
}
