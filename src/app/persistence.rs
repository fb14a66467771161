// SPDX-License-Identifier: MPL-2.0
//! Settings persistence.
//!
//! Writes the user's theme choice back into `settings.toml` so that the next
//! launch starts with the same preference.

use super::config::{self, Config};
use crate::ui::theming::{ThemeMode, ThemePreference, ThemeStore};
use std::path::PathBuf;

/// Theme store backed by the settings file.
///
/// Failures are logged and otherwise ignored: the in-memory preference has
/// already changed and the page keeps working.
#[derive(Debug, Clone, Default)]
pub struct SettingsThemeStore {
    base_dir: Option<PathBuf>,
}

impl SettingsThemeStore {
    #[must_use]
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    fn persist(&self, mode: ThemeMode) -> crate::error::Result<()> {
        let (mut cfg, warning) = config::load_with_override(self.base_dir.clone());
        if warning.is_some() {
            // Keep the unreadable file untouched rather than overwriting it
            // with defaults.
            return Err(crate::error::Error::Config(
                "settings file could not be read".to_string(),
            ));
        }
        apply_theme(&mut cfg, mode);
        config::save_with_override(&cfg, self.base_dir.clone())
    }
}

impl ThemeStore for SettingsThemeStore {
    fn store(&mut self, preference: ThemePreference) {
        let mode = ThemeMode::from(preference);
        match self.persist(mode) {
            Ok(()) => tracing::debug!(?mode, "theme preference saved"),
            Err(err) => tracing::warn!("failed to save theme preference: {err}"),
        }
    }
}

fn apply_theme(cfg: &mut Config, mode: ThemeMode) {
    cfg.general.theme_mode = mode;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn store_writes_theme_mode() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut store = SettingsThemeStore::new(Some(temp_dir.path().to_path_buf()));

        store.store(ThemePreference::Light);

        let loaded = config::load_from_path(&temp_dir.path().join(config::CONFIG_FILE))
            .expect("settings written");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn store_keeps_other_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(config::CONFIG_FILE);
        let mut cfg = Config::default();
        cfg.general.language = Some("fr".to_string());
        config::save_to_path(&cfg, &path).expect("failed to seed settings");

        let mut store = SettingsThemeStore::new(Some(temp_dir.path().to_path_buf()));
        store.store(ThemePreference::Dark);

        let loaded = config::load_from_path(&path).expect("settings written");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unreadable_settings_are_not_overwritten() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(config::CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        let mut store = SettingsThemeStore::new(Some(temp_dir.path().to_path_buf()));
        store.store(ThemePreference::Light);

        let content = fs::read_to_string(&path).expect("file still present");
        assert_eq!(content, "not = valid = toml");
    }
}
