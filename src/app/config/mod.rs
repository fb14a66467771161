// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[navigation]` - Navbar scroll threshold
//! - `[animation]` - Stagger increments, reveal margin, reduced motion
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `BISTRO_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use bistro::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{RevealMargin, ScrollThreshold, StaggerIncrement};
use crate::error::{Error, Result};
use crate::ui::animation::MotionSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Navigation bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Scroll distance past which the navbar changes tier.
    #[serde(
        default = "default_scroll_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_threshold_px: Option<f32>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: default_scroll_threshold_px(),
        }
    }
}

/// Animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(
        default = "default_menu_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub menu_stagger_ms: Option<u32>,

    #[serde(
        default = "default_gallery_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub gallery_stagger_ms: Option<u32>,

    #[serde(
        default = "default_about_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub about_stagger_ms: Option<u32>,

    /// Distance a section must be inside the window before revealing.
    #[serde(
        default = "default_reveal_margin_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_margin_px: Option<f32>,

    /// Collapse every animation to an instant change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            menu_stagger_ms: default_menu_stagger_ms(),
            gallery_stagger_ms: default_gallery_stagger_ms(),
            about_stagger_ms: default_about_stagger_ms(),
            reveal_margin_px: default_reveal_margin_px(),
            reduced_motion: Some(false),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Navbar threshold, clamped to its valid range.
    #[must_use]
    pub fn scroll_threshold(&self) -> ScrollThreshold {
        ScrollThreshold::new(
            self.navigation
                .scroll_threshold_px
                .unwrap_or(DEFAULT_SCROLL_THRESHOLD_PX),
        )
    }

    /// Motion settings with every value clamped to its valid range.
    #[must_use]
    pub fn motion(&self) -> MotionSettings {
        let animation = &self.animation;
        MotionSettings {
            menu_stagger: StaggerIncrement::new(
                animation.menu_stagger_ms.unwrap_or(DEFAULT_MENU_STAGGER_MS),
            ),
            gallery_stagger: StaggerIncrement::new(
                animation
                    .gallery_stagger_ms
                    .unwrap_or(DEFAULT_GALLERY_STAGGER_MS),
            ),
            about_stagger: StaggerIncrement::new(
                animation.about_stagger_ms.unwrap_or(DEFAULT_ABOUT_STAGGER_MS),
            ),
            reveal_margin: RevealMargin::new(
                animation.reveal_margin_px.unwrap_or(DEFAULT_REVEAL_MARGIN_PX),
            ),
            reduced_motion: animation.reduced_motion.unwrap_or(false),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_scroll_threshold_px() -> Option<f32> {
    Some(DEFAULT_SCROLL_THRESHOLD_PX)
}

fn default_menu_stagger_ms() -> Option<u32> {
    Some(DEFAULT_MENU_STAGGER_MS)
}

fn default_gallery_stagger_ms() -> Option<u32> {
    Some(DEFAULT_GALLERY_STAGGER_MS)
}

fn default_about_stagger_ms() -> Option<u32> {
    Some(DEFAULT_ABOUT_STAGGER_MS)
}

fn default_reveal_margin_px() -> Option<f32> {
    Some(DEFAULT_REVEAL_MARGIN_PX)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns the defaults and a warning i18n key when the file exists but
/// cannot be read.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "{err}; using default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            navigation: NavigationConfig {
                scroll_threshold_px: Some(48.0),
            },
            animation: AnimationConfig {
                menu_stagger_ms: Some(50),
                reduced_motion: Some(true),
                ..AnimationConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn unreadable_file_yields_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        let err = result.expect_err("sepia is not a theme mode");
        assert!(err.to_string().contains("invalid theme_mode"));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"Light\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config =
            toml::from_str("[animation]\nreduced_motion = true\n").expect("valid config");
        assert_eq!(config.animation.menu_stagger_ms, Some(DEFAULT_MENU_STAGGER_MS));
        assert_eq!(
            config.navigation.scroll_threshold_px,
            Some(DEFAULT_SCROLL_THRESHOLD_PX)
        );
        assert!(config.motion().reduced_motion);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            navigation: NavigationConfig {
                scroll_threshold_px: Some(-5.0),
            },
            animation: AnimationConfig {
                gallery_stagger_ms: Some(60_000),
                reveal_margin_px: Some(10_000.0),
                ..AnimationConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.scroll_threshold().value(), MIN_SCROLL_THRESHOLD_PX);
        let motion = config.motion();
        assert_eq!(
            motion.gallery_stagger.as_duration(),
            Duration::from_millis(u64::from(MAX_STAGGER_MS))
        );
        assert_eq!(motion.reveal_margin.value(), MAX_REVEAL_MARGIN_PX);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.scroll_threshold().value(), 20.0);
        assert_eq!(config.motion(), MotionSettings::default());
    }
}
