// SPDX-License-Identifier: MPL-2.0
//! Theme preference and color schemes.
//!
//! [`ThemeMode`] is what the settings file stores (it may defer to the OS);
//! [`ThemePreference`] is the concrete choice the navbar toggles.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    /// Base color of the translucent navbar background.
    pub navbar_base: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::STONE_50,
            surface_secondary: palette::STONE_100,
            surface_tertiary: palette::STONE_200,

            text_primary: palette::STONE_900,
            text_secondary: palette::STONE_600,
            text_tertiary: palette::STONE_400,

            brand_primary: palette::AMBER_600,
            brand_secondary: palette::AMBER_700,

            navbar_base: palette::WHITE,

            overlay_background: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::STONE_950,
            surface_secondary: palette::STONE_900,
            surface_tertiary: palette::STONE_800,

            text_primary: palette::STONE_50,
            text_secondary: palette::STONE_200,
            text_tertiary: palette::STONE_400,

            brand_primary: palette::AMBER_400,
            brand_secondary: palette::AMBER_500,

            navbar_base: palette::STONE_950,

            overlay_background: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }
}

/// Theme stored in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the concrete preference. For System mode, detects the actual
    /// OS theme and falls back to dark when detection fails.
    #[must_use]
    pub fn resolve(self) -> ThemePreference {
        match self {
            ThemeMode::Light => ThemePreference::Light,
            ThemeMode::Dark => ThemePreference::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => ThemePreference::Light,
                _ => ThemePreference::Dark,
            },
        }
    }
}

/// Concrete theme chosen by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            ThemePreference::Light => ColorScheme::light(),
            ThemePreference::Dark => ColorScheme::dark(),
        }
    }

    /// Iced theme used by built-in widgets.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
        }
    }
}

/// Persistence collaborator for the theme preference.
///
/// The navbar only flips its in-memory preference and hands the new value
/// over; where and whether it is written is up to the implementation.
pub trait ThemeStore: std::fmt::Debug {
    fn store(&mut self, preference: ThemePreference);
}

/// Store that forgets everything it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardThemeStore;

impl ThemeStore for DiscardThemeStore {
    fn store(&mut self, _preference: ThemePreference) {}
}

impl From<ThemePreference> for ThemeMode {
    fn from(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
        }
    }
}
