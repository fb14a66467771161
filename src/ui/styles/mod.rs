// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every page component.
//!
//! Style functions receive the Iced [`Theme`] and pick the matching
//! [`ColorScheme`]. Animated elements take an `alpha` so the current
//! animation frame's opacity reaches every color they paint.

pub mod button;
pub mod container;
pub mod text;

use crate::ui::theming::ColorScheme;
use iced::{Color, Theme};

/// Color scheme matching an Iced theme.
#[must_use]
pub fn scheme(theme: &Theme) -> ColorScheme {
    if theme.extended_palette().is_dark {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}

/// Multiplies a color's alpha by `alpha`.
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_scales_existing_alpha() {
        let color = Color::from_rgba(1.0, 0.0, 0.0, 0.5);
        assert_eq!(fade(color, 0.5).a, 0.25);
        assert_eq!(fade(color, 2.0).a, 0.5);
    }

    #[test]
    fn scheme_follows_theme_brightness() {
        assert!(scheme(&Theme::Dark).surface_primary.r < 0.2);
        assert!(scheme(&Theme::Light).surface_primary.r > 0.9);
    }
}
