// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::{fade, scheme};
use crate::ui::design_tokens::{border, palette::WHITE, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Call-to-action button ("Order Now", reservations).
pub fn primary(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme(theme);
        let (background, elevation) = match status {
            button::Status::Hovered => (colors.brand_secondary, shadow::MD),
            button::Status::Disabled => (colors.surface_tertiary, shadow::NONE),
            button::Status::Active | button::Status::Pressed => (colors.brand_primary, shadow::SM),
        };
        button::Style {
            background: Some(Background::Color(fade(background, alpha))),
            text_color: fade(WHITE, alpha),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: elevation,
            ..Default::default()
        }
    }
}

/// Text-only navbar link.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_primary,
        _ => colors.text_primary,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Category selector; the selected category is filled.
pub fn category(selected: bool, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme(theme);
        let hovered = matches!(status, button::Status::Hovered);
        let (background, text_color) = if selected {
            (Some(colors.brand_primary), WHITE)
        } else if hovered {
            (Some(colors.surface_tertiary), colors.text_primary)
        } else {
            (None, colors.text_secondary)
        };
        button::Style {
            background: background.map(|color| Background::Color(fade(color, alpha))),
            text_color: fade(text_color, alpha),
            border: Border {
                color: fade(colors.brand_primary, alpha),
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Round icon button (theme toggle, menu toggle, lightbox close).
pub fn icon(on_overlay: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme(theme);
        let text_color = if on_overlay {
            colors.overlay_text
        } else {
            colors.text_primary
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(
                Color {
                    a: 0.15,
                    ..text_color
                },
            )),
            _ => None,
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Invisible hit area around a gallery tile.
pub fn tile(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        ..Default::default()
    }
}
