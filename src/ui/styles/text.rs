// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use super::{fade, scheme};
use crate::domain::menu::DietaryFlag;
use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Primary text.
pub fn primary(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(fade(scheme(theme).text_primary, alpha)),
    }
}

/// Secondary text (descriptions, captions).
pub fn secondary(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(fade(scheme(theme).text_secondary, alpha)),
    }
}

/// Brand accent (prices, eyebrow labels).
pub fn accent(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(fade(scheme(theme).brand_primary, alpha)),
    }
}

/// Text drawn over imagery or the lightbox backdrop.
pub fn on_overlay(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(fade(scheme(theme).overlay_text, alpha)),
    }
}

/// Dietary badge label.
pub fn badge(flag: DietaryFlag, alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(fade(badge_color(flag), alpha)),
    }
}

#[must_use]
pub fn badge_color(flag: DietaryFlag) -> iced::Color {
    match flag {
        DietaryFlag::Signature => palette::SIGNATURE,
        DietaryFlag::Spicy => palette::SPICY,
        DietaryFlag::Vegetarian => palette::VEGETARIAN,
    }
}
