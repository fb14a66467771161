// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::{fade, scheme};
use crate::domain::menu::DietaryFlag;
use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::navbar::NavTier;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Alternating section background.
pub fn section_alt(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Translucent navbar background for a visual tier.
pub fn navbar(tier: NavTier) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        let (alpha, bar_shadow) = match tier {
            NavTier::Base => (opacity::NAV_BASE, shadow::NONE),
            NavTier::Scrolled => (opacity::NAV_SCROLLED, shadow::MD),
            NavTier::Open => (opacity::NAV_OPEN, shadow::NONE),
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..colors.navbar_base
            })),
            text_color: Some(colors.text_primary),
            shadow: bar_shadow,
            ..Default::default()
        }
    }
}

/// Navbar stand-in drawn before hydration. Independent of scroll position
/// and theme resolution.
pub fn navbar_placeholder(_theme: &Theme) -> container::Style {
    container::Style::default()
}

/// Mobile menu panel.
pub fn mobile_menu(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        container::Style {
            background: Some(Background::Color(fade(
                Color {
                    a: opacity::SURFACE,
                    ..colors.surface_secondary
                },
                alpha,
            ))),
            text_color: Some(fade(colors.text_primary, alpha)),
            border: Border {
                color: fade(colors.surface_tertiary, alpha),
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Menu item card.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        container::Style {
            background: Some(Background::Color(fade(colors.surface_secondary, alpha))),
            text_color: Some(fade(colors.text_primary, alpha)),
            border: Border {
                color: fade(colors.surface_tertiary, alpha),
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: Shadow {
                color: fade(shadow::SM.color, alpha),
                ..shadow::SM
            },
            ..Default::default()
        }
    }
}

/// Pill around a dietary badge.
pub fn badge(flag: DietaryFlag, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let color = super::text::badge_color(flag);
        container::Style {
            background: Some(Background::Color(fade(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..color
                },
                alpha,
            ))),
            border: Border {
                color: fade(color, alpha),
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Placeholder tile for a gallery image.
pub fn tile(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        container::Style {
            background: Some(Background::Color(fade(colors.surface_tertiary, alpha))),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Lightbox backdrop.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(fade(
            scheme(theme).overlay_background,
            alpha,
        ))),
        ..Default::default()
    }
}

/// Hero banner over its backdrop.
pub fn hero(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        container::Style {
            background: Some(Background::Color(fade(colors.surface_tertiary, alpha))),
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}
