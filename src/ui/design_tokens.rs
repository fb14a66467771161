// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the page's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and section sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use bistro::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Translucent navbar background in the scrolled tier
let navbar_bg = Color {
    a: opacity::NAV_SCROLLED,
    ..palette::STONE_950
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Section heights feed the anchor map used by navigation. Before modifying:
1. Check the impact on all sections
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (warm stone)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const STONE_950: Color = Color::from_rgb(0.047, 0.039, 0.035);
    pub const STONE_900: Color = Color::from_rgb(0.11, 0.098, 0.09);
    pub const STONE_800: Color = Color::from_rgb(0.161, 0.145, 0.141);
    pub const STONE_600: Color = Color::from_rgb(0.341, 0.325, 0.306);
    pub const STONE_400: Color = Color::from_rgb(0.659, 0.635, 0.62);
    pub const STONE_200: Color = Color::from_rgb(0.906, 0.898, 0.894);
    pub const STONE_100: Color = Color::from_rgb(0.961, 0.961, 0.957);
    pub const STONE_50: Color = Color::from_rgb(0.98, 0.98, 0.976);

    // Brand colors (amber scale)
    pub const AMBER_300: Color = Color::from_rgb(0.988, 0.827, 0.302);
    pub const AMBER_400: Color = Color::from_rgb(0.984, 0.749, 0.141);
    pub const AMBER_500: Color = Color::from_rgb(0.961, 0.62, 0.043);
    pub const AMBER_600: Color = Color::from_rgb(0.851, 0.467, 0.024);
    pub const AMBER_700: Color = Color::from_rgb(0.706, 0.325, 0.035);

    // Badge colors
    pub const SIGNATURE: Color = AMBER_500;
    pub const SPICY: Color = Color::from_rgb(0.863, 0.149, 0.149);
    pub const VEGETARIAN: Color = Color::from_rgb(0.086, 0.639, 0.29);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar background, resting tier.
    pub const NAV_BASE: f32 = 0.2;
    /// Navbar background while the mobile menu is open.
    pub const NAV_OPEN: f32 = 0.4;
    /// Navbar background once the page has scrolled.
    pub const NAV_SCROLLED: f32 = 0.6;

    /// Lightbox backdrop.
    pub const BACKDROP: f32 = 0.9;

    /// Surface background - Semi-transparent panels and cards
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 96.0; // 12 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 40.0;

    /// Fixed navbar height; sections are padded by this much so anchors land
    /// below the bar.
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    /// Width below which the navbar collapses into the mobile menu.
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
    pub const MOBILE_MENU_ROW: f32 = 44.0;

    // Section layout
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;
    pub const HERO_HEIGHT: f32 = 640.0;
    pub const SECTION_HEADING: f32 = 120.0;
    pub const CATEGORY_BAR: f32 = 72.0;
    pub const MENU_CARD_HEIGHT: f32 = 132.0;
    pub const MENU_COLUMNS: usize = 2;
    pub const ABOUT_BODY: f32 = 360.0;
    pub const GALLERY_TILE: f32 = 240.0;
    pub const GALLERY_COLUMNS: usize = 3;
    pub const CONTACT_BODY: f32 = 420.0;
    pub const RESERVATIONS_BODY: f32 = 260.0;
    pub const FOOTER: f32 = 96.0;

    // Lightbox
    pub const LIGHTBOX_MAX_WIDTH: f32 = 960.0;
    pub const LIGHTBOX_MAX_HEIGHT: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero title
    //! - Titles: section headings, card titles
    //! - Body: primary content text
    //! - Caption: badges, prices, secondary info

    /// Display - Hero title
    pub const DISPLAY: f32 = 56.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 36.0;

    /// Medium title - Restaurant name in the navbar
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Menu card titles
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Hero tagline, category descriptions
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most text
    pub const BODY: f32 = 14.0;

    /// Small body - Item descriptions
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, cards
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Selected category
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.5,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::NAV_SCROLLED > opacity::NAV_OPEN);
    assert!(opacity::NAV_OPEN > opacity::NAV_BASE);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::NAVBAR_HEIGHT > sizing::BUTTON_HEIGHT);
    assert!(sizing::MENU_COLUMNS > 0);
    assert!(sizing::GALLERY_COLUMNS > 0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::AMBER_500.r >= 0.0 && palette::AMBER_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn section_spacing_stays_on_grid() {
        assert_eq!(spacing::SECTION % spacing::XS, 0.0);
    }
}
