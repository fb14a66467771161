// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Navigation**: Scroll threshold of the navbar
//! - **Animation**: Stagger increments and reveal margin

use crate::domain::ui::newtypes::{reveal_bounds, scroll_bounds, stagger_bounds};

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Scroll distance (in pixels) past which the navbar switches tier.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = scroll_bounds::DEFAULT_PX;

/// Minimum scroll threshold.
pub const MIN_SCROLL_THRESHOLD_PX: f32 = scroll_bounds::MIN_PX;

/// Maximum scroll threshold.
pub const MAX_SCROLL_THRESHOLD_PX: f32 = scroll_bounds::MAX_PX;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Delay between two menu cards entering (in milliseconds).
pub const DEFAULT_MENU_STAGGER_MS: u32 = stagger_bounds::MENU_MS;

/// Delay between two gallery tiles entering (in milliseconds).
pub const DEFAULT_GALLERY_STAGGER_MS: u32 = stagger_bounds::GALLERY_MS;

/// Delay between the about-section blocks entering (in milliseconds).
pub const DEFAULT_ABOUT_STAGGER_MS: u32 = stagger_bounds::ABOUT_MS;

/// Maximum stagger increment (in milliseconds).
pub const MAX_STAGGER_MS: u32 = stagger_bounds::MAX_MS;

/// How far (in pixels) a section must be inside the window before it reveals.
pub const DEFAULT_REVEAL_MARGIN_PX: f32 = reveal_bounds::DEFAULT_PX;

/// Maximum reveal margin.
pub const MAX_REVEAL_MARGIN_PX: f32 = reveal_bounds::MAX_PX;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCROLL_THRESHOLD_PX <= DEFAULT_SCROLL_THRESHOLD_PX);
    assert!(DEFAULT_SCROLL_THRESHOLD_PX <= MAX_SCROLL_THRESHOLD_PX);
    assert!(DEFAULT_MENU_STAGGER_MS < DEFAULT_GALLERY_STAGGER_MS);
    assert!(DEFAULT_GALLERY_STAGGER_MS < DEFAULT_ABOUT_STAGGER_MS);
    assert!(DEFAULT_ABOUT_STAGGER_MS <= MAX_STAGGER_MS);
    assert!(DEFAULT_REVEAL_MARGIN_PX <= MAX_REVEAL_MARGIN_PX);
};
