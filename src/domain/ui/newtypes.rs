// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for the presentational constants
//! of the page (scroll threshold, stagger increments, reveal margin), so they
//! stay configurable while always being within valid ranges.

use std::time::Duration;

// =============================================================================
// Scroll Threshold Bounds
// =============================================================================

/// Scroll threshold bounds in logical pixels.
pub mod scroll_bounds {
    /// Minimum threshold.
    pub const MIN_PX: f32 = 0.0;
    /// Maximum threshold.
    pub const MAX_PX: f32 = 400.0;
    /// Default threshold.
    pub const DEFAULT_PX: f32 = 20.0;
}

// =============================================================================
// ScrollThreshold
// =============================================================================

/// Vertical scroll distance past which the navigation bar counts as scrolled.
///
/// The comparison is strict: an offset equal to the threshold is not scrolled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThreshold(f32);

impl ScrollThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_finite() {
            Self(px.clamp(scroll_bounds::MIN_PX, scroll_bounds::MAX_PX))
        } else {
            Self::default()
        }
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether `scroll_y` lies past the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, scroll_y: f32) -> bool {
        scroll_y > self.0
    }
}

impl Default for ScrollThreshold {
    fn default() -> Self {
        Self(scroll_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// Stagger Bounds
// =============================================================================

/// Stagger increment bounds in milliseconds.
pub mod stagger_bounds {
    /// Minimum increment (no cascade).
    pub const MIN_MS: u32 = 0;
    /// Maximum increment.
    pub const MAX_MS: u32 = 1_000;
    /// Increment between menu cards.
    pub const MENU_MS: u32 = 100;
    /// Increment between gallery tiles.
    pub const GALLERY_MS: u32 = 200;
    /// Increment between about-section blocks.
    pub const ABOUT_MS: u32 = 300;
}

// =============================================================================
// StaggerIncrement
// =============================================================================

/// Delay added between consecutive children of a staggered reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerIncrement(u32);

impl StaggerIncrement {
    /// Creates a new increment, clamping the value to the valid range.
    #[must_use]
    pub fn new(ms: u32) -> Self {
        Self(ms.clamp(stagger_bounds::MIN_MS, stagger_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the increment as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for StaggerIncrement {
    fn default() -> Self {
        Self(stagger_bounds::MENU_MS)
    }
}

// =============================================================================
// Reveal Margin Bounds
// =============================================================================

/// Reveal margin bounds in logical pixels.
pub mod reveal_bounds {
    /// Minimum margin.
    pub const MIN_PX: f32 = 0.0;
    /// Maximum margin.
    pub const MAX_PX: f32 = 400.0;
    /// Default margin.
    pub const DEFAULT_PX: f32 = 100.0;
}

// =============================================================================
// RevealMargin
// =============================================================================

/// Distance by which the viewport is shrunk on both edges before testing
/// whether a scroll-gated section has come into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMargin(f32);

impl RevealMargin {
    /// Creates a new margin, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_finite() {
            Self(px.clamp(reveal_bounds::MIN_PX, reveal_bounds::MAX_PX))
        } else {
            Self::default()
        }
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// No shrinking at all.
    #[must_use]
    pub fn none() -> Self {
        Self(0.0)
    }
}

impl Default for RevealMargin {
    fn default() -> Self {
        Self(reveal_bounds::DEFAULT_PX)
    }
}
