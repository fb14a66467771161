// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the page scrollable: current vertical offset, visible height and
//! content height. Anchor navigation needs all three to express an absolute
//! offset as the relative one that `snap_to` expects.

use crate::ui::animation::Region;
use iced::widget::scrollable::Viewport;

/// Window height assumed until the first resize or scroll event arrives.
pub const DEFAULT_HEIGHT: f32 = 800.0;

/// Manages viewport and scroll state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageViewport {
    /// Current vertical scroll offset
    pub offset_y: f32,

    /// Visible height of the scrollable
    pub height: f32,

    /// Full height of the scrolled content
    pub content_height: f32,
}

impl Default for PageViewport {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            height: DEFAULT_HEIGHT,
            content_height: DEFAULT_HEIGHT,
        }
    }
}

impl PageViewport {
    /// Updates the state from a scroll notification.
    pub fn update(&mut self, viewport: &Viewport) {
        self.offset_y = viewport.absolute_offset().y;
        self.height = viewport.bounds().height;
        self.content_height = viewport.content_bounds().height;
    }

    /// Updates the visible height after a window resize.
    pub fn resize(&mut self, height: f32) {
        if height.is_finite() && height > 0.0 {
            self.height = height;
        }
    }

    /// Largest reachable offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }

    /// Converts an absolute offset to the `0.0..=1.0` range used by
    /// relative scroll operations.
    #[must_use]
    pub fn relative(&self, offset_y: f32) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            0.0
        } else {
            (offset_y / max).clamp(0.0, 1.0)
        }
    }

    /// Visible band of the page.
    #[must_use]
    pub fn region(&self) -> Region {
        Region::new(self.offset_y, self.height)
    }
}
