// SPDX-License-Identifier: MPL-2.0
//! Anchor lookup for the single scrollable page.
//!
//! The page is a vertical stack of fixed-height sections. A [`SectionMap`]
//! records where each anchored section sits so navigation can turn an anchor
//! id into a scroll offset, and reveal triggers can test visibility.

use crate::error::{Error, Result};
use crate::ui::animation::Region;

/// Ordered list of anchored sections, top to bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionMap {
    sections: Vec<(String, Region)>,
    height: f32,
}

impl SectionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section below the previous one. Pass `None` for a block that
    /// takes up space but has no anchor.
    pub fn push(&mut self, anchor: Option<&str>, height: f32) -> Region {
        let region = Region::new(self.height, height);
        self.height = region.bottom();
        if let Some(anchor) = anchor {
            self.sections.push((anchor.to_string(), region));
        }
        region
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, anchor: Option<&str>, height: f32) -> Self {
        self.push(anchor, height);
        self
    }

    #[must_use]
    pub fn region(&self, anchor: &str) -> Option<Region> {
        self.sections
            .iter()
            .find(|(id, _)| id == anchor)
            .map(|(_, region)| *region)
    }

    #[must_use]
    pub fn contains(&self, anchor: &str) -> bool {
        self.region(anchor).is_some()
    }

    /// Total content height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Scroll offset aligning the section's top edge with the viewport top.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingScrollTarget`] when no section carries `anchor`.
    pub fn scroll_offset(&self, anchor: &str) -> Result<f32> {
        self.region(anchor)
            .map(|region| region.top)
            .ok_or_else(|| Error::MissingScrollTarget(anchor.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Region)> {
        self.sections.iter().map(|(id, region)| (id.as_str(), *region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SectionMap {
        SectionMap::new()
            .with(None, 600.0)
            .with(Some("menu"), 1200.0)
            .with(Some("about"), 800.0)
    }

    #[test]
    fn sections_stack_in_push_order() {
        let map = page();
        assert_eq!(map.region("menu"), Some(Region::new(600.0, 1200.0)));
        assert_eq!(map.region("about"), Some(Region::new(1800.0, 800.0)));
        assert_eq!(map.height(), 2600.0);
    }

    #[test]
    fn scroll_offset_is_section_top() {
        assert_eq!(page().scroll_offset("about"), Ok(1800.0));
    }

    #[test]
    fn unknown_anchor_is_missing_target() {
        assert_eq!(
            page().scroll_offset("reservations"),
            Err(Error::MissingScrollTarget("reservations".into()))
        );
        assert!(!page().contains("reservations"));
    }

    #[test]
    fn unanchored_blocks_are_not_listed() {
        assert_eq!(page().iter().count(), 2);
    }
}
