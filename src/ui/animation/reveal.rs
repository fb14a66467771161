// SPDX-License-Identifier: MPL-2.0
//! Entrance triggers.
//!
//! Content either animates as soon as it is mounted ([`Trigger::OnMount`]) or
//! waits until its region first scrolls into view ([`Trigger::InView`]).
//! A [`Reveal`] fires at most once in both cases.

use crate::domain::ui::RevealMargin;
use std::time::Instant;

/// Vertical band of the page, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Shrinks the band by `margin` on both edges. A band too small to
    /// shrink collapses to its center line.
    #[must_use]
    pub fn inset(&self, margin: f32) -> Region {
        if margin * 2.0 >= self.height {
            Region::new(self.top + self.height / 2.0, 0.0)
        } else {
            Region::new(self.top + margin, self.height - margin * 2.0)
        }
    }

    /// Whether the two bands overlap. Touching edges do not count, except
    /// for a zero-height line lying on the other band.
    #[must_use]
    pub fn intersects(&self, other: &Region) -> bool {
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        if top < bottom {
            return true;
        }
        top == bottom
            && (self.height == 0.0 || other.height == 0.0)
            && self.top <= other.bottom()
            && other.top <= self.bottom()
    }
}

/// When an entrance animation starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Immediately on mount.
    OnMount,
    /// The first time the region intersects the viewport shrunk by `margin`.
    InView { margin: RevealMargin },
}

/// One-shot entrance trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    trigger: Trigger,
    fired_at: Option<Instant>,
}

impl Reveal {
    #[must_use]
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            fired_at: None,
        }
    }

    #[must_use]
    pub fn on_mount() -> Self {
        Self::new(Trigger::OnMount)
    }

    #[must_use]
    pub fn in_view(margin: RevealMargin) -> Self {
        Self::new(Trigger::InView { margin })
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired_at.is_some()
    }

    #[must_use]
    pub fn fired_at(&self) -> Option<Instant> {
        self.fired_at
    }

    /// Mount notification. Returns `true` if this call fired the reveal.
    pub fn mount(&mut self, now: Instant) -> bool {
        match self.trigger {
            Trigger::OnMount if self.fired_at.is_none() => {
                self.fired_at = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Viewport notification. Returns `true` if this call fired the reveal.
    pub fn observe(&mut self, region: Region, viewport: Region, now: Instant) -> bool {
        if self.fired_at.is_some() {
            return false;
        }
        match self.trigger {
            Trigger::OnMount => false,
            Trigger::InView { margin } => {
                if region.intersects(&viewport.inset(margin.value())) {
                    self.fired_at = Some(now);
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_mount_fires_once() {
        let now = Instant::now();
        let mut reveal = Reveal::on_mount();
        assert!(reveal.mount(now));
        assert!(!reveal.mount(now));
        assert_eq!(reveal.fired_at(), Some(now));
    }

    #[test]
    fn on_mount_ignores_viewport() {
        let now = Instant::now();
        let mut reveal = Reveal::on_mount();
        assert!(!reveal.observe(Region::new(0.0, 100.0), Region::new(0.0, 800.0), now));
        assert!(!reveal.has_fired());
    }

    #[test]
    fn in_view_waits_for_margin_adjusted_intersection() {
        let now = Instant::now();
        let mut reveal = Reveal::in_view(RevealMargin::new(100.0));
        let section = Region::new(1000.0, 500.0);

        // viewport 0..800 shrunk to 100..700: not reached
        assert!(!reveal.observe(section, Region::new(0.0, 800.0), now));
        // viewport 250..1050 shrunk to 350..950: still above the section
        assert!(!reveal.observe(section, Region::new(250.0, 800.0), now));
        // viewport 400..1200 shrunk to 500..1100: overlaps
        assert!(reveal.observe(section, Region::new(400.0, 800.0), now));
    }

    #[test]
    fn in_view_fires_at_most_once() {
        let now = Instant::now();
        let mut reveal = Reveal::in_view(RevealMargin::none());
        let section = Region::new(0.0, 100.0);
        assert!(reveal.observe(section, Region::new(0.0, 800.0), now));
        assert!(!reveal.observe(section, Region::new(5000.0, 800.0), now));
        assert!(!reveal.observe(section, Region::new(0.0, 800.0), now));
        assert!(reveal.has_fired());
    }

    #[test]
    fn touching_regions_do_not_intersect() {
        let a = Region::new(0.0, 100.0);
        let b = Region::new(100.0, 100.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Region::new(99.0, 10.0)));
    }

    #[test]
    fn tiny_viewport_collapses_to_center_line() {
        let viewport = Region::new(0.0, 150.0);
        let line = viewport.inset(100.0);
        assert_eq!(line.height, 0.0);
        assert_eq!(line.top, 75.0);
        assert!(Region::new(50.0, 50.0).intersects(&line));
        assert!(!Region::new(80.0, 50.0).intersects(&line));
    }
}
