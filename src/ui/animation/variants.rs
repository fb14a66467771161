// SPDX-License-Identifier: MPL-2.0
//! Declarative transition specifications.
//!
//! A [`Variants`] record names two visual states, `hidden` and `visible`,
//! each a [`Frame`] of interpolation targets, plus the [`Timing`] used to move
//! between them and an optional [`Stagger`] applied to children. The records
//! are plain data; [`super::tween`] executes them.

use super::easing::Easing;
use crate::domain::ui::StaggerIncrement;
use std::time::Duration;

/// Interpolation targets of an animated subtree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Frame {
    /// Fully opaque, in place, natural size.
    pub const REST: Frame = Frame {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Fully transparent, in place, natural size.
    pub const TRANSPARENT: Frame = Frame {
        opacity: 0.0,
        ..Frame::REST
    };

    #[must_use]
    pub const fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    #[must_use]
    pub const fn with_offset_x(self, offset_x: f32) -> Self {
        Self { offset_x, ..self }
    }

    #[must_use]
    pub const fn with_offset_y(self, offset_y: f32) -> Self {
        Self { offset_y, ..self }
    }

    #[must_use]
    pub const fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    /// Linear interpolation towards `to`; `t` is expected in `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, to: Frame, t: f32) -> Frame {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Frame {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            offset_x: mix(self.offset_x, to.offset_x),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale).max(0.0),
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::REST
    }
}

/// Named animation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariantState {
    #[default]
    Hidden,
    Visible,
}

/// Duration, delay and easing of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Timing {
    #[must_use]
    pub const fn from_millis(duration_ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            easing: Easing::EaseOut,
        }
    }

    #[must_use]
    pub const fn with_delay_millis(mut self, delay_ms: u64) -> Self {
        self.delay = Duration::from_millis(delay_ms);
        self
    }

    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Delay plus duration.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Zero-length timing: the target is reached immediately.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            delay: Duration::ZERO,
            easing: Easing::Linear,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::from_millis(300)
    }
}

/// Cascading entrance: child `i` starts `i * increment` after the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub increment: Duration,
}

impl Stagger {
    #[must_use]
    pub fn new(increment: StaggerIncrement) -> Self {
        Self {
            increment: increment.as_duration(),
        }
    }

    /// Extra delay for the child at `index`.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.increment.saturating_mul(index)
    }
}

/// A reusable transition specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Frame,
    pub visible: Frame,
    pub timing: Timing,
    pub stagger: Option<Stagger>,
}

impl Variants {
    #[must_use]
    pub const fn new(hidden: Frame, visible: Frame, timing: Timing) -> Self {
        Self {
            hidden,
            visible,
            timing,
            stagger: None,
        }
    }

    #[must_use]
    pub fn with_stagger(mut self, increment: StaggerIncrement) -> Self {
        self.stagger = Some(Stagger::new(increment));
        self
    }

    /// Frame associated with a named state.
    #[must_use]
    pub fn frame(&self, state: VariantState) -> Frame {
        match state {
            VariantState::Hidden => self.hidden,
            VariantState::Visible => self.visible,
        }
    }

    /// Delay before child `index` of this parent starts its own timing.
    #[must_use]
    pub fn child_delay(&self, index: usize) -> Duration {
        self.timing.delay
            + self
                .stagger
                .map_or(Duration::ZERO, |stagger| stagger.delay_for(index))
    }

    /// Same frames, no motion. Used when reduced motion is requested.
    #[must_use]
    pub fn without_motion(mut self) -> Self {
        self.timing = Timing::instant();
        self.stagger = None;
        self
    }
}

/// Transition presets used across the page.
pub mod presets {
    use super::{Easing, Frame, Timing, Variants};
    use crate::domain::ui::StaggerIncrement;

    /// Element rising 20px while fading in.
    #[must_use]
    pub fn fade_up(timing: Timing) -> Variants {
        Variants::new(
            Frame::TRANSPARENT.with_offset_y(20.0),
            Frame::REST,
            timing,
        )
    }

    /// Plain fade.
    #[must_use]
    pub fn fade(timing: Timing) -> Variants {
        Variants::new(Frame::TRANSPARENT, Frame::REST, timing)
    }

    /// Parent whose only job is to fade in and cascade its children.
    #[must_use]
    pub fn stagger_container(increment: StaggerIncrement) -> Variants {
        fade(Timing::default()).with_stagger(increment)
    }

    /// Section heading on the menu.
    #[must_use]
    pub fn section_heading() -> Variants {
        fade_up(Timing::from_millis(800))
    }

    /// Category selector row, following the heading.
    #[must_use]
    pub fn category_bar() -> Variants {
        fade_up(Timing::from_millis(800).with_delay_millis(200))
    }

    /// Single menu card.
    #[must_use]
    pub fn menu_card() -> Variants {
        fade_up(Timing::from_millis(600).with_easing(Easing::SMOOTH))
    }

    /// Gallery tile and gallery heading lines.
    #[must_use]
    pub fn gallery_tile() -> Variants {
        fade_up(Timing::from_millis(500))
    }

    /// Mobile menu dropping in from above.
    #[must_use]
    pub fn mobile_menu() -> Variants {
        Variants::new(
            Frame::TRANSPARENT.with_offset_y(-20.0),
            Frame::REST,
            Timing::from_millis(200),
        )
    }

    /// Lightbox image growing from 95%.
    #[must_use]
    pub fn lightbox() -> Variants {
        Variants::new(
            Frame::TRANSPARENT.with_scale(0.95),
            Frame::REST,
            Timing::from_millis(300).with_easing(Easing::EaseOut),
        )
    }

    /// Lightbox close control.
    #[must_use]
    pub fn lightbox_control() -> Variants {
        fade(Timing::from_millis(300))
    }

    /// About-section block sliding in from the left.
    #[must_use]
    pub fn slide_in_left() -> Variants {
        Variants::new(
            Frame::TRANSPARENT.with_offset_x(-50.0),
            Frame::REST,
            Timing::from_millis(800),
        )
    }

    /// About-section block sliding in from the right.
    #[must_use]
    pub fn slide_in_right() -> Variants {
        Variants::new(
            Frame::TRANSPARENT.with_offset_x(50.0),
            Frame::REST,
            Timing::from_millis(800),
        )
    }

    /// Hero backdrop fading in slowly.
    #[must_use]
    pub fn hero_backdrop() -> Variants {
        fade(Timing::from_millis(1200))
    }

    /// Hero title popping in from 80%.
    #[must_use]
    pub fn hero_title() -> Variants {
        Variants::new(
            Frame::TRANSPARENT.with_scale(0.8),
            Frame::REST,
            Timing::from_millis(800).with_delay_millis(500),
        )
    }

    /// Hero text line with its own delay.
    #[must_use]
    pub fn hero_line(delay_ms: u64) -> Variants {
        fade_up(Timing::from_millis(800).with_delay_millis(delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let from = Frame::TRANSPARENT.with_offset_y(20.0);
        let to = Frame::REST;
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        let mid = from.lerp(to, 0.5);
        assert!((mid.opacity - 0.5).abs() < f32::EPSILON);
        assert!((mid.offset_y - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn lerp_keeps_opacity_in_range() {
        let overshoot = Frame::TRANSPARENT.lerp(Frame::REST, 1.3);
        assert_eq!(overshoot.opacity, 1.0);
    }

    #[test]
    fn stagger_delays_grow_linearly() {
        let parent = presets::stagger_container(StaggerIncrement::new(100));
        assert_eq!(parent.child_delay(0), Duration::ZERO);
        assert_eq!(parent.child_delay(1), Duration::from_millis(100));
        assert_eq!(parent.child_delay(5), Duration::from_millis(500));
    }

    #[test]
    fn child_delay_includes_parent_delay() {
        let parent = Variants::new(
            Frame::TRANSPARENT,
            Frame::REST,
            Timing::from_millis(300).with_delay_millis(200),
        )
        .with_stagger(StaggerIncrement::new(300));
        assert_eq!(parent.child_delay(2), Duration::from_millis(800));
    }

    #[test]
    fn unstaggered_children_share_the_parent_delay() {
        let parent = presets::category_bar();
        assert_eq!(parent.child_delay(0), parent.child_delay(9));
    }

    #[test]
    fn without_motion_is_instant() {
        let variants = presets::menu_card()
            .with_stagger(StaggerIncrement::new(100))
            .without_motion();
        assert_eq!(variants.timing.total(), Duration::ZERO);
        assert!(variants.stagger.is_none());
        assert_eq!(variants.frame(VariantState::Hidden).offset_y, 20.0);
    }

    #[test]
    fn frame_selects_named_state() {
        let variants = presets::lightbox();
        assert_eq!(variants.frame(VariantState::Hidden).scale, 0.95);
        assert_eq!(variants.frame(VariantState::Visible), Frame::REST);
    }
}
