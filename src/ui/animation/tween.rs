// SPDX-License-Identifier: MPL-2.0
//! Time-based tween engine.
//!
//! Everything here is a pure function of the instant passed in: nothing
//! schedules itself, and sampling never mutates. Callers drive the engine by
//! sampling on each animation frame.

use super::variants::{Frame, Timing, VariantState, Variants};
use std::time::{Duration, Instant};

/// A single interpolation from one frame to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: Frame,
    to: Frame,
    timing: Timing,
    started_at: Instant,
}

impl Tween {
    #[must_use]
    pub fn new(from: Frame, to: Frame, timing: Timing, started_at: Instant) -> Self {
        Self {
            from,
            to,
            timing,
            started_at,
        }
    }

    /// Linear progress in `0.0..=1.0`, zero while the delay is running.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed < self.timing.delay {
            return 0.0;
        }
        if self.timing.duration.is_zero() {
            return 1.0;
        }
        let running = elapsed - self.timing.delay;
        (running.as_secs_f32() / self.timing.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn sample(&self, now: Instant) -> Frame {
        let eased = self.timing.easing.apply(self.progress(now));
        self.from.lerp(self.to, eased)
    }

    #[must_use]
    pub fn ends_at(&self) -> Instant {
        self.started_at + self.timing.total()
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.ends_at()
    }

    #[must_use]
    pub fn target(&self) -> Frame {
        self.to
    }
}

/// One animated value that can be driven to either named state.
///
/// Retargeting mid-flight starts the new tween from the current sampled
/// frame, so there is never a visual jump.
#[derive(Debug, Clone)]
pub struct Transition {
    variants: Variants,
    state: VariantState,
    tween: Option<Tween>,
}

impl Transition {
    /// Creates a transition resting in `initial`.
    #[must_use]
    pub fn new(variants: Variants, initial: VariantState) -> Self {
        Self {
            variants,
            state: initial,
            tween: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> VariantState {
        self.state
    }

    /// Starts animating towards `target`. No-op when already heading there.
    pub fn animate_to(&mut self, target: VariantState, now: Instant) {
        if self.state == target {
            return;
        }
        let from = self.value(now);
        self.tween = Some(Tween::new(
            from,
            self.variants.frame(target),
            self.variants.timing,
            now,
        ));
        self.state = target;
    }

    #[must_use]
    pub fn value(&self, now: Instant) -> Frame {
        match &self.tween {
            Some(tween) => tween.sample(now),
            None => self.variants.frame(self.state),
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tween.is_some_and(|tween| !tween.is_finished(now))
    }

    /// Whether the value currently rests on the hidden frame.
    #[must_use]
    pub fn is_fully_hidden(&self, now: Instant) -> bool {
        self.state == VariantState::Hidden && !self.is_animating(now)
    }

    /// Drops a finished tween.
    pub fn settle(&mut self, now: Instant) {
        if self.tween.is_some_and(|tween| tween.is_finished(now)) {
            self.tween = None;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Hidden,
    Shown,
    Entering {
        started_at: Instant,
    },
    Exiting {
        entered_at: Option<Instant>,
        started_at: Instant,
    },
}

/// A parent transition with staggered children.
///
/// On entrance the parent runs its own timing while child `i` starts after
/// [`Variants::child_delay`]. On exit every child leaves together from
/// wherever it was.
#[derive(Debug, Clone)]
pub struct Cascade {
    parent: Variants,
    child: Variants,
    phase: Phase,
}

impl Cascade {
    /// Creates a hidden cascade.
    #[must_use]
    pub fn new(parent: Variants, child: Variants) -> Self {
        Self {
            parent,
            child,
            phase: Phase::Hidden,
        }
    }

    /// Starts the entrance at `now`.
    pub fn reveal(&mut self, now: Instant) {
        self.phase = Phase::Entering { started_at: now };
    }

    /// Shows everything in the visible state without animating.
    pub fn show(&mut self) {
        self.phase = Phase::Shown;
    }

    /// Starts the exit at `now`. No-op when already hidden or exiting.
    pub fn hide(&mut self, now: Instant) {
        let entered_at = match self.phase {
            Phase::Hidden | Phase::Exiting { .. } => return,
            Phase::Shown => None,
            Phase::Entering { started_at } => Some(started_at),
        };
        self.phase = Phase::Exiting {
            entered_at,
            started_at: now,
        };
    }

    /// Jumps back to hidden without animating.
    pub fn reset(&mut self) {
        self.phase = Phase::Hidden;
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.phase == Phase::Hidden
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    fn child_timing(&self, index: usize) -> Timing {
        let mut timing = self.child.timing;
        timing.delay += self.parent.child_delay(index);
        timing
    }

    fn parent_entrance(&self, started_at: Instant) -> Tween {
        Tween::new(
            self.parent.hidden,
            self.parent.visible,
            self.parent.timing,
            started_at,
        )
    }

    fn child_entrance(&self, index: usize, started_at: Instant) -> Tween {
        Tween::new(
            self.child.hidden,
            self.child.visible,
            self.child_timing(index),
            started_at,
        )
    }

    fn exit_timing(variants: &Variants) -> Timing {
        Timing {
            delay: Duration::ZERO,
            ..variants.timing
        }
    }

    #[must_use]
    pub fn container_frame(&self, now: Instant) -> Frame {
        match self.phase {
            Phase::Hidden => self.parent.hidden,
            Phase::Shown => self.parent.visible,
            Phase::Entering { started_at } => self.parent_entrance(started_at).sample(now),
            Phase::Exiting {
                entered_at,
                started_at,
            } => {
                let from = entered_at.map_or(self.parent.visible, |entered| {
                    self.parent_entrance(entered).sample(started_at)
                });
                Tween::new(
                    from,
                    self.parent.hidden,
                    Self::exit_timing(&self.parent),
                    started_at,
                )
                .sample(now)
            }
        }
    }

    #[must_use]
    pub fn child_frame(&self, index: usize, now: Instant) -> Frame {
        match self.phase {
            Phase::Hidden => self.child.hidden,
            Phase::Shown => self.child.visible,
            Phase::Entering { started_at } => self.child_entrance(index, started_at).sample(now),
            Phase::Exiting {
                entered_at,
                started_at,
            } => {
                let from = entered_at.map_or(self.child.visible, |entered| {
                    self.child_entrance(index, entered).sample(started_at)
                });
                Tween::new(
                    from,
                    self.child.hidden,
                    Self::exit_timing(&self.child),
                    started_at,
                )
                .sample(now)
            }
        }
    }

    /// Length of the exit: every element leaves at once, so the slower of
    /// parent and child decides.
    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        self.parent.timing.duration.max(self.child.timing.duration)
    }

    /// Instant the current phase settles, given how many children exist.
    #[must_use]
    pub fn settles_at(&self, child_count: usize) -> Option<Instant> {
        match self.phase {
            Phase::Hidden | Phase::Shown => None,
            Phase::Entering { started_at } => {
                let parent_end = started_at + self.parent.timing.total();
                let last_child = child_count
                    .checked_sub(1)
                    .map(|index| started_at + self.child_timing(index).total());
                Some(last_child.map_or(parent_end, |child_end| parent_end.max(child_end)))
            }
            Phase::Exiting { started_at, .. } => Some(started_at + self.exit_duration()),
        }
    }

    #[must_use]
    pub fn is_animating(&self, child_count: usize, now: Instant) -> bool {
        self.settles_at(child_count).is_some_and(|end| now < end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::StaggerIncrement;
    use crate::ui::animation::variants::presets;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn tween_holds_start_frame_during_delay() {
        let start = Instant::now();
        let tween = Tween::new(
            Frame::TRANSPARENT,
            Frame::REST,
            Timing::from_millis(100).with_delay_millis(50),
            start,
        );
        assert_eq!(tween.sample(start + ms(25)), Frame::TRANSPARENT);
        assert_eq!(tween.sample(start + ms(150)), Frame::REST);
        assert!(!tween.is_finished(start + ms(149)));
        assert!(tween.is_finished(start + ms(150)));
    }

    #[test]
    fn zero_duration_tween_jumps_to_target() {
        let start = Instant::now();
        let tween = Tween::new(Frame::TRANSPARENT, Frame::REST, Timing::instant(), start);
        assert_eq!(tween.sample(start), Frame::REST);
        assert!(tween.is_finished(start));
    }

    #[test]
    fn transition_retargets_from_current_value() {
        let start = Instant::now();
        let timing = Timing::from_millis(100).with_easing(crate::ui::animation::Easing::Linear);
        let mut transition = Transition::new(presets::fade(timing), VariantState::Hidden);
        transition.animate_to(VariantState::Visible, start);
        let halfway = transition.value(start + ms(50));
        assert!((halfway.opacity - 0.5).abs() < 0.01);

        transition.animate_to(VariantState::Hidden, start + ms(50));
        let reversed = transition.value(start + ms(50));
        assert!((reversed.opacity - halfway.opacity).abs() < 0.01);
        assert!(transition.is_animating(start + ms(60)));
        assert!(transition.is_fully_hidden(start + ms(200)));
    }

    #[test]
    fn transition_ignores_repeated_target() {
        let start = Instant::now();
        let mut transition = Transition::new(presets::mobile_menu(), VariantState::Visible);
        transition.animate_to(VariantState::Visible, start);
        assert!(!transition.is_animating(start));
        assert_eq!(transition.value(start), Frame::REST);
    }

    #[test]
    fn settle_drops_finished_tween() {
        let start = Instant::now();
        let mut transition = Transition::new(presets::mobile_menu(), VariantState::Hidden);
        transition.animate_to(VariantState::Visible, start);
        transition.settle(start + ms(10));
        assert!(transition.is_animating(start + ms(10)));
        transition.settle(start + ms(500));
        assert!(!transition.is_animating(start + ms(500)));
        assert_eq!(transition.value(start + ms(500)), Frame::REST);
    }

    #[test]
    fn cascade_children_enter_in_order() {
        let start = Instant::now();
        let mut cascade = Cascade::new(
            presets::stagger_container(StaggerIncrement::new(100)),
            presets::menu_card(),
        );
        cascade.reveal(start);

        let at = start + ms(150);
        let first = cascade.child_frame(0, at);
        let second = cascade.child_frame(1, at);
        let third = cascade.child_frame(2, at);
        assert!(first.opacity > second.opacity);
        assert!(second.opacity > 0.0);
        assert_eq!(third.opacity, 0.0);
    }

    #[test]
    fn cascade_settles_after_last_child() {
        let start = Instant::now();
        let mut cascade = Cascade::new(
            presets::stagger_container(StaggerIncrement::new(100)),
            presets::menu_card(),
        );
        cascade.reveal(start);
        // last child: 2 * 100ms stagger + 600ms card
        assert_eq!(cascade.settles_at(3), Some(start + ms(800)));
        assert!(cascade.is_animating(3, start + ms(799)));
        assert!(!cascade.is_animating(3, start + ms(800)));
        assert_eq!(cascade.child_frame(2, start + ms(800)), Frame::REST);
    }

    #[test]
    fn cascade_exit_starts_from_current_frame() {
        let start = Instant::now();
        let mut cascade = Cascade::new(
            presets::stagger_container(StaggerIncrement::new(100)),
            presets::menu_card(),
        );
        cascade.show();
        cascade.hide(start);
        assert_eq!(cascade.child_frame(0, start), Frame::REST);
        assert_eq!(
            cascade.child_frame(4, start + cascade.exit_duration()),
            presets::menu_card().hidden
        );
        assert!(cascade.is_exiting());
    }

    #[test]
    fn hide_on_hidden_cascade_is_noop() {
        let start = Instant::now();
        let mut cascade = Cascade::new(
            presets::fade(Timing::default()),
            presets::fade(Timing::default()),
        );
        cascade.hide(start);
        assert!(cascade.is_hidden());
        assert_eq!(cascade.settles_at(0), None);
    }
}
