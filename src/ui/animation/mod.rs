// SPDX-License-Identifier: MPL-2.0
//! Animation orchestration.
//!
//! A declarative timing layer shared by every animated part of the page. It
//! never owns business state: controllers hand it instants and keys, and it
//! answers with [`Frame`]s to paint.
//!
//! - [`variants`] - transition specifications (`hidden`/`visible` frames,
//!   timing, stagger) and the presets used by the page
//! - [`easing`] - easing curves including CSS-style cubic Béziers
//! - [`tween`] - the tween engine ([`Tween`], [`Transition`], [`Cascade`])
//! - [`presence`] - keyed subtree replacement ([`Presence`])
//! - [`reveal`] - one-shot entrance triggers ([`Reveal`])

pub mod easing;
pub mod presence;
pub mod reveal;
pub mod tween;
pub mod variants;

pub use easing::Easing;
pub use presence::{ExitPolicy, Presence};
pub use reveal::{Region, Reveal, Trigger};
pub use tween::{Cascade, Transition, Tween};
pub use variants::{presets, Frame, Stagger, Timing, VariantState, Variants};

use crate::domain::ui::{RevealMargin, StaggerIncrement};

/// Motion parameters resolved from the user's configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    pub menu_stagger: StaggerIncrement,
    pub gallery_stagger: StaggerIncrement,
    pub about_stagger: StaggerIncrement,
    pub reveal_margin: RevealMargin,
    /// Collapse every transition to an instant change.
    pub reduced_motion: bool,
}

impl MotionSettings {
    /// Applies the reduced-motion preference to a specification.
    #[must_use]
    pub fn adapt(&self, variants: Variants) -> Variants {
        if self.reduced_motion {
            variants.without_motion()
        } else {
            variants
        }
    }

    /// Builds a cascade honoring the reduced-motion preference.
    #[must_use]
    pub fn cascade(&self, parent: Variants, child: Variants) -> Cascade {
        Cascade::new(self.adapt(parent), self.adapt(child))
    }
}

impl Default for MotionSettings {
    fn default() -> Self {
        use crate::domain::ui::newtypes::stagger_bounds;

        Self {
            menu_stagger: StaggerIncrement::new(stagger_bounds::MENU_MS),
            gallery_stagger: StaggerIncrement::new(stagger_bounds::GALLERY_MS),
            about_stagger: StaggerIncrement::new(stagger_bounds::ABOUT_MS),
            reveal_margin: RevealMargin::default(),
            reduced_motion: false,
        }
    }
}
