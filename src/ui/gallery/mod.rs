// SPDX-License-Identifier: MPL-2.0
//! Gallery section and lightbox.
//!
//! Tiles cascade in the first time the section scrolls into view. Clicking a
//! tile opens the [`Lightbox`]; the overlay is a keyed subtree (keyed by the
//! image id) whose exit finishes before another image can enter.

pub mod lightbox;
pub mod view;

pub use lightbox::Lightbox;
pub use view::{height, lightbox as lightbox_view, view, ViewContext};

use crate::domain::gallery::GalleryImage;
use crate::ui::animation::{
    presets, Cascade, ExitPolicy, MotionSettings, Presence, Region, Reveal,
};
use crate::ui::design_tokens::{sizing, spacing};
use std::time::Instant;

/// Messages emitted by the gallery and its lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// Index into the gallery images.
    OpenImage(usize),
    Close,
    /// Open-state notification from the modal (backdrop, Escape).
    OpenChanged(bool),
    /// Click on the enlarged image itself; swallowed so it does not reach the
    /// backdrop.
    ImagePressed,
}

/// Gallery section state.
#[derive(Debug, Clone)]
pub struct State {
    images: Vec<GalleryImage>,
    lightbox: Lightbox,
    overlay: Presence<Option<String>>,
    heading: Cascade,
    heading_reveal: Reveal,
    grid: Cascade,
    grid_reveal: Reveal,
}

impl State {
    #[must_use]
    pub fn new(images: Vec<GalleryImage>, motion: &MotionSettings) -> Self {
        let stagger = presets::stagger_container(motion.gallery_stagger);
        Self {
            images,
            lightbox: Lightbox::new(),
            overlay: Presence::new_hidden(
                None,
                motion.cascade(presets::lightbox(), presets::lightbox_control()),
                ExitPolicy::Blocking,
            ),
            heading: motion.cascade(stagger, presets::gallery_tile()),
            heading_reveal: Reveal::in_view(motion.reveal_margin),
            grid: motion.cascade(stagger, presets::gallery_tile()),
            grid_reveal: Reveal::in_view(motion.reveal_margin),
        }
    }

    /// Fires the entrance cascades once their part of `section` is visible.
    pub fn observe(&mut self, section: Region, viewport: Region, now: Instant) {
        let heading_top = section.top + sizing::NAVBAR_HEIGHT + spacing::SECTION;
        let heading = Region::new(heading_top, sizing::SECTION_HEADING);
        let grid = Region::new(
            heading.bottom() + spacing::XXL,
            section.bottom() - spacing::SECTION - heading.bottom() - spacing::XXL,
        );

        if self.heading_reveal.observe(heading, viewport, now) {
            self.heading.reveal(now);
        }
        if self.grid_reveal.observe(grid, viewport, now) {
            self.grid.reveal(now);
        }
    }

    /// Process a gallery message.
    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::OpenImage(index) => {
                if let Some(image) = self.images.get(index).cloned() {
                    self.lightbox.open_image(image);
                }
            }
            Message::Close => self.lightbox.close(),
            Message::OpenChanged(open) => self.lightbox.set_open(open),
            Message::ImagePressed => {}
        }

        if let Err(err) = self.lightbox.enforce_invariant() {
            tracing::warn!("{err}; lightbox closed");
        }
        self.overlay
            .replace(self.lightbox.selected().map(|image| image.id.clone()), now);
    }

    /// Advances the lightbox swap.
    pub fn tick(&mut self, now: Instant) {
        if self.overlay.tick(now) && self.overlay.displayed().is_none() {
            self.overlay.conceal();
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.heading.is_animating(2, now)
            || self.grid.is_animating(self.images.len(), now)
            || self.overlay.is_animating(1, now)
    }

    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Image currently drawn in the overlay. Lags behind the lightbox state
    /// while an exit runs.
    #[must_use]
    pub fn displayed_image(&self) -> Option<&GalleryImage> {
        let id = self.overlay.displayed().as_deref()?;
        self.images.iter().find(|image| image.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::RevealMargin;
    use std::time::Duration;

    fn images() -> Vec<GalleryImage> {
        (1..=6)
            .map(|i| {
                GalleryImage::new(
                    format!("g{i}"),
                    format!("assets/gallery/food{i}.jpg"),
                    "Delicious dish",
                )
            })
            .collect()
    }

    fn state() -> State {
        State::new(images(), &MotionSettings::default())
    }

    #[test]
    fn open_image_then_close() {
        let now = Instant::now();
        let mut state = state();
        state.update(Message::OpenImage(0), now);
        assert!(state.lightbox().is_open());
        assert_eq!(state.displayed_image().map(|i| i.id.as_str()), Some("g1"));

        state.update(Message::Close, now + Duration::from_millis(500));
        assert!(!state.lightbox().is_open());
        assert!(state.lightbox().selected().is_none());
    }

    #[test]
    fn closed_image_stays_drawn_until_exit_ends() {
        let start = Instant::now();
        let mut state = state();
        state.update(Message::OpenImage(1), start);
        let close = start + Duration::from_secs(1);
        state.update(Message::OpenChanged(false), close);

        state.tick(close + Duration::from_millis(100));
        assert_eq!(state.displayed_image().map(|i| i.id.as_str()), Some("g2"));

        // Lightbox exit takes 300ms
        state.tick(close + Duration::from_millis(300));
        assert!(state.displayed_image().is_none());
    }

    #[test]
    fn reopening_after_exit_is_immediate() {
        let start = Instant::now();
        let mut state = state();
        state.update(Message::OpenImage(0), start);
        let close = start + Duration::from_secs(1);
        state.update(Message::Close, close);
        let done = close + Duration::from_millis(300);
        state.tick(done);

        state.update(Message::OpenImage(2), done);
        assert_eq!(state.displayed_image().map(|i| i.id.as_str()), Some("g3"));
    }

    #[test]
    fn open_change_without_image_is_repaired() {
        let now = Instant::now();
        let mut state = state();
        state.update(Message::OpenChanged(true), now);
        assert!(!state.lightbox().is_open());
        assert!(state.displayed_image().is_none());
    }

    #[test]
    fn out_of_range_tile_is_ignored() {
        let now = Instant::now();
        let mut state = state();
        state.update(Message::OpenImage(99), now);
        assert!(!state.lightbox().is_open());
    }

    #[test]
    fn grid_reveals_once_when_scrolled_into_view() {
        let now = Instant::now();
        let motion = MotionSettings {
            reveal_margin: RevealMargin::new(100.0),
            ..MotionSettings::default()
        };
        let mut state = State::new(images(), &motion);
        let section = Region::new(3000.0, 1000.0);

        state.observe(section, Region::new(0.0, 800.0), now);
        assert!(!state.grid_reveal.has_fired());

        state.observe(section, Region::new(2800.0, 800.0), now);
        assert!(state.heading_reveal.has_fired());
        assert!(state.grid_reveal.has_fired());
        assert!(state.is_animating(now));
    }
}
