// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller.
//!
//! An open lightbox always has an image. The only way to observe otherwise is
//! an external `set_open(true)` without a selection, which
//! [`Lightbox::enforce_invariant`] repairs by closing.

use crate::domain::gallery::GalleryImage;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    open: bool,
    selected: Option<GalleryImage>,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_image(&mut self, image: GalleryImage) {
        self.selected = Some(image);
        self.open = true;
    }

    /// Closes and clears the selection. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
        self.selected = None;
    }

    /// Open-state notification from the modal host. Closing clears the
    /// selection; opening keeps whatever is selected.
    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open = true;
        } else {
            self.close();
        }
    }

    /// Force-closes an open lightbox that lost its image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentLightboxState`] when a repair was needed.
    pub fn enforce_invariant(&mut self) -> Result<()> {
        if self.open && self.selected.is_none() {
            self.close();
            return Err(Error::InconsistentLightboxState);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn selected(&self) -> Option<&GalleryImage> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str) -> GalleryImage {
        GalleryImage::new(id, format!("assets/gallery/{id}.jpg"), "Delicious dish")
    }

    #[test]
    fn open_then_close_clears_everything() {
        let mut lightbox = Lightbox::new();
        lightbox.open_image(image("g1"));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.selected().map(|i| i.id.as_str()), Some("g1"));

        lightbox.close();
        assert_eq!(lightbox, Lightbox::default());
    }

    #[test]
    fn close_is_idempotent() {
        let mut lightbox = Lightbox::new();
        lightbox.open_image(image("g1"));
        lightbox.close();
        let once = lightbox.clone();
        lightbox.close();
        assert_eq!(lightbox, once);
    }

    #[test]
    fn opening_another_image_replaces_selection() {
        let mut lightbox = Lightbox::new();
        lightbox.open_image(image("g1"));
        lightbox.open_image(image("g2"));
        assert_eq!(lightbox.selected().map(|i| i.id.as_str()), Some("g2"));
    }

    #[test]
    fn set_open_false_behaves_like_close() {
        let mut lightbox = Lightbox::new();
        lightbox.open_image(image("g1"));
        lightbox.set_open(false);
        assert!(!lightbox.is_open());
        assert!(lightbox.selected().is_none());
    }

    #[test]
    fn open_without_image_is_force_closed() {
        let mut lightbox = Lightbox::new();
        lightbox.set_open(true);
        assert_eq!(
            lightbox.enforce_invariant(),
            Err(Error::InconsistentLightboxState)
        );
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.enforce_invariant(), Ok(()));
    }

    #[test]
    fn consistent_states_pass_the_check() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.enforce_invariant(), Ok(()));
        lightbox.open_image(image("g1"));
        assert_eq!(lightbox.enforce_invariant(), Ok(()));
        assert!(lightbox.is_open());
    }
}
