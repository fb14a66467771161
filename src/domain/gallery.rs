// SPDX-License-Identifier: MPL-2.0
//! Gallery image type.

use std::path::PathBuf;

/// An image shown in the gallery grid and, once clicked, in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: String,
    pub src: PathBuf,
    pub alt: String,
}

impl GalleryImage {
    #[must_use]
    pub fn new(id: impl Into<String>, src: impl Into<PathBuf>, alt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            alt: alt.into(),
        }
    }
}
