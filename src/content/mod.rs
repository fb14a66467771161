// SPDX-License-Identifier: MPL-2.0
//! Site content: restaurant identity, navigation, menu and gallery.
//!
//! Content comes from the built-in defaults unless a `content.toml` file is
//! supplied. Each top-level table of that file replaces the matching default
//! section; tables left out keep the defaults.
//!
//! ```toml
//! [site]
//! name = "Chez Nous"
//! tagline = "Seasonal French cooking"
//! phone = "555-0100"
//! email = "hello@chez.example"
//! address = "1 Rue de la Paix"
//!
//! [[categories]]
//! id = "mains"
//! name = "Mains"
//!
//! [[items]]
//! id = "1"
//! name = "Coq au vin"
//! price = "$24"
//! category = "mains"
//! flags = ["signature"]
//! ```

pub mod defaults;

use crate::app::paths;
use crate::domain::gallery::GalleryImage;
use crate::domain::menu::{DietaryFlag, MenuCategory, MenuItem};
use crate::domain::navigation::NavItem;
use crate::domain::site::{CallToAction, OpeningHours, SiteIdentity};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONTENT_FILE: &str = "content.toml";

/// Everything the page renders that is not UI chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub identity: SiteIdentity,
    pub nav: Vec<NavItem>,
    pub categories: Vec<MenuCategory>,
    pub items: Vec<MenuItem>,
    pub gallery: Vec<GalleryImage>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            identity: defaults::identity(),
            nav: defaults::nav_items(),
            categories: defaults::categories(),
            items: defaults::items(),
            gallery: defaults::gallery(),
        }
    }
}

// =============================================================================
// File Format
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContentDoc {
    site: Option<SiteDoc>,
    nav: Option<Vec<NavDoc>>,
    categories: Option<Vec<CategoryDoc>>,
    items: Option<Vec<ItemDoc>>,
    gallery: Option<Vec<ImageDoc>>,
}

#[derive(Debug, Deserialize)]
struct SiteDoc {
    name: String,
    #[serde(default)]
    tagline: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    hours: Vec<HoursDoc>,
    cta: Option<CtaDoc>,
    #[serde(default)]
    socials: SocialsDoc,
}

#[derive(Debug, Deserialize)]
struct HoursDoc {
    day: String,
    open: String,
    close: String,
}

#[derive(Debug, Deserialize)]
struct CtaDoc {
    label: String,
    href: String,
}

#[derive(Debug, Default, Deserialize)]
struct SocialsDoc {
    instagram: Option<String>,
    maps: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NavDoc {
    label: String,
    href: String,
    #[serde(default)]
    scroll: bool,
}

#[derive(Debug, Deserialize)]
struct CategoryDoc {
    id: String,
    name: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemDoc {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    price: String,
    category: String,
    #[serde(default)]
    flags: Vec<FlagDoc>,
    image: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum FlagDoc {
    Signature,
    Spicy,
    Vegetarian,
}

#[derive(Debug, Deserialize)]
struct ImageDoc {
    id: Option<String>,
    src: PathBuf,
    alt: String,
}

impl From<FlagDoc> for DietaryFlag {
    fn from(flag: FlagDoc) -> Self {
        match flag {
            FlagDoc::Signature => DietaryFlag::Signature,
            FlagDoc::Spicy => DietaryFlag::Spicy,
            FlagDoc::Vegetarian => DietaryFlag::Vegetarian,
        }
    }
}

impl From<SiteDoc> for SiteIdentity {
    fn from(doc: SiteDoc) -> Self {
        Self {
            name: doc.name,
            tagline: doc.tagline,
            phone: doc.phone,
            email: doc.email,
            address: doc.address,
            hours: doc
                .hours
                .into_iter()
                .map(|h| OpeningHours {
                    day: h.day,
                    open: h.open,
                    close: h.close,
                })
                .collect(),
            cta: doc.cta.map(|cta| CallToAction {
                label: cta.label,
                href: cta.href,
            }),
            instagram: doc.socials.instagram,
            maps: doc.socials.maps,
        }
    }
}

impl From<NavDoc> for NavItem {
    fn from(doc: NavDoc) -> Self {
        match (doc.scroll, doc.href.strip_prefix('#')) {
            (true, Some(anchor)) => NavItem::scroll(doc.label, anchor),
            _ => NavItem::link(doc.label, &doc.href),
        }
    }
}

impl From<CategoryDoc> for MenuCategory {
    fn from(doc: CategoryDoc) -> Self {
        let category = MenuCategory::new(doc.id, doc.name);
        match doc.description {
            Some(description) => category.with_description(description),
            None => category,
        }
    }
}

impl From<ItemDoc> for MenuItem {
    fn from(doc: ItemDoc) -> Self {
        let mut item = MenuItem::new(doc.id, doc.name, doc.price, doc.category)
            .with_description(doc.description);
        item.flags.extend(doc.flags.into_iter().map(DietaryFlag::from));
        item.image = doc.image;
        item
    }
}

impl ContentDoc {
    fn into_content(self) -> SiteContent {
        let fallback = SiteContent::default();
        SiteContent {
            identity: self.site.map_or(fallback.identity, SiteIdentity::from),
            nav: self
                .nav
                .map_or(fallback.nav, |nav| nav.into_iter().map(NavItem::from).collect()),
            categories: self.categories.map_or(fallback.categories, |categories| {
                categories.into_iter().map(MenuCategory::from).collect()
            }),
            items: self
                .items
                .map_or(fallback.items, |items| items.into_iter().map(MenuItem::from).collect()),
            gallery: self.gallery.map_or(fallback.gallery, |images| {
                images
                    .into_iter()
                    .enumerate()
                    .map(|(index, doc)| {
                        let id = doc.id.unwrap_or_else(|| format!("image-{}", index + 1));
                        GalleryImage::new(id, doc.src, doc.alt)
                    })
                    .collect()
            }),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Parses a content document.
///
/// # Errors
///
/// Returns [`Error::Content`] for malformed TOML or when two gallery images
/// share an id.
pub fn parse(source: &str) -> Result<SiteContent> {
    let doc: ContentDoc =
        toml::from_str(source).map_err(|err| Error::Content(err.to_string()))?;
    let content = doc.into_content();
    check_gallery_ids(&content.gallery)?;
    Ok(content)
}

/// The lightbox tells images apart by id.
fn check_gallery_ids(images: &[GalleryImage]) -> Result<()> {
    let mut seen = BTreeSet::new();
    match images.iter().find(|image| !seen.insert(image.id.as_str())) {
        Some(image) => Err(Error::Content(format!(
            "duplicate gallery image id `{}`",
            image.id
        ))),
        None => Ok(()),
    }
}

pub fn load_from_path(path: &Path) -> Result<SiteContent> {
    let source = fs::read_to_string(path)?;
    parse(&source)
}

/// Loads the site content.
///
/// An explicit `path` wins; otherwise `content.toml` in the config directory
/// is used when present. Any failure falls back to the built-in content and
/// returns a warning i18n key.
pub fn load(path: Option<&Path>, config_dir: Option<PathBuf>) -> (SiteContent, Option<String>) {
    let candidate = match path {
        Some(path) => Some(path.to_path_buf()),
        None => paths::get_app_config_dir_with_override(config_dir)
            .map(|dir| dir.join(CONTENT_FILE))
            .filter(|path| path.exists()),
    };

    let Some(candidate) = candidate else {
        return (SiteContent::default(), None);
    };

    match load_from_path(&candidate) {
        Ok(content) => {
            tracing::info!(path = %candidate.display(), "loaded site content");
            (content, None)
        }
        Err(err) => {
            tracing::warn!(path = %candidate.display(), "{err}; using built-in content");
            (
                SiteContent::default(),
                Some("notification-content-load-error".to_string()),
            )
        }
    }
}
