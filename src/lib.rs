// SPDX-License-Identifier: MPL-2.0
//! `bistro` is the interactive presentation layer of a restaurant site,
//! built with the Iced GUI framework.
//!
//! The page is a single scrollable surface (hero, menu, about, gallery,
//! contact, reservations) with a scroll-reactive navigation bar, a
//! category-filtered menu catalog and an image gallery with a lightbox, all
//! driven by a small declarative animation engine.

#![doc(html_root_url = "https://docs.rs/bistro/0.1.0")]

pub mod app;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
