// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core restaurant content types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so that the controllers
//! built on top of it stay testable without a running UI.
//!
//! # Modules
//!
//! - [`menu`]: Catalog types ([`MenuCategory`](menu::MenuCategory),
//!   [`MenuItem`](menu::MenuItem), [`DietaryFlag`](menu::DietaryFlag))
//! - [`gallery`]: Gallery types ([`GalleryImage`](gallery::GalleryImage))
//! - [`navigation`]: Navigation link types ([`NavItem`](navigation::NavItem),
//!   [`NavTarget`](navigation::NavTarget))
//! - [`site`]: Restaurant identity ([`SiteIdentity`](site::SiteIdentity),
//!   [`OpeningHours`](site::OpeningHours))
//! - [`ui`]: UI value objects ([`ScrollThreshold`](ui::newtypes::ScrollThreshold),
//!   [`StaggerIncrement`](ui::newtypes::StaggerIncrement),
//!   [`RevealMargin`](ui::newtypes::RevealMargin))

pub mod gallery;
pub mod menu;
pub mod navigation;
pub mod site;
pub mod ui;
