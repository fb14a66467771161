// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page Parts
//!
//! - [`navbar`] - Scroll-reactive navigation bar with mobile menu and theme toggle
//! - [`catalog`] - Category-filtered menu with animated category switches
//! - [`gallery`] - Image grid and lightbox
//! - [`sections`] - Hero, about, contact, reservations and footer
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Variants, easing, tweens, stagger, presence and reveal triggers
//! - [`state`] - Reusable state (hydration, section layout, page viewport)
//! - [`widgets`] - Helpers applying animation frames to widgets
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod animation;
pub mod catalog;
pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod sections;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
