// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Reusable state pieces shared by the page controllers, kept apart from the
//! main `App` struct.

pub mod hydration;
pub mod sections;
pub mod viewport;

// Re-export commonly used types for convenience
pub use crate::domain::ui::ScrollThreshold;
pub use hydration::Hydration;
pub use sections::SectionMap;
pub use viewport::PageViewport;
