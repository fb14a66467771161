// SPDX-License-Identifier: MPL-2.0
//! Navigation link types.

/// Anchor id of the page origin. Navigating to it scrolls to the very top
/// instead of looking a section up.
pub const TOP_ANCHOR: &str = "top";

/// Where a navigation link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Section anchor id on the page (without the leading `#`).
    Anchor(String),
    /// Any other destination, handed to the host untouched.
    External(String),
}

impl NavTarget {
    /// Parses an `href`-style target: `#id` is an anchor, anything else is
    /// external.
    #[must_use]
    pub fn parse(href: &str) -> Self {
        match href.strip_prefix('#') {
            Some(id) => NavTarget::Anchor(id.to_string()),
            None => NavTarget::External(href.to_string()),
        }
    }

    /// Returns the anchor id, if this is an anchor.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        match self {
            NavTarget::Anchor(id) => Some(id),
            NavTarget::External(_) => None,
        }
    }

    #[must_use]
    pub fn is_top(&self) -> bool {
        self.anchor() == Some(TOP_ANCHOR)
    }
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub target: NavTarget,
    /// Scroll links suppress default navigation and scroll the page instead.
    pub is_scroll_link: bool,
}

impl NavItem {
    /// Creates a scroll link to an on-page section.
    #[must_use]
    pub fn scroll(label: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::Anchor(anchor.into()),
            is_scroll_link: true,
        }
    }

    /// Creates a link that the host follows as-is.
    #[must_use]
    pub fn link(label: impl Into<String>, href: &str) -> Self {
        Self {
            label: label.into(),
            target: NavTarget::parse(href),
            is_scroll_link: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_anchor_from_external() {
        assert_eq!(
            NavTarget::parse("#menu"),
            NavTarget::Anchor("menu".to_string())
        );
        assert_eq!(
            NavTarget::parse("https://example.com"),
            NavTarget::External("https://example.com".to_string())
        );
    }

    #[test]
    fn top_anchor_is_recognized() {
        assert!(NavTarget::parse("#top").is_top());
        assert!(!NavTarget::parse("#menu").is_top());
        assert!(!NavTarget::parse("top").is_top());
    }

    #[test]
    fn scroll_constructor_sets_flag() {
        let item = NavItem::scroll("Menu", "menu");
        assert!(item.is_scroll_link);
        assert_eq!(item.target.anchor(), Some("menu"));
    }
}
