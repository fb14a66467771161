// SPDX-License-Identifier: MPL-2.0
//! Menu catalog types.

use std::collections::BTreeSet;
use std::fmt;

/// A menu category such as "Starters" or "Desserts".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl MenuCategory {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Dish attributes rendered as badges.
///
/// The declaration order is the badge order: iterating a
/// `BTreeSet<DietaryFlag>` always yields signature, then spicy, then
/// vegetarian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DietaryFlag {
    Signature,
    Spicy,
    Vegetarian,
}

impl DietaryFlag {
    /// Returns the i18n message key of the badge label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            DietaryFlag::Signature => "menu-badge-signature",
            DietaryFlag::Spicy => "menu-badge-spicy",
            DietaryFlag::Vegetarian => "menu-badge-vegetarian",
        }
    }
}

impl fmt::Display for DietaryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietaryFlag::Signature => write!(f, "signature"),
            DietaryFlag::Spicy => write!(f, "spicy"),
            DietaryFlag::Vegetarian => write!(f, "vegetarian"),
        }
    }
}

/// A single dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display price, kept verbatim (ranges such as `$12-45` are allowed).
    pub price: String,
    pub category_id: String,
    pub flags: BTreeSet<DietaryFlag>,
    pub image: Option<String>,
}

impl MenuItem {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price: price.into(),
            category_id: category_id.into(),
            flags: BTreeSet::new(),
            image: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_flag(mut self, flag: DietaryFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Badges to render, in the fixed signature/spicy/vegetarian order.
    pub fn badges(&self) -> impl Iterator<Item = DietaryFlag> + '_ {
        self.flags.iter().copied()
    }

    #[must_use]
    pub fn has_flag(&self, flag: DietaryFlag) -> bool {
        self.flags.contains(&flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_follow_fixed_order_regardless_of_insertion() {
        let item = MenuItem::new("x", "Dish", "$1", "mains")
            .with_flag(DietaryFlag::Vegetarian)
            .with_flag(DietaryFlag::Spicy)
            .with_flag(DietaryFlag::Signature);

        let badges: Vec<_> = item.badges().collect();
        assert_eq!(
            badges,
            vec![
                DietaryFlag::Signature,
                DietaryFlag::Spicy,
                DietaryFlag::Vegetarian
            ]
        );
    }

    #[test]
    fn duplicate_flags_collapse() {
        let item = MenuItem::new("x", "Dish", "$1", "mains")
            .with_flag(DietaryFlag::Spicy)
            .with_flag(DietaryFlag::Spicy);
        assert_eq!(item.badges().count(), 1);
        assert!(item.has_flag(DietaryFlag::Spicy));
        assert!(!item.has_flag(DietaryFlag::Vegetarian));
    }

    #[test]
    fn category_description_is_optional() {
        let plain = MenuCategory::new("drinks", "Beverages");
        assert!(plain.description.is_none());
        let described = plain.with_description("Perfectly paired drinks");
        assert_eq!(
            described.description.as_deref(),
            Some("Perfectly paired drinks")
        );
    }
}
