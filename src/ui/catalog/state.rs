// SPDX-License-Identifier: MPL-2.0
//! Category filter engine.
//!
//! Holds the immutable catalog and the selected category. The visible list is
//! always derived from the selection on demand.

use crate::domain::menu::{MenuCategory, MenuItem};
use crate::error::{Error, Result};

/// Menu catalog with a current category selection.
///
/// The selection always names one of the catalog's categories.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<MenuCategory>,
    items: Vec<MenuItem>,
    selected: usize,
}

impl Catalog {
    /// Builds the catalog and selects the first category.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when `categories` is empty.
    pub fn new(categories: Vec<MenuCategory>, items: Vec<MenuItem>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::Configuration(
                "menu catalog has no categories".to_string(),
            ));
        }

        for item in &items {
            if !categories.iter().any(|c| c.id == item.category_id) {
                tracing::warn!(
                    item = %item.id,
                    category = %item.category_id,
                    "menu item references an unknown category and will never be listed"
                );
            }
        }

        Ok(Self {
            categories,
            items,
            selected: 0,
        })
    }

    /// Selects a category by id. Returns whether the selection changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelection`] for an unknown id; the selection is
    /// left as it was.
    pub fn select_category(&mut self, id: &str) -> Result<bool> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::InvalidSelection(id.to_string()))?;
        let changed = index != self.selected;
        self.selected = index;
        Ok(changed)
    }

    #[must_use]
    pub fn selected_category(&self) -> &MenuCategory {
        &self.categories[self.selected]
    }

    #[must_use]
    pub fn selected_category_id(&self) -> &str {
        &self.selected_category().id
    }

    /// Items of the selected category, in catalog order.
    #[must_use]
    pub fn derive(&self) -> Vec<&MenuItem> {
        self.items_in(self.selected_category_id())
    }

    /// Items of any category, in catalog order.
    #[must_use]
    pub fn items_in(&self, category_id: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.category_id == category_id)
            .collect()
    }

    #[must_use]
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Size of the largest category.
    #[must_use]
    pub fn largest_category_len(&self) -> usize {
        self.categories
            .iter()
            .map(|c| self.items_in(&c.id).len())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::DietaryFlag;

    fn scenario() -> Catalog {
        Catalog::new(
            vec![
                MenuCategory::new("starters", "Starters"),
                MenuCategory::new("mains", "Mains"),
            ],
            vec![
                MenuItem::new("1", "Soup", "$8", "starters"),
                MenuItem::new("2", "Steak", "$32", "mains"),
                MenuItem::new("3", "Salad", "$9", "starters"),
            ],
        )
        .expect("valid catalog")
    }

    fn ids(items: Vec<&MenuItem>) -> Vec<&str> {
        items.into_iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn first_category_is_selected_initially() {
        let catalog = scenario();
        assert_eq!(catalog.selected_category_id(), "starters");
        assert_eq!(ids(catalog.derive()), vec!["1", "3"]);
    }

    #[test]
    fn selecting_a_category_filters_in_order() {
        let mut catalog = scenario();
        assert_eq!(catalog.select_category("mains"), Ok(true));
        assert_eq!(ids(catalog.derive()), vec!["2"]);
    }

    #[test]
    fn unknown_category_leaves_state_untouched() {
        let mut catalog = scenario();
        catalog.select_category("mains").expect("known category");

        assert_eq!(
            catalog.select_category("drinks"),
            Err(Error::InvalidSelection("drinks".into()))
        );
        assert_eq!(catalog.selected_category_id(), "mains");
        assert_eq!(ids(catalog.derive()), vec!["2"]);
    }

    #[test]
    fn reselecting_reports_no_change() {
        let mut catalog = scenario();
        assert_eq!(catalog.select_category("starters"), Ok(false));
    }

    #[test]
    fn empty_categories_are_a_configuration_error() {
        let err = Catalog::new(Vec::new(), Vec::new()).expect_err("must fail");
        assert!(matches!(err, Error::Configuration(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn orphan_items_are_kept_but_never_derived() {
        let catalog = Catalog::new(
            vec![MenuCategory::new("mains", "Mains")],
            vec![
                MenuItem::new("1", "Steak", "$32", "mains"),
                MenuItem::new("2", "Lost", "$1", "nowhere"),
            ],
        )
        .expect("valid catalog");
        assert_eq!(catalog.items().len(), 2);
        assert_eq!(ids(catalog.derive()), vec!["1"]);
    }

    #[test]
    fn derive_is_the_matching_subsequence_for_every_category() {
        let categories: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|id| MenuCategory::new(*id, id.to_uppercase()))
            .collect();
        let items: Vec<_> = (0..30)
            .map(|i| {
                let category = ["a", "b", "c", "b", "a"][i % 5];
                MenuItem::new(i.to_string(), format!("Dish {i}"), "$1", category)
                    .with_flag(DietaryFlag::Vegetarian)
            })
            .collect();
        let mut catalog = Catalog::new(categories, items.clone()).expect("valid catalog");

        for id in ["a", "b", "c"] {
            catalog.select_category(id).expect("known category");
            let expected: Vec<&str> = items
                .iter()
                .filter(|item| item.category_id == id)
                .map(|item| item.id.as_str())
                .collect();
            assert_eq!(ids(catalog.derive()), expected);
        }
    }

    #[test]
    fn largest_category_drives_layout() {
        assert_eq!(scenario().largest_category_len(), 2);
    }
}
