// SPDX-License-Identifier: MPL-2.0
//! Menu catalog section.
//!
//! [`Catalog`] owns the filtering rules; [`State`] adds the animated keyed
//! swap between categories. The grid for a category is retired completely
//! before the next category's grid enters, so two grids are never on screen
//! together.

pub mod state;
pub mod view;

pub use state::Catalog;
pub use view::{view, ViewContext};

use crate::error::Result;
use crate::ui::animation::{
    presets, ExitPolicy, MotionSettings, Presence, Transition, VariantState,
};
use std::time::Instant;

/// Messages emitted by the catalog view.
#[derive(Debug, Clone)]
pub enum Message {
    SelectCategory(String),
}

/// Catalog section state.
#[derive(Debug, Clone)]
pub struct State {
    catalog: Catalog,
    grid: Presence<String>,
    heading: Transition,
    category_bar: Transition,
}

impl State {
    #[must_use]
    pub fn new(catalog: Catalog, motion: &MotionSettings) -> Self {
        let first = catalog.selected_category_id().to_string();
        let cascade = motion.cascade(
            presets::stagger_container(motion.menu_stagger),
            presets::menu_card(),
        );
        Self {
            catalog,
            grid: Presence::new_hidden(first, cascade, ExitPolicy::Blocking),
            heading: Transition::new(
                motion.adapt(presets::section_heading()),
                VariantState::Hidden,
            ),
            category_bar: Transition::new(
                motion.adapt(presets::category_bar()),
                VariantState::Hidden,
            ),
        }
    }

    /// Starts the entrance animations.
    pub fn mount(&mut self, now: Instant) {
        self.heading.animate_to(VariantState::Visible, now);
        self.category_bar.animate_to(VariantState::Visible, now);
        self.grid.reveal(now);
    }

    /// Selects a category and schedules the grid swap.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::error::Error::InvalidSelection`]; nothing changes.
    pub fn select_category(&mut self, id: &str, now: Instant) -> Result<bool> {
        let changed = self.catalog.select_category(id)?;
        if changed {
            self.grid
                .replace(self.catalog.selected_category_id().to_string(), now);
        }
        Ok(changed)
    }

    /// Process a catalog message.
    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::SelectCategory(id) => {
                if let Err(err) = self.select_category(&id, now) {
                    tracing::debug!("{err}");
                }
            }
        }
    }

    /// Advances the keyed swap.
    pub fn tick(&mut self, now: Instant) {
        if self.grid.tick(now) {
            tracing::trace!(category = %self.grid.displayed(), "category grid mounted");
        }
        self.heading.settle(now);
        self.category_bar.settle(now);
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.heading.is_animating(now)
            || self.category_bar.is_animating(now)
            || self
                .grid
                .is_animating(self.displayed_items_len(), now)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Category whose grid is on screen. Lags behind the selection while the
    /// previous grid is exiting.
    #[must_use]
    pub fn displayed_category_id(&self) -> &str {
        self.grid.displayed()
    }

    fn displayed_items_len(&self) -> usize {
        self.catalog.items_in(self.grid.displayed()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::{MenuCategory, MenuItem};
    use std::time::Duration;

    fn state(now: Instant) -> State {
        let catalog = Catalog::new(
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
        .expect("valid catalog");
        let mut state = State::new(catalog, &MotionSettings::default());
        state.mount(now);
        state
    }

    #[test]
    fn new_grid_waits_for_old_grid_to_exit() {
        let start = Instant::now();
        let mut state = state(start);
        let switch = start + Duration::from_secs(2);

        assert_eq!(state.select_category("mains", switch), Ok(true));
        assert_eq!(state.catalog().selected_category_id(), "mains");
        assert_eq!(state.displayed_category_id(), "starters");

        // The menu card exit takes 600ms
        state.tick(switch + Duration::from_millis(300));
        assert_eq!(state.displayed_category_id(), "starters");
        state.tick(switch + Duration::from_millis(600));
        assert_eq!(state.displayed_category_id(), "mains");
    }

    #[test]
    fn invalid_selection_keeps_grid() {
        let now = Instant::now();
        let mut state = state(now);
        state.update(Message::SelectCategory("drinks".into()), now);
        assert_eq!(state.catalog().selected_category_id(), "starters");
        assert_eq!(state.displayed_category_id(), "starters");
        assert!(!state.grid.is_exiting());
    }

    #[test]
    fn reduced_motion_swaps_on_next_tick() {
        let now = Instant::now();
        let catalog = Catalog::new(
            vec![MenuCategory::new("a", "A"), MenuCategory::new("b", "B")],
            Vec::new(),
        )
        .expect("valid catalog");
        let motion = MotionSettings {
            reduced_motion: true,
            ..MotionSettings::default()
        };
        let mut state = State::new(catalog, &motion);
        state.mount(now);

        state.select_category("b", now).expect("known category");
        state.tick(now);
        assert_eq!(state.displayed_category_id(), "b");
        assert!(!state.is_animating(now));
    }
}
