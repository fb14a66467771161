// SPDX-License-Identifier: MPL-2.0
//! Navigation bar.
//!
//! The bar floats above the page. It turns translucent-to-solid once the page
//! scrolls past a threshold, collapses into a mobile menu on narrow windows,
//! scrolls to anchored sections and toggles the color theme.
//!
//! Nothing environment-dependent is drawn before [`State::mount`]: until then
//! the view is a fixed-height placeholder.

use crate::domain::navigation::{NavItem, NavTarget};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::animation::{presets, MotionSettings, Transition, VariantState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{Hydration, ScrollThreshold, SectionMap};
use crate::ui::styles;
use crate::ui::theming::{ThemePreference, ThemeStore};
use crate::ui::widgets;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};
use std::time::Instant;

/// Visual tier of the bar background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTier {
    Base,
    Scrolled,
    Open,
}

impl NavTier {
    /// Tier for the given menu and scroll flags. An open menu wins.
    #[must_use]
    pub fn resolve(mobile_menu_open: bool, scrolled: bool) -> Self {
        if mobile_menu_open {
            NavTier::Open
        } else if scrolled {
            NavTier::Scrolled
        } else {
            NavTier::Base
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Brand label linking back to the top of the page.
    pub brand: &'a str,
    /// Window is narrower than the mobile breakpoint.
    pub compact: bool,
    pub now: Instant,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    /// The first frame has been drawn.
    Mounted,
    /// The window is going away.
    Unmounted,
    /// Vertical offset of the page.
    Scrolled(f32),
    ToggleMobileMenu,
    /// Index into the navigation items.
    Navigate(usize),
    /// The brand label, always a link to the top.
    NavigateTop,
    ToggleTheme,
    /// Theme toggle inside the mobile menu; also closes the menu.
    ToggleThemeFromMobileMenu,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Scroll the page to this absolute vertical offset.
    ScrollTo(f32),
    /// Hand a non-scroll link over to the host.
    FollowLink(String),
    /// The theme preference changed.
    ThemeChanged(ThemePreference),
}

/// Navigation controller state.
#[derive(Debug)]
pub struct State {
    items: Vec<NavItem>,
    scrolled: bool,
    mobile_menu_open: bool,
    theme: ThemePreference,
    hydration: Hydration,
    listening: bool,
    threshold: ScrollThreshold,
    store: Box<dyn ThemeStore>,
    menu_motion: Transition,
}

impl State {
    /// Creates the controller. `store` receives every theme change.
    #[must_use]
    pub fn new(
        items: Vec<NavItem>,
        theme: ThemePreference,
        store: Box<dyn ThemeStore>,
        threshold: ScrollThreshold,
    ) -> Self {
        Self {
            items,
            scrolled: false,
            mobile_menu_open: false,
            theme,
            hydration: Hydration::Uninitialized,
            listening: false,
            threshold,
            store,
            menu_motion: Transition::new(presets::mobile_menu(), VariantState::Hidden),
        }
    }

    /// Applies the motion preferences to the mobile menu slide.
    #[must_use]
    pub fn with_motion(mut self, motion: &MotionSettings) -> Self {
        self.menu_motion =
            Transition::new(motion.adapt(presets::mobile_menu()), VariantState::Hidden);
        self
    }

    /// Registers the scroll listener and marks the bar hydrated.
    pub fn mount(&mut self) {
        self.listening = true;
        if self.hydration.mark_ready() {
            tracing::debug!("navbar hydrated");
        }
    }

    /// Releases the scroll listener. Later scroll notifications are ignored.
    pub fn unmount(&mut self) {
        self.listening = false;
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        if self.listening {
            self.scrolled = self.threshold.is_exceeded_by(scroll_y);
        }
    }

    pub fn toggle_mobile_menu(&mut self, now: Instant) {
        self.set_mobile_menu(!self.mobile_menu_open, now);
    }

    fn set_mobile_menu(&mut self, open: bool, now: Instant) {
        self.mobile_menu_open = open;
        let target = if open {
            VariantState::Visible
        } else {
            VariantState::Hidden
        };
        self.menu_motion.animate_to(target, now);
    }

    /// Follows a navigation item.
    ///
    /// Scroll links close the mobile menu and resolve their anchor against
    /// `sections`; an anchor without a section only closes the menu. Other
    /// links are handed to the host untouched.
    pub fn navigate(&mut self, item: &NavItem, sections: &SectionMap, now: Instant) -> Event {
        if !item.is_scroll_link {
            return match &item.target {
                NavTarget::External(url) => Event::FollowLink(url.clone()),
                NavTarget::Anchor(anchor) => Event::FollowLink(format!("#{anchor}")),
            };
        }

        self.set_mobile_menu(false, now);

        if item.target.is_top() {
            return Event::ScrollTo(0.0);
        }

        let Some(anchor) = item.target.anchor() else {
            return Event::None;
        };
        match sections.scroll_offset(anchor) {
            Ok(offset) => Event::ScrollTo(offset),
            Err(err @ Error::MissingScrollTarget(_)) => {
                tracing::debug!("{err}");
                Event::None
            }
            Err(err) => {
                tracing::warn!("navigation failed: {err}");
                Event::None
            }
        }
    }

    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        self.store.store(self.theme);
        self.theme
    }

    /// Theme toggle from inside the mobile menu.
    pub fn toggle_theme_from_mobile_menu(&mut self, now: Instant) -> ThemePreference {
        let theme = self.toggle_theme();
        self.set_mobile_menu(false, now);
        theme
    }

    /// Visual tier, or `None` while not hydrated.
    #[must_use]
    pub fn tier(&self) -> Option<NavTier> {
        self.hydration
            .gate(|| NavTier::resolve(self.mobile_menu_open, self.scrolled))
    }

    /// Process a navbar message and return the corresponding event.
    pub fn update(&mut self, message: Message, sections: &SectionMap, now: Instant) -> Event {
        match message {
            Message::Mounted => {
                self.mount();
                Event::None
            }
            Message::Unmounted => {
                self.unmount();
                Event::None
            }
            Message::Scrolled(scroll_y) => {
                self.on_scroll(scroll_y);
                Event::None
            }
            Message::ToggleMobileMenu => {
                self.toggle_mobile_menu(now);
                Event::None
            }
            Message::Navigate(index) => match self.items.get(index).cloned() {
                Some(item) => self.navigate(&item, sections, now),
                None => Event::None,
            },
            Message::NavigateTop => {
                self.set_mobile_menu(false, now);
                Event::ScrollTo(0.0)
            }
            Message::ToggleTheme => Event::ThemeChanged(self.toggle_theme()),
            Message::ToggleThemeFromMobileMenu => {
                Event::ThemeChanged(self.toggle_theme_from_mobile_menu(now))
            }
        }
    }

    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydration.is_ready()
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.menu_motion.is_animating(now)
    }
}

/// Render the navigation bar.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(tier) = state.tier() else {
        return Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
            .style(styles::container::navbar_placeholder)
            .into();
    };

    let mut content = Column::new()
        .width(Length::Fill)
        .push(build_top_bar(state, &ctx));

    // The menu stays on screen while its exit animation runs.
    if ctx.compact && !state.menu_motion.is_fully_hidden(ctx.now) {
        content = content.push(build_mobile_menu(state, &ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar(tier))
        .into()
}

fn build_top_bar<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(Text::new(ctx.brand).size(typography::TITLE_MD))
        .on_press(Message::NavigateTop)
        .style(styles::button::nav_link);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let glyph = if state.mobile_menu_open { "✕" } else { "☰" };
        row = row.push(
            button(Text::new(glyph).size(typography::TITLE_MD))
                .on_press(Message::ToggleMobileMenu)
                .padding(spacing::XS)
                .style(styles::button::icon(false)),
        );
    } else {
        for (index, item) in state.items.iter().enumerate() {
            row = row.push(
                button(Text::new(item.label.as_str()).size(typography::BODY_LG))
                    .on_press(Message::Navigate(index))
                    .style(styles::button::nav_link),
            );
        }
        row = row.push(
            button(Text::new(theme_glyph(state.theme)).size(typography::TITLE_SM))
                .on_press(Message::ToggleTheme)
                .padding(spacing::XS)
                .style(styles::button::icon(false)),
        );
    }

    row.into()
}

fn build_mobile_menu<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let frame = state.menu_motion.value(ctx.now);

    let mut column = Column::new().spacing(spacing::XXS).padding(spacing::SM);
    for (index, item) in state.items.iter().enumerate() {
        column = column.push(
            button(
                Text::new(item.label.as_str())
                    .size(typography::BODY_LG)
                    .style(styles::text::primary(frame.opacity)),
            )
            .on_press(Message::Navigate(index))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MOBILE_MENU_ROW))
            .style(styles::button::nav_link),
        );
    }

    let theme_label = match state.theme {
        ThemePreference::Dark => ctx.i18n.tr("navbar-light-mode"),
        ThemePreference::Light => ctx.i18n.tr("navbar-dark-mode"),
    };
    column = column.push(
        button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(Text::new(theme_glyph(state.theme)))
                .push(Text::new(theme_label).style(styles::text::primary(frame.opacity))),
        )
        .on_press(Message::ToggleThemeFromMobileMenu)
        .style(styles::button::nav_link),
    );

    let panel = Container::new(column)
        .width(Length::Fill)
        .style(styles::container::mobile_menu(frame.opacity));

    widgets::offset(panel, frame)
}

fn theme_glyph(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::Dark => "☀",
        ThemePreference::Light => "☾",
    }
}
