// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for each part of
//! the page, plus the page layout used for anchor navigation.

use super::Message;
use crate::ui::catalog;
use crate::ui::design_tokens::sizing;
use crate::ui::gallery;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::sections::{self, anchors, heights};
use crate::ui::state::{PageViewport, SectionMap};
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{window, Size, Task};
use std::time::Instant;

/// Widget id of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "page";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub navbar: &'a mut navbar::State,
    pub catalog: &'a mut catalog::State,
    pub gallery: &'a mut gallery::State,
    pub sections: &'a mut sections::State,
    pub layout: &'a mut SectionMap,
    pub viewport: &'a mut PageViewport,
    pub window_width: &'a mut f32,
    pub now: Instant,
}

/// Whether a window of this width gets the mobile layout.
#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < sizing::MOBILE_BREAKPOINT
}

/// Lays the sections out top to bottom. Matches the order of the view.
#[must_use]
pub fn build_layout(
    catalog: &catalog::State,
    gallery: &gallery::State,
    compact: bool,
) -> SectionMap {
    SectionMap::new()
        .with(None, heights::hero())
        .with(Some(anchors::MENU), catalog::view::height(catalog, compact))
        .with(Some(anchors::ABOUT), heights::about(compact))
        .with(
            Some(anchors::GALLERY),
            gallery::height(gallery.images().len(), compact),
        )
        .with(Some(anchors::CONTACT), heights::contact())
        .with(Some(anchors::RESERVATIONS), heights::reservations())
        .with(None, heights::footer())
}

/// Recomputes the layout and keeps the viewport's content height in sync.
pub fn relayout(ctx: &mut UpdateContext<'_>) {
    *ctx.layout = build_layout(ctx.catalog, ctx.gallery, is_compact(*ctx.window_width));
    ctx.viewport.content_height = ctx.layout.height();
}

/// Fires the scroll-gated entrances of every section in view.
fn observe_reveals(ctx: &mut UpdateContext<'_>) {
    let visible = ctx.viewport.region();
    ctx.sections.observe(ctx.layout, visible, ctx.now);
    if let Some(region) = ctx.layout.region(anchors::GALLERY) {
        ctx.gallery.observe(region, visible, ctx.now);
    }
}

/// Scrolls the page so that `offset` is at the top of the window.
fn scroll_page_to(viewport: &PageViewport, offset: f32) -> Task<Message> {
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: viewport.relative(offset),
        },
    )
}

/// Outside links are left to the host platform; the page only records them.
fn follow_link(url: &str) {
    tracing::info!(url, "external link requested");
}

/// Starts the page once its first frame is on screen. Later frames are ignored.
pub fn handle_mounted(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.navbar.is_hydrated() {
        return Task::none();
    }
    let task = handle_navbar_message(ctx, navbar::Message::Mounted);
    ctx.catalog.mount(ctx.now);
    ctx.sections.mount(ctx.now);
    observe_reveals(ctx);
    task
}

/// Releases the scroll listener, then closes the window.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    let _ = handle_navbar_message(ctx, navbar::Message::Unmounted);
    tracing::debug!("window closing");
    window::close(id)
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match ctx.navbar.update(message, ctx.layout, ctx.now) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(offset) => scroll_page_to(ctx.viewport, offset),
        NavbarEvent::FollowLink(url) => {
            follow_link(&url);
            Task::none()
        }
        NavbarEvent::ThemeChanged(theme) => {
            tracing::debug!(?theme, "theme changed");
            Task::none()
        }
    }
}

pub fn handle_catalog_message(
    ctx: &mut UpdateContext<'_>,
    message: catalog::Message,
) -> Task<Message> {
    ctx.catalog.update(message, ctx.now);
    Task::none()
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    ctx.gallery.update(message, ctx.now);
    Task::none()
}

pub fn handle_sections_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::ScrollTo(anchor) => match ctx.layout.scroll_offset(&anchor) {
            Ok(offset) => scroll_page_to(ctx.viewport, offset),
            Err(err) => {
                tracing::debug!("{err}");
                Task::none()
            }
        },
        sections::Message::FollowLink(url) => {
            follow_link(&url);
            Task::none()
        }
    }
}

pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, viewport: Viewport) -> Task<Message> {
    ctx.viewport.update(&viewport);
    let scroll_y = ctx.viewport.offset_y;
    let task = handle_navbar_message(ctx, navbar::Message::Scrolled(scroll_y));
    observe_reveals(ctx);
    task
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    let was_compact = is_compact(*ctx.window_width);
    *ctx.window_width = size.width;
    ctx.viewport.resize(size.height);
    if was_compact != is_compact(size.width) {
        relayout(ctx);
    }
    observe_reveals(ctx);
    Task::none()
}

/// Escape closes the topmost overlay: the lightbox, then the mobile menu.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.gallery.lightbox().is_open() {
        ctx.gallery.update(gallery::Message::Close, ctx.now);
    } else if ctx.navbar.is_mobile_menu_open() {
        ctx.navbar.toggle_mobile_menu(ctx.now);
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.catalog.tick(ctx.now);
    ctx.gallery.tick(ctx.now);
    ctx.sections.tick(ctx.now);
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use crate::ui::animation::MotionSettings;
    use crate::ui::catalog::Catalog;
    use crate::ui::state::ScrollThreshold;
    use crate::ui::theming::{DiscardThemeStore, ThemePreference};

    struct Fixture {
        navbar: navbar::State,
        catalog: catalog::State,
        gallery: gallery::State,
        sections: sections::State,
        layout: SectionMap,
        viewport: PageViewport,
        window_width: f32,
    }

    impl Fixture {
        fn new(window_width: f32) -> Self {
            let content = SiteContent::default();
            let motion = MotionSettings::default();
            let catalog = catalog::State::new(
                Catalog::new(content.categories, content.items).expect("default content"),
                &motion,
            );
            let gallery = gallery::State::new(content.gallery, &motion);
            let layout = build_layout(&catalog, &gallery, is_compact(window_width));
            let viewport = PageViewport {
                content_height: layout.height(),
                ..PageViewport::default()
            };
            Self {
                navbar: navbar::State::new(
                    content.nav,
                    ThemePreference::Dark,
                    Box::new(DiscardThemeStore),
                    ScrollThreshold::default(),
                ),
                catalog,
                gallery,
                sections: sections::State::new(&motion),
                layout,
                viewport,
                window_width,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                navbar: &mut self.navbar,
                catalog: &mut self.catalog,
                gallery: &mut self.gallery,
                sections: &mut self.sections,
                layout: &mut self.layout,
                viewport: &mut self.viewport,
                window_width: &mut self.window_width,
                now: Instant::now(),
            }
        }
    }

    #[test]
    fn layout_places_sections_in_page_order() {
        let fixture = Fixture::new(1280.0);
        let order: Vec<_> = fixture.layout.iter().map(|(id, _)| id).collect();
        assert_eq!(
            order,
            vec![
                anchors::MENU,
                anchors::ABOUT,
                anchors::GALLERY,
                anchors::CONTACT,
                anchors::RESERVATIONS
            ]
        );
        let menu = fixture.layout.region(anchors::MENU).expect("menu section");
        assert_eq!(menu.top, heights::hero());
    }

    #[test]
    fn compact_layout_is_taller() {
        let wide = Fixture::new(1280.0);
        let narrow = Fixture::new(400.0);
        assert!(narrow.layout.height() > wide.layout.height());
    }

    #[test]
    fn mounting_hydrates_the_navbar() {
        let mut fixture = Fixture::new(1280.0);
        let _ = handle_mounted(&mut fixture.ctx());
        assert!(fixture.navbar.tier().is_some());
        assert!(fixture.navbar.is_listening());
    }

    #[test]
    fn later_frames_do_not_restart_entrances() {
        let mut fixture = Fixture::new(1280.0);
        let first = Instant::now();
        let mut ctx = fixture.ctx();
        ctx.now = first;
        let _ = handle_mounted(&mut ctx);

        let later = first + std::time::Duration::from_secs(30);
        let mut ctx = fixture.ctx();
        ctx.now = later;
        let _ = handle_mounted(&mut ctx);

        assert!(!fixture.catalog.is_animating(later));
        assert!(!fixture.sections.is_animating(later));
    }

    #[test]
    fn crossing_the_breakpoint_rebuilds_the_layout() {
        let mut fixture = Fixture::new(1280.0);
        let wide_height = fixture.layout.height();

        let _ = handle_window_resized(&mut fixture.ctx(), Size::new(400.0, 700.0));

        assert!(fixture.layout.height() > wide_height);
        assert_eq!(fixture.viewport.content_height, fixture.layout.height());
        assert_eq!(fixture.viewport.height, 700.0);
    }

    #[test]
    fn escape_closes_lightbox_before_mobile_menu() {
        let mut fixture = Fixture::new(400.0);
        let _ = handle_mounted(&mut fixture.ctx());
        {
            let mut ctx = fixture.ctx();
            let now = ctx.now;
            ctx.navbar.toggle_mobile_menu(now);
            ctx.gallery.update(gallery::Message::OpenImage(0), now);
        }

        let _ = handle_escape(&mut fixture.ctx());
        assert!(!fixture.gallery.lightbox().is_open());
        assert!(fixture.navbar.is_mobile_menu_open());

        let _ = handle_escape(&mut fixture.ctx());
        assert!(!fixture.navbar.is_mobile_menu_open());
    }

    #[test]
    fn unknown_section_anchor_is_ignored() {
        let mut fixture = Fixture::new(1280.0);
        let before = fixture.layout.clone();
        let _ = handle_sections_message(
            &mut fixture.ctx(),
            sections::Message::ScrollTo("private-dining".to_string()),
        );
        assert_eq!(fixture.layout, before);
    }
}
