// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the controllers (navigation, catalog,
//! gallery), the static sections, localization and persisted preferences,
//! and routes messages to them.

pub mod config;
mod message;
pub mod paths;
pub mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::{build_layout, is_compact, PAGE_SCROLLABLE_ID};

use crate::content::{self, SiteContent};
use crate::domain::site::SiteIdentity;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::catalog::{self, Catalog};
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::sections;
use crate::ui::state::{PageViewport, SectionMap};
use crate::ui::theming::ThemeStore;
use iced::{window, Element, Subscription, Task, Theme};
use persistence::SettingsThemeStore;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    site: SiteIdentity,
    navbar: navbar::State,
    catalog: catalog::State,
    gallery: gallery::State,
    sections: sections::State,
    layout: SectionMap,
    viewport: PageViewport,
    window_width: f32,
    /// i18n keys of warnings raised while starting up.
    notices: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("site", &self.site.name)
            .field("theme", &self.navbar.theme())
            .field("category", &self.catalog.catalog().selected_category_id())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // The navbar releases its scroll listener before the window goes.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// Nothing is scheduled at boot: the page mounts on its first drawn frame.
pub fn run(app: App) -> iced::Result {
    use std::cell::RefCell;

    // Wrap state in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming it once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and content and builds the page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::error::Error::Configuration)
    /// when the content has no menu category.
    pub fn new(flags: Flags) -> Result<Self> {
        let config_dir = flags.config_dir.map(PathBuf::from);

        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let (content, content_warning) =
            content::load(flags.content_path.as_deref(), config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let store = SettingsThemeStore::new(config_dir);
        let mut app = Self::from_parts(i18n, &config, content, Box::new(store))?;
        app.notices.extend(config_warning);
        app.notices.extend(content_warning);
        for key in &app.notices {
            tracing::warn!(notice = key.as_str(), "startup warning");
        }

        Ok(app)
    }

    /// Builds the page from already loaded parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::error::Error::Configuration)
    /// when the content has no menu category.
    pub fn from_parts(
        i18n: I18n,
        config: &config::Config,
        content: SiteContent,
        store: Box<dyn ThemeStore>,
    ) -> Result<Self> {
        let motion = config.motion();
        let catalog = Catalog::new(content.categories, content.items)?;
        let catalog = catalog::State::new(catalog, &motion);
        let gallery = gallery::State::new(content.gallery, &motion);
        let window_width = WINDOW_DEFAULT_WIDTH as f32;
        let layout = build_layout(&catalog, &gallery, is_compact(window_width));
        let viewport = PageViewport {
            content_height: layout.height(),
            ..PageViewport::default()
        };

        Ok(Self {
            i18n,
            site: content.identity,
            navbar: navbar::State::new(
                content.nav,
                config.general.theme_mode.resolve(),
                store,
                config.scroll_threshold(),
            )
            .with_motion(&motion),
            catalog,
            gallery,
            sections: sections::State::new(&motion),
            layout,
            viewport,
            window_width,
            notices: Vec::new(),
        })
    }

    fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("name", self.site.name.as_str())])
    }

    fn theme(&self) -> Theme {
        self.navbar.theme().iced_theme()
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.navbar.is_animating(now)
            || self.catalog.is_animating(now)
            || self.gallery.is_animating(now)
            || self.sections.is_animating(now)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let mount_sub = subscription::create_mount_subscription(self.navbar.is_hydrated());
        let tick_sub = subscription::create_tick_subscription(self.is_animating(Instant::now()));

        Subscription::batch([event_sub, mount_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            navbar: &mut self.navbar,
            catalog: &mut self.catalog,
            gallery: &mut self.gallery,
            sections: &mut self.sections,
            layout: &mut self.layout,
            viewport: &mut self.viewport,
            window_width: &mut self.window_width,
            now: Instant::now(),
        };

        match message {
            Message::Mounted => update::handle_mounted(&mut ctx),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Catalog(catalog_message) => {
                update::handle_catalog_message(&mut ctx, catalog_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Sections(sections_message) => {
                update::handle_sections_message(&mut ctx, sections_message)
            }
            Message::PageScrolled(viewport) => update::handle_page_scrolled(&mut ctx, viewport),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::Tick(_instant) => update::handle_tick(&mut ctx),
            Message::DismissNotices => {
                self.notices.clear();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            site: &self.site,
            navbar: &self.navbar,
            catalog: &self.catalog,
            gallery: &self.gallery,
            sections: &self.sections,
            notices: &self.notices,
            compact: is_compact(self.window_width),
            now: Instant::now(),
        })
    }

    #[must_use]
    pub fn navbar(&self) -> &navbar::State {
        &self.navbar
    }

    #[must_use]
    pub fn catalog(&self) -> &catalog::State {
        &self.catalog
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn layout(&self) -> &SectionMap {
        &self.layout
    }

    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::theming::{DiscardThemeStore, ThemePreference};
    use tempfile::tempdir;

    fn app_with(content: SiteContent) -> Result<App> {
        App::from_parts(
            I18n::default(),
            &config::Config::default(),
            content,
            Box::new(DiscardThemeStore),
        )
    }

    #[test]
    fn empty_menu_is_fatal() {
        let content = SiteContent {
            categories: Vec::new(),
            ..SiteContent::default()
        };
        match app_with(content) {
            Err(err @ Error::Configuration(_)) => assert!(!err.is_recoverable()),
            other => panic!("expected configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn mounted_message_hydrates_and_starts_animations() {
        let mut app = app_with(SiteContent::default()).expect("default content");
        assert!(app.navbar().tier().is_none());

        let _ = app.update(Message::Mounted);

        assert!(app.navbar().tier().is_some());
        assert!(app.is_animating(Instant::now()));
    }

    #[test]
    fn nothing_moves_before_the_first_frame() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let app = App::new(flags).expect("default content");
        assert!(!app.navbar().is_hydrated());
        assert!(app.navbar().tier().is_none());
        assert!(!app.is_animating(Instant::now()));
    }

    #[test]
    fn reduced_motion_reaches_the_mobile_menu() {
        let mut config = config::Config::default();
        config.animation.reduced_motion = Some(true);
        let mut app = App::from_parts(
            I18n::default(),
            &config,
            SiteContent::default(),
            Box::new(DiscardThemeStore),
        )
        .expect("default content");
        let _ = app.update(Message::Mounted);
        let _ = app.update(Message::Tick(Instant::now()));

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMobileMenu));

        assert!(app.navbar().is_mobile_menu_open());
        assert!(!app.navbar().is_animating(Instant::now()));
    }

    #[test]
    fn closing_the_window_releases_the_scroll_listener() {
        let mut app = app_with(SiteContent::default()).expect("default content");
        let _ = app.update(Message::Mounted);
        assert!(app.navbar().is_listening());

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(!app.navbar().is_listening());
    }

    #[test]
    fn category_selection_is_routed_to_the_catalog() {
        let mut app = app_with(SiteContent::default()).expect("default content");
        let _ = app.update(Message::Mounted);
        let _ = app.update(Message::Catalog(catalog::Message::SelectCategory(
            "desserts".to_string(),
        )));
        assert_eq!(app.catalog().catalog().selected_category_id(), "desserts");
    }

    #[test]
    fn theme_toggle_changes_application_theme() {
        let mut config = config::Config::default();
        config.general.theme_mode = crate::ui::theming::ThemeMode::Dark;
        let mut app = App::from_parts(
            I18n::default(),
            &config,
            SiteContent::default(),
            Box::new(DiscardThemeStore),
        )
        .expect("default content");
        let _ = app.update(Message::Mounted);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));

        assert_eq!(app.navbar().theme(), ThemePreference::Light);
        assert_eq!(app.theme(), ThemePreference::Light.iced_theme());
    }

    #[test]
    fn broken_files_become_notices() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::write(temp_dir.path().join(config::CONFIG_FILE), "= broken")
            .expect("failed to write settings");
        std::fs::write(temp_dir.path().join(content::CONTENT_FILE), "items = 1")
            .expect("failed to write content");

        let flags = Flags {
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let app = App::new(flags).expect("falls back to defaults");
        assert_eq!(
            app.notices(),
            &[
                "notification-config-load-error".to_string(),
                "notification-content-load-error".to_string()
            ]
        );

        let mut app = app;
        let _ = app.update(Message::DismissNotices);
        assert!(app.notices().is_empty());
    }
}
