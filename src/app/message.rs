// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::catalog;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::sections;
use iced::widget::scrollable::Viewport;
use iced::{window, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The first frame has been drawn.
    Mounted,
    Navbar(navbar::Message),
    Catalog(catalog::Message),
    Gallery(gallery::Message),
    Sections(sections::Message),
    /// The page scrollable moved.
    PageScrolled(Viewport),
    WindowResized(Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
    EscapePressed,
    /// Animation frame.
    Tick(Instant),
    DismissNotices,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml and content.toml).
    /// Takes precedence over `BISTRO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional site content file replacing the built-in content.
    pub content_path: Option<PathBuf>,
}
