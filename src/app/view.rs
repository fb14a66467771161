// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections. The navigation bar, the
//! lightbox and startup notices are stacked on top of it.

use super::update::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::domain::site::SiteIdentity;
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::sections;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, Column, Container, Id, Row, Stack, Text},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a SiteIdentity,
    pub navbar: &'a navbar::State,
    pub catalog: &'a catalog::State,
    pub gallery: &'a gallery::State,
    pub sections: &'a sections::State,
    pub notices: &'a [String],
    pub compact: bool,
    pub now: Instant,
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let section_ctx = || sections::ViewContext {
        i18n: ctx.i18n,
        site: ctx.site,
        compact: ctx.compact,
        now: ctx.now,
    };
    let gallery_ctx = || gallery::ViewContext {
        i18n: ctx.i18n,
        compact: ctx.compact,
        now: ctx.now,
    };

    let page = Column::new()
        .width(Length::Fill)
        .push(sections::hero(ctx.sections, section_ctx()).map(Message::Sections))
        .push(
            catalog::view(
                ctx.catalog,
                catalog::ViewContext {
                    i18n: ctx.i18n,
                    compact: ctx.compact,
                    now: ctx.now,
                },
            )
            .map(Message::Catalog),
        )
        .push(sections::about(ctx.sections, section_ctx()).map(Message::Sections))
        .push(gallery::view(ctx.gallery, gallery_ctx()).map(Message::Gallery))
        .push(sections::contact(ctx.sections, section_ctx()).map(Message::Sections))
        .push(sections::reservations(section_ctx()).map(Message::Sections))
        .push(sections::footer(section_ctx()).map(Message::Sections));

    let page = Container::new(
        scrollable(page)
            .id(Id::new(PAGE_SCROLLABLE_ID))
            .on_scroll(Message::PageScrolled)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let navbar = navbar::view(
        ctx.navbar,
        navbar::ViewContext {
            i18n: ctx.i18n,
            brand: ctx.site.name.as_str(),
            compact: ctx.compact,
            now: ctx.now,
        },
    )
    .map(Message::Navbar);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(navbar);

    if !ctx.notices.is_empty() {
        layers = layers.push(view_notices(ctx.i18n, ctx.notices));
    }

    if let Some(lightbox) = gallery::lightbox_view(ctx.gallery, gallery_ctx()) {
        layers = layers.push(lightbox.map(Message::Gallery));
    }

    layers.into()
}

/// Startup warnings, anchored to the bottom of the window.
fn view_notices<'a>(i18n: &'a I18n, notices: &'a [String]) -> Element<'a, Message> {
    let mut lines = Column::new().spacing(spacing::XS);
    for key in notices {
        lines = lines.push(
            Text::new(i18n.tr(key))
                .size(typography::BODY_SM)
                .style(styles::text::primary(1.0)),
        );
    }

    let card = Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(lines)
            .push(
                button(Text::new("✕").size(typography::BODY))
                    .on_press(Message::DismissNotices)
                    .padding(spacing::XS)
                    .style(styles::button::icon(false)),
            ),
    )
    .padding(spacing::MD)
    .max_width(sizing::CONTENT_MAX_WIDTH)
    .style(styles::container::card(1.0));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}
