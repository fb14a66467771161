// SPDX-License-Identifier: MPL-2.0
//! Catalog section rendering.

use super::{Message, State};
use crate::domain::menu::MenuItem;
use crate::i18n::fluent::I18n;
use crate::ui::animation::Frame;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};
use std::time::Instant;

/// Contextual data needed to render the catalog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub compact: bool,
    pub now: Instant,
}

fn columns(compact: bool) -> usize {
    if compact {
        1
    } else {
        sizing::MENU_COLUMNS
    }
}

/// Fixed section height. Sized for the largest category so switching
/// categories never moves the sections below.
#[must_use]
pub fn height(state: &State, compact: bool) -> f32 {
    let cols = columns(compact);
    let rows = state.catalog().largest_category_len().div_ceil(cols);
    let grid = rows as f32 * (sizing::MENU_CARD_HEIGHT + spacing::LG);
    sizing::NAVBAR_HEIGHT
        + spacing::SECTION * 2.0
        + sizing::SECTION_HEADING
        + sizing::CATEGORY_BAR
        + spacing::XXL
        + grid
}

/// Render the menu section.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading_frame = state.heading.value(ctx.now);
    let bar_frame = state.category_bar.value(ctx.now);

    let heading = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_HEADING))
        .push(
            Text::new(ctx.i18n.tr("menu-title"))
                .size(typography::TITLE_LG)
                .style(styles::text::primary(heading_frame.opacity)),
        )
        .push(
            Text::new(ctx.i18n.tr("menu-description"))
                .size(typography::BODY_LG)
                .style(styles::text::secondary(heading_frame.opacity)),
        );

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::XXL)
        .push(widgets::offset(heading, heading_frame))
        .push(widgets::offset(build_category_bar(state, bar_frame), bar_frame))
        .push(build_grid(state, &ctx));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height(state, ctx.compact)))
        .padding(iced::Padding {
            top: sizing::NAVBAR_HEIGHT + spacing::SECTION,
            bottom: spacing::SECTION,
            left: spacing::MD,
            right: spacing::MD,
        })
        .align_x(Horizontal::Center)
        .clip(true)
        .style(styles::container::page)
        .into()
}

fn build_category_bar<'a>(state: &'a State, frame: Frame) -> Element<'a, Message> {
    let selected = state.catalog().selected_category_id();
    let mut row = Row::new().spacing(spacing::MD).align_y(Vertical::Center);

    for category in state.catalog().categories() {
        let is_selected = category.id == selected;
        row = row.push(
            button(Text::new(category.name.as_str()).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::SelectCategory(category.id.clone()))
                .style(styles::button::category(is_selected, frame.opacity)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CATEGORY_BAR))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn build_grid<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = state.catalog().items_in(state.displayed_category_id());
    let container_alpha = state.grid.container_frame(ctx.now).opacity;
    let cols = columns(ctx.compact);

    let mut grid = Column::new().spacing(spacing::LG);
    for (row_index, chunk) in items.chunks(cols).enumerate() {
        let mut row = Row::new().spacing(spacing::LG);
        for (col_index, item) in chunk.iter().enumerate() {
            let index = row_index * cols + col_index;
            let frame = state.grid.child_frame(index, ctx.now);
            row = row.push(build_card(*item, frame, container_alpha, ctx.i18n));
        }
        // Keep the last row's cards the same width as the others
        for _ in chunk.len()..cols {
            row = row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn build_card<'a>(
    item: &'a MenuItem,
    frame: Frame,
    container_alpha: f32,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let alpha = frame.opacity * container_alpha;

    let mut badges = Row::new().spacing(spacing::XS);
    for flag in item.badges() {
        badges = badges.push(
            Container::new(
                Text::new(i18n.tr(flag.i18n_key()))
                    .size(typography::CAPTION)
                    .style(styles::text::badge(flag, alpha)),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge(flag, alpha)),
        );
    }

    let header = Row::new()
        .spacing(spacing::MD)
        .push(
            Column::new()
                .spacing(spacing::XS)
                .width(Length::Fill)
                .push(
                    Text::new(item.name.as_str())
                        .size(typography::TITLE_SM)
                        .style(styles::text::primary(alpha)),
                )
                .push(
                    Text::new(item.description.as_str())
                        .size(typography::BODY_SM)
                        .style(styles::text::secondary(alpha)),
                ),
        )
        .push(
            Text::new(item.price.as_str())
                .size(typography::BODY_LG)
                .style(styles::text::accent(alpha)),
        );

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(badges),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::MENU_CARD_HEIGHT))
    .style(styles::container::card(alpha));

    Container::new(widgets::offset(card, frame))
        .width(Length::Fill)
        .into()
}
