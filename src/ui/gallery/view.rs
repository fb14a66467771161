// SPDX-License-Identifier: MPL-2.0
//! Gallery grid and lightbox overlay rendering.

use super::{Message, State};
use crate::domain::gallery::GalleryImage;
use crate::i18n::fluent::I18n;
use crate::ui::animation::Frame;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image, mouse_area, Column, Container, Row, Space, Stack, Text},
    ContentFit, Element, Length,
};
use std::time::Instant;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub compact: bool,
    pub now: Instant,
}

fn columns(compact: bool) -> usize {
    if compact {
        1
    } else {
        sizing::GALLERY_COLUMNS
    }
}

/// Fixed section height for the given number of images.
#[must_use]
pub fn height(image_count: usize, compact: bool) -> f32 {
    let rows = image_count.div_ceil(columns(compact));
    sizing::NAVBAR_HEIGHT
        + spacing::SECTION * 2.0
        + sizing::SECTION_HEADING
        + spacing::XXL
        + rows as f32 * (sizing::GALLERY_TILE + spacing::LG)
}

/// Render the gallery section.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = state.heading.child_frame(0, ctx.now);
    let subtitle = state.heading.child_frame(1, ctx.now);

    let heading = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_HEADING))
        .push(widgets::offset(
            Text::new(ctx.i18n.tr("gallery-title"))
                .size(typography::TITLE_LG)
                .style(styles::text::primary(title.opacity)),
            title,
        ))
        .push(widgets::offset(
            Text::new(ctx.i18n.tr("gallery-description"))
                .size(typography::BODY_LG)
                .style(styles::text::secondary(subtitle.opacity)),
            subtitle,
        ));

    let cols = columns(ctx.compact);
    let container_alpha = state.grid.container_frame(ctx.now).opacity;
    let mut grid = Column::new().spacing(spacing::LG);
    for (row_index, chunk) in state.images.chunks(cols).enumerate() {
        let mut row = Row::new().spacing(spacing::LG);
        for (col_index, image) in chunk.iter().enumerate() {
            let index = row_index * cols + col_index;
            let frame = state.grid.child_frame(index, ctx.now);
            row = row.push(build_tile(index, image, frame, container_alpha, ctx.i18n));
        }
        for _ in chunk.len()..cols {
            row = row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::XXL)
        .push(heading)
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height(state.images.len(), ctx.compact)))
        .padding(iced::Padding {
            top: sizing::NAVBAR_HEIGHT + spacing::SECTION,
            bottom: spacing::SECTION,
            left: spacing::MD,
            right: spacing::MD,
        })
        .align_x(Horizontal::Center)
        .clip(true)
        .style(styles::container::section_alt)
        .into()
}

fn build_tile<'a>(
    index: usize,
    gallery_image: &'a GalleryImage,
    frame: Frame,
    container_alpha: f32,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let alpha = frame.opacity * container_alpha;

    let picture = image(image::Handle::from_path(&gallery_image.src))
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill)
        .opacity(alpha);

    let caption = Container::new(
        Text::new(i18n.tr("gallery-enlarge"))
            .size(typography::BODY_LG)
            .style(styles::text::on_overlay(alpha)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(spacing::MD);

    let tile = Container::new(Stack::new().push(picture).push(caption))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GALLERY_TILE))
        .clip(true)
        .style(styles::container::tile(alpha));

    let hit_area = button(widgets::offset(tile, frame))
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::OpenImage(index))
        .style(styles::button::tile);

    hit_area.into()
}

/// Render the lightbox overlay, if an image is on screen.
///
/// The backdrop only reacts while the lightbox is open; during the exit
/// animation the overlay is drawn but inert.
pub fn lightbox<'a>(state: &'a State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let shown = state.displayed_image()?;
    let interactive = state.lightbox.is_open();
    let panel = state.overlay.container_frame(ctx.now);
    let control = state.overlay.child_frame(0, ctx.now);

    let picture = image(image::Handle::from_path(&shown.src))
        .content_fit(ContentFit::Contain)
        .width(Length::Fixed(widgets::scaled(sizing::LIGHTBOX_MAX_WIDTH, panel)))
        .height(Length::Fixed(widgets::scaled(sizing::LIGHTBOX_MAX_HEIGHT, panel)))
        .opacity(panel.opacity);

    let alt = Text::new(shown.alt.as_str())
        .size(typography::BODY)
        .style(styles::text::on_overlay(panel.opacity));

    let mut close = button(Text::new("✕").size(typography::TITLE_SM))
        .padding(spacing::XS)
        .style(styles::button::icon(true));
    if interactive {
        close = close.on_press(Message::Close);
    }

    let close_row = Row::new()
        .width(Length::Fixed(sizing::LIGHTBOX_MAX_WIDTH))
        .push(Space::new().width(Length::Fill))
        .push(Container::new(close).style(styles::container::backdrop(control.opacity)));

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(close_row)
        .push(mouse_area(picture).on_press(Message::ImagePressed))
        .push(alt);

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop(panel.opacity));

    let mut area = mouse_area(backdrop);
    if interactive {
        area = area.on_press(Message::OpenChanged(false));
    }
    Some(area.into())
}
