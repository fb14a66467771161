// SPDX-License-Identifier: MPL-2.0
//! Static page sections: hero, about, contact, reservations and footer.
//!
//! These sections carry no business state. They only own their entrance
//! animations: the hero animates on mount, the others the first time they
//! scroll into view.

use crate::domain::site::SiteIdentity;
use crate::i18n::fluent::I18n;
use crate::ui::animation::{presets, Cascade, MotionSettings, Reveal, Transition, VariantState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::SectionMap;
use crate::ui::styles;
use crate::ui::widgets;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length, Padding,
};
use std::time::Instant;

/// Anchor ids of the sections, in page order.
pub mod anchors {
    pub const MENU: &str = "menu";
    pub const ABOUT: &str = "about";
    pub const GALLERY: &str = "gallery";
    pub const CONTACT: &str = "contact";
    pub const RESERVATIONS: &str = "reservations";
}

/// Delays of the hero's text lines after the title.
const HERO_LINE_DELAYS_MS: [u64; 3] = [800, 1_000, 1_200];

/// Messages emitted by the static sections.
#[derive(Debug, Clone)]
pub enum Message {
    /// Scroll to an on-page anchor.
    ScrollTo(String),
    /// Hand an outside link to the host.
    FollowLink(String),
}

/// Contextual data needed to render a static section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a SiteIdentity,
    pub compact: bool,
    pub now: Instant,
}

/// Entrance animations of the static sections.
#[derive(Debug, Clone)]
pub struct State {
    hero_reveal: Reveal,
    hero_backdrop: Transition,
    hero_title: Transition,
    hero_lines: [Transition; 3],
    about_reveal: Reveal,
    about_left: Cascade,
    about_right: Cascade,
    contact_reveal: Reveal,
    contact: Cascade,
}

impl State {
    #[must_use]
    pub fn new(motion: &MotionSettings) -> Self {
        let about = presets::stagger_container(motion.about_stagger);
        let hidden = |variants| Transition::new(motion.adapt(variants), VariantState::Hidden);
        Self {
            hero_reveal: Reveal::on_mount(),
            hero_backdrop: hidden(presets::hero_backdrop()),
            hero_title: hidden(presets::hero_title()),
            hero_lines: HERO_LINE_DELAYS_MS.map(|delay| hidden(presets::hero_line(delay))),
            about_reveal: Reveal::in_view(motion.reveal_margin),
            about_left: motion.cascade(about, presets::slide_in_left()),
            about_right: motion.cascade(about, presets::slide_in_right()),
            contact_reveal: Reveal::in_view(motion.reveal_margin),
            contact: motion.cascade(
                presets::stagger_container(motion.menu_stagger),
                presets::gallery_tile(),
            ),
        }
    }

    /// Starts the on-mount animations.
    pub fn mount(&mut self, now: Instant) {
        if self.hero_reveal.mount(now) {
            self.hero_backdrop.animate_to(VariantState::Visible, now);
            self.hero_title.animate_to(VariantState::Visible, now);
            for line in &mut self.hero_lines {
                line.animate_to(VariantState::Visible, now);
            }
        }
    }

    /// Fires scroll-gated entrances for sections inside `viewport`.
    pub fn observe(
        &mut self,
        sections: &SectionMap,
        viewport: crate::ui::animation::Region,
        now: Instant,
    ) {
        if let Some(region) = sections.region(anchors::ABOUT) {
            if self.about_reveal.observe(region, viewport, now) {
                self.about_left.reveal(now);
                self.about_right.reveal(now);
            }
        }
        if let Some(region) = sections.region(anchors::CONTACT) {
            if self.contact_reveal.observe(region, viewport, now) {
                self.contact.reveal(now);
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.hero_backdrop.settle(now);
        self.hero_title.settle(now);
        for line in &mut self.hero_lines {
            line.settle(now);
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.hero_backdrop.is_animating(now)
            || self.hero_title.is_animating(now)
            || self.hero_lines.iter().any(|line| line.is_animating(now))
            || self.about_left.is_animating(3, now)
            || self.about_right.is_animating(3, now)
            || self.contact.is_animating(4, now)
    }
}

/// Fixed section heights, matching the views below.
pub mod heights {
    use crate::ui::design_tokens::{sizing, spacing};

    fn framed(body: f32) -> f32 {
        sizing::NAVBAR_HEIGHT + spacing::SECTION * 2.0 + body
    }

    #[must_use]
    pub fn hero() -> f32 {
        sizing::HERO_HEIGHT
    }

    #[must_use]
    pub fn about(compact: bool) -> f32 {
        let body = if compact {
            sizing::ABOUT_BODY * 2.0
        } else {
            sizing::ABOUT_BODY
        };
        framed(sizing::SECTION_HEADING + spacing::XXL + body)
    }

    #[must_use]
    pub fn contact() -> f32 {
        framed(sizing::SECTION_HEADING + spacing::XXL + sizing::CONTACT_BODY)
    }

    #[must_use]
    pub fn reservations() -> f32 {
        framed(sizing::RESERVATIONS_BODY)
    }

    #[must_use]
    pub fn footer() -> f32 {
        sizing::FOOTER
    }
}

fn section_padding() -> Padding {
    Padding {
        top: sizing::NAVBAR_HEIGHT + spacing::SECTION,
        bottom: spacing::SECTION,
        left: spacing::MD,
        right: spacing::MD,
    }
}

fn section_heading<'a>(title: String, subtitle: String, alpha: f32) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_HEADING))
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .style(styles::text::primary(alpha)),
        )
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .style(styles::text::secondary(alpha)),
        )
}

/// Top banner.
pub fn hero<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = state.hero_backdrop.value(ctx.now);
    let title = state.hero_title.value(ctx.now);
    let [tagline, actions, details] = state.hero_lines.each_ref().map(|line| line.value(ctx.now));

    let reserve = button(Text::new(ctx.i18n.tr("hero-reserve")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .on_press(Message::ScrollTo(anchors::RESERVATIONS.to_string()))
        .style(styles::button::primary(actions.opacity));
    let view_menu = button(Text::new(ctx.i18n.tr("hero-view-menu")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .on_press(Message::ScrollTo(anchors::MENU.to_string()))
        .style(styles::button::category(false, actions.opacity));

    let mut buttons = Row::new().spacing(spacing::MD).push(reserve).push(view_menu);
    if let Some(cta) = &ctx.site.cta {
        buttons = buttons.push(
            button(Text::new(cta.label.as_str()).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::FollowLink(cta.href.clone()))
                .style(styles::button::primary(actions.opacity)),
        );
    }

    let hours = ctx
        .site
        .hours
        .first()
        .map(|h| format!("{} {}", h.day, h.span()))
        .unwrap_or_default();

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.site.name.as_str())
                .size(widgets::scaled(typography::DISPLAY, title))
                .style(styles::text::primary(title.opacity)),
        )
        .push(widgets::offset(
            Text::new(ctx.site.tagline.as_str())
                .size(typography::TITLE_SM)
                .style(styles::text::secondary(tagline.opacity)),
            tagline,
        ))
        .push(widgets::offset(buttons, actions))
        .push(widgets::offset(
            Text::new(format!("{hours} · {}", ctx.site.address))
                .size(typography::BODY)
                .style(styles::text::secondary(details.opacity)),
            details,
        ));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(heights::hero()))
        .padding(Padding {
            top: sizing::NAVBAR_HEIGHT,
            ..Padding::ZERO
        })
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .clip(true)
        .style(styles::container::hero(backdrop.opacity))
        .into()
}

/// Restaurant story and chef.
pub fn about<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading_frame = state.about_left.container_frame(ctx.now);
    let story = state.about_left.child_frame(0, ctx.now);
    let chef = state.about_right.child_frame(1, ctx.now);

    let story_block = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr("about-description"))
                .size(typography::BODY_LG)
                .style(styles::text::primary(story.opacity)),
        )
        .push(
            Text::new(ctx.i18n.tr("about-mission"))
                .size(typography::BODY_LG)
                .style(styles::text::secondary(story.opacity)),
        );

    let chef_block = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr("about-chef-name"))
                .size(typography::TITLE_MD)
                .style(styles::text::primary(chef.opacity)),
        )
        .push(
            Text::new(ctx.i18n.tr("about-chef-title"))
                .size(typography::BODY_LG)
                .style(styles::text::accent(chef.opacity)),
        )
        .push(
            Text::new(ctx.i18n.tr("about-chef-quote"))
                .size(typography::BODY)
                .style(styles::text::secondary(chef.opacity)),
        );

    let body: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::XL)
            .push(widgets::offset(story_block, story))
            .push(widgets::offset(chef_block, chef))
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .push(widgets::offset(story_block, story))
            .push(widgets::offset(chef_block, chef))
            .into()
    };

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::XXL)
        .push(section_heading(
            ctx.i18n.tr("about-title"),
            ctx.i18n.tr("about-subtitle"),
            heading_frame.opacity,
        ))
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(heights::about(ctx.compact)))
        .padding(section_padding())
        .align_x(Horizontal::Center)
        .clip(true)
        .style(styles::container::page)
        .into()
}

/// Contact details and opening hours.
pub fn contact<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading_frame = state.contact.child_frame(0, ctx.now);
    let site = ctx.site;

    let rows = [
        (ctx.i18n.tr("contact-phone"), site.phone.clone()),
        (ctx.i18n.tr("contact-email"), site.email.clone()),
        (ctx.i18n.tr("contact-address"), site.address.clone()),
    ];
    let row_count = rows.len();
    let mut details = Column::new().spacing(spacing::SM).width(Length::Fill);
    for (index, (label, value)) in rows.into_iter().enumerate() {
        let frame = state.contact.child_frame(index + 1, ctx.now);
        details = details.push(widgets::offset(
            Row::new()
                .spacing(spacing::MD)
                .push(
                    Text::new(label)
                        .size(typography::BODY)
                        .width(Length::Fixed(96.0))
                        .style(styles::text::accent(frame.opacity)),
                )
                .push(
                    Text::new(value)
                        .size(typography::BODY_LG)
                        .style(styles::text::primary(frame.opacity)),
                ),
            frame,
        ));
    }

    let hours_frame = state.contact.child_frame(row_count + 1, ctx.now);
    let mut hours = Column::new().spacing(spacing::XS).width(Length::Fill).push(
        Text::new(ctx.i18n.tr("contact-hours"))
            .size(typography::TITLE_SM)
            .style(styles::text::primary(hours_frame.opacity)),
    );
    for entry in &site.hours {
        hours = hours.push(
            Row::new()
                .push(
                    Text::new(entry.day.as_str())
                        .width(Length::Fill)
                        .style(styles::text::secondary(hours_frame.opacity)),
                )
                .push(Text::new(entry.span()).style(styles::text::primary(hours_frame.opacity))),
        );
    }

    let mut links = Row::new().spacing(spacing::MD);
    if let Some(instagram) = &site.instagram {
        links = links.push(
            button(Text::new("Instagram"))
                .on_press(Message::FollowLink(instagram.clone()))
                .style(styles::button::nav_link),
        );
    }
    if let Some(maps) = &site.maps {
        links = links.push(
            button(Text::new(ctx.i18n.tr("contact-directions")))
                .on_press(Message::FollowLink(maps.clone()))
                .style(styles::button::nav_link),
        );
    }

    let body: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::XL)
            .push(details.push(links))
            .push(widgets::offset(hours, hours_frame))
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .push(details.push(links))
            .push(widgets::offset(hours, hours_frame))
            .into()
    };

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::XXL)
        .push(widgets::offset(
            section_heading(
                ctx.i18n.tr("contact-title"),
                ctx.i18n.tr("contact-subtitle"),
                heading_frame.opacity,
            ),
            heading_frame,
        ))
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(heights::contact()))
        .padding(section_padding())
        .align_x(Horizontal::Center)
        .clip(true)
        .style(styles::container::section_alt)
        .into()
}

/// Reservation call to action.
pub fn reservations<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut reserve = button(Text::new(ctx.i18n.tr("hero-reserve")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary(1.0));
    if let Some(cta) = &ctx.site.cta {
        reserve = reserve.on_press(Message::FollowLink(cta.href.clone()));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(
            Text::new(ctx.i18n.tr("reservations-title"))
                .size(typography::TITLE_LG)
                .style(styles::text::primary(1.0)),
        )
        .push(
            Text::new(ctx.i18n.tr("reservations-description"))
                .size(typography::BODY_LG)
                .style(styles::text::secondary(1.0)),
        )
        .push(reserve);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(heights::reservations()))
        .padding(section_padding())
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::page)
        .into()
}

/// Footer line.
pub fn footer<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(
                Text::new(ctx.site.name.as_str())
                    .size(typography::BODY)
                    .style(styles::text::primary(1.0)),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                Text::new(
                    ctx.i18n
                        .tr_with_args("footer-rights", &[("name", ctx.site.name.as_str())]),
                )
                    .size(typography::CAPTION)
                    .style(styles::text::secondary(1.0)),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(heights::footer()))
    .padding([0.0, spacing::LG])
    .align_y(Vertical::Center)
    .style(styles::container::section_alt)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation::Region;
    use std::time::Duration;

    #[test]
    fn hero_animates_on_mount_only_once() {
        let now = Instant::now();
        let mut state = State::new(&MotionSettings::default());
        assert!(!state.is_animating(now));
        state.mount(now);
        assert!(state.is_animating(now));
        // Last hero line: 1.2s delay + 0.8s
        assert!(!state.is_animating(now + Duration::from_millis(2_000)));

        state.mount(now + Duration::from_secs(5));
        assert!(!state.is_animating(now + Duration::from_secs(5)));
    }

    #[test]
    fn about_waits_for_viewport() {
        let now = Instant::now();
        let mut state = State::new(&MotionSettings::default());
        let map = SectionMap::new()
            .with(None, 640.0)
            .with(Some(anchors::ABOUT), 800.0);

        state.observe(&map, Region::new(0.0, 600.0), now);
        assert!(!state.about_reveal.has_fired());

        state.observe(&map, Region::new(400.0, 800.0), now);
        assert!(state.about_reveal.has_fired());
        assert!(!state.contact_reveal.has_fired());
    }

    #[test]
    fn about_height_doubles_body_when_stacked() {
        assert!(heights::about(true) > heights::about(false));
    }
}
