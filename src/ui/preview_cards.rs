// SPDX-License-Identifier: MPL-2.0
//! Preview cards, one per registered view.

use super::stats::{self, TileSize};
use super::Intent;
use crate::i18n::fluent::I18n;
use crate::showcase::{registry, CounterBoard, CounterKey, ViewDescriptor, ViewId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active_view: ViewId,
    pub counters: &'a CounterBoard,
    /// Stack the cards vertically.
    pub compact: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Intent> {
    let cards = registry::all().iter().map(|descriptor| card(&ctx, descriptor));

    if ctx.compact {
        Column::with_children(cards).spacing(spacing::LG).into()
    } else {
        Row::with_children(cards).spacing(spacing::LG).into()
    }
}

fn card<'a>(ctx: &ViewContext<'a>, descriptor: &'static ViewDescriptor) -> Element<'a, Intent> {
    let i18n = ctx.i18n;
    let view = descriptor.id;
    let active = view == ctx.active_view;

    let mut heading = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr_or(&descriptor.title_key(), descriptor.title)).size(typography::TITLE_MD));
    if active {
        heading = heading.push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(Text::new("●").size(typography::CAPTION).color(palette::SUCCESS_500))
                .push(
                    Text::new(i18n.tr("card-active-badge"))
                        .size(typography::BODY_SM)
                        .color(palette::SUCCESS_500),
                ),
        );
    }

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Container::new(icons::sized(icons::trend_up(), sizing::ICON_LG))
                .padding(spacing::SM)
                .style(styles::container::accent_pill(descriptor.accent.0, descriptor.accent.1)),
        )
        .push(heading);

    let stat_grid = descriptor
        .stats
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::SM), |row, (index, stat)| {
            row.push(stats::tile(
                i18n,
                stat,
                CounterKey::card(view, index),
                ctx.counters,
                TileSize::Small,
            ))
        });

    let open_link = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::arrow_out(), sizing::ICON_SM))
            .push(Text::new(i18n.tr("navbar-open-source")).size(typography::BODY_SM)),
    )
    .on_press(Intent::OpenSource(view))
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::ghost);

    let mut actions = Row::new()
        .align_y(Vertical::Center)
        .push(open_link)
        .push(Space::new().width(Length::Fill));
    if !active {
        actions = actions.push(
            button(Text::new(i18n.tr("card-switch-button")).size(typography::BODY_SM))
                .on_press(Intent::SelectView(view))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::outline),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(
                Text::new(i18n.tr_or(&descriptor.description_key(), descriptor.description))
                    .size(typography::BODY)
                    .style(text::secondary),
            )
            .push(stat_grid)
            .push(actions),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::glass_card)
    .into()
}
