// SPDX-License-Identifier: MPL-2.0
//! Hero section: the active view's title, description and headline stats.

use super::stats::{self, TileSize};
use super::Intent;
use crate::i18n::fluent::I18n;
use crate::showcase::{CounterBoard, CounterKey, ViewDescriptor};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub descriptor: &'static ViewDescriptor,
    pub counters: &'a CounterBoard,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Intent> {
    let descriptor = ctx.descriptor;
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr_or(&descriptor.title_key(), descriptor.title))
        .size(typography::DISPLAY)
        .color(descriptor.accent.0);
    let description = Text::new(i18n.tr_or(&descriptor.description_key(), descriptor.description))
        .size(typography::BODY_LG)
        .style(text::secondary)
        .align_x(Horizontal::Center);

    let stats = descriptor
        .stats
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |row, (index, stat)| {
            row.push(stats::tile(
                i18n,
                stat,
                CounterKey::hero(descriptor.id, index),
                ctx.counters,
                TileSize::Large,
            ))
        });

    let badges = Row::new()
        .spacing(spacing::SM)
        .push(feature_badge(
            icons::checkmark(),
            i18n.tr("hero-badge-live"),
            palette::SUCCESS_500,
        ))
        .push(feature_badge(
            icons::sparkle(),
            i18n.tr("hero-badge-insights"),
            palette::PURPLE_400,
        ))
        .push(feature_badge(
            icons::trend_up(),
            i18n.tr("hero-badge-realtime"),
            palette::BLUE_400,
        ));

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(title)
            .push(description)
            .push(centered_wrap(stats))
            .push(centered_wrap(badges)),
    )
    .padding([spacing::XXL, spacing::LG])
    .center_x(Length::Fill)
    .into()
}

fn centered_wrap(row: Row<'_, Intent>) -> Element<'_, Intent> {
    Container::new(row.wrap().vertical_spacing(spacing::MD))
        .center_x(Length::Fill)
        .into()
}

fn feature_badge<'a>(icon: Text<'a>, label: String, color: Color) -> Element<'a, Intent> {
    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(icon, sizing::ICON_SM).color(color))
            .push(Text::new(label).size(typography::BODY_SM)),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::tinted_pill(color))
    .into()
}
