// SPDX-License-Identifier: MPL-2.0
//! Stat tile: an animated counter with its label and trend.

use super::Intent;
use crate::i18n::fluent::I18n;
use crate::showcase::{CounterBoard, CounterKey, StatEntry};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::visibility_sensor;
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Tile size variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSize {
    /// Hero strip: large value and trend badge.
    Large,
    /// Preview card grid.
    Small,
}

pub fn tile<'a>(
    i18n: &I18n,
    stat: &StatEntry,
    key: CounterKey,
    board: &'a CounterBoard,
    size: TileSize,
) -> Element<'a, Intent> {
    let (value_size, padding) = match size {
        TileSize::Large => (typography::STAT_VALUE, spacing::LG),
        TileSize::Small => (typography::TITLE_SM, spacing::SM),
    };

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(board.display(key)).size(value_size))
        .push(
            Text::new(i18n.tr_or(stat.label_key, stat.label))
                .size(typography::CAPTION)
                .style(text::secondary),
        );

    if size == TileSize::Large {
        column = column.push(
            Text::new(stat.trend)
                .size(typography::CAPTION)
                .color(palette::SUCCESS_500),
        );
    }

    let card = Container::new(column).padding(padding).center_x(match size {
        TileSize::Large => Length::Fixed(sizing::STAT_CARD_MIN_WIDTH),
        TileSize::Small => Length::Fill,
    });
    let card = match size {
        TileSize::Large => card.style(styles::container::glass_card),
        TileSize::Small => card.style(container::rounded_box),
    };

    visibility_sensor(card)
        .armed(board.is_waiting(key))
        .on_visible(move |ratio| Intent::CounterVisible { key, ratio })
        .into()
}
