// SPDX-License-Identifier: MPL-2.0
//! Embedding surface panel.
//!
//! Shows one of three bodies depending on the selection phase, above a
//! footer row with the backdrop play/pause toggle.

use super::Intent;
use crate::embed::EmbedPage;
use crate::error::EmbedError;
use crate::i18n::fluent::I18n;
use crate::showcase::{Phase, ViewDescriptor};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::{LoadingClock, LoadingSpinner};
use iced::widget::{button, rule, text, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub descriptor: &'static ViewDescriptor,
    pub phase: Phase,
    pub page: Option<&'a EmbedPage>,
    pub last_error: Option<&'a EmbedError>,
    pub loading: &'a LoadingClock,
    pub backdrop_playing: bool,
}

impl ViewContext<'_> {
    fn title(&self) -> String {
        self.i18n
            .tr_or(&self.descriptor.title_key(), self.descriptor.title)
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Intent> {
    let body = match ctx.phase {
        Phase::Loading => loading_body(&ctx),
        Phase::Error => error_body(&ctx),
        Phase::Ready => ready_body(&ctx),
    };

    let panel = Column::new()
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::EMBED_PANEL_HEIGHT))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .padding(spacing::XL),
        )
        .push(rule::horizontal(1))
        .push(footer_row(&ctx));

    Container::new(panel)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .style(styles::container::glass_card)
        .into()
}

fn loading_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Intent> {
    let (from, to) = ctx.descriptor.accent;

    let dots = (0..3).fold(Row::new().spacing(spacing::XXS), |row, index| {
        row.push(
            Container::new(Space::new())
                .width(Length::Fixed(sizing::LOADING_DOT))
                .height(Length::Fixed(sizing::LOADING_DOT))
                .style(styles::container::accent_pill(
                    Color {
                        a: ctx.loading.dot_alpha(index),
                        ..from
                    },
                    Color {
                        a: ctx.loading.dot_alpha(index),
                        ..to
                    },
                )),
        )
    });

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(LoadingSpinner::new(from, ctx.loading.rotation()).into_element())
        .push(Text::new(ctx.i18n.tr("embed-loading-title")).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr("embed-loading-subtitle"))
                .size(typography::BODY)
                .style(text::secondary),
        )
        .push(dots);

    if ctx.loading.is_slow() {
        column = column.push(
            Text::new(ctx.i18n.tr("embed-loading-slow"))
                .size(typography::CAPTION)
                .style(text::secondary),
        );
    }

    column.into()
}

fn error_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Intent> {
    let title = ctx.title();
    let view = ctx.descriptor.id;
    let (from, to) = ctx.descriptor.accent;

    let badge = Container::new(icons::sized(icons::warning(), sizing::ICON_LG).color(Color::WHITE))
        .padding(spacing::SM)
        .style(styles::container::accent_pill(
            palette::WARNING_500,
            palette::ERROR_500,
        ));

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(640.0)
        .push(badge)
        .push(Text::new(ctx.i18n.tr("embed-error-title")).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.i18n.tr("embed-error-message"))
                .size(typography::BODY)
                .align_x(Horizontal::Center)
                .style(text::secondary),
        );

    if let Some(error) = ctx.last_error {
        column = column.push(
            Text::new(detail_line(ctx.i18n, error, &title))
                .size(typography::CAPTION)
                .color(palette::WARNING_500),
        );
    }

    let link = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::arrow_out(), sizing::ICON_SM))
            .push(Text::new(ctx.i18n.tr_with_args("embed-error-link", &[("title", title.as_str())]))),
    )
    .on_press(Intent::OpenSource(view))
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::accent(from, to));

    let retry = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::refresh(), sizing::ICON_SM))
            .push(Text::new(ctx.i18n.tr("embed-retry-button"))),
    )
    .on_press(Intent::Retry)
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::outline);

    column
        .push(Row::new().spacing(spacing::MD).push(link).push(retry))
        .into()
}

/// Localized explanation of why the embed failed.
#[must_use]
pub fn detail_line(i18n: &I18n, error: &EmbedError, title: &str) -> String {
    match error {
        EmbedError::HttpStatus(code) => i18n.tr_with_args(
            error.i18n_key(),
            &[("title", title), ("status", &code.to_string())],
        ),
        _ => i18n.tr_with_args(error.i18n_key(), &[("title", title)]),
    }
}

fn ready_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Intent> {
    let view = ctx.descriptor.id;
    let title = ctx.title();

    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(icons::sized(icons::checkmark(), sizing::ICON_XL).color(palette::SUCCESS_500))
        .push(
            Text::new(ctx.i18n.tr_with_args("embed-ready-title", &[("title", title.as_str())]))
                .size(typography::TITLE_MD),
        );

    match ctx.page {
        Some(page) if page.probed => {
            if let Some(page_title) = &page.title {
                column = column.push(Text::new(page_title.clone()).size(typography::BODY_LG));
            }
            column = column.push(
                Text::new(page.url.clone())
                    .size(typography::CAPTION)
                    .style(text::secondary),
            );
            if let Some(content_type) = &page.content_type {
                column = column.push(
                    Text::new(content_type.clone())
                        .size(typography::CAPTION)
                        .style(text::secondary),
                );
            }
        }
        _ => {
            column = column.push(
                Text::new(ctx.i18n.tr("embed-ready-offline"))
                    .size(typography::BODY)
                    .style(text::secondary),
            );
        }
    }

    column
        .push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(icons::sized(icons::arrow_out(), sizing::ICON_SM))
                    .push(Text::new(ctx.i18n.tr("navbar-open-source"))),
            )
            .on_press(Intent::OpenSource(view))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::outline),
        )
        .into()
}

fn footer_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Intent> {
    let toggle_icon = if ctx.backdrop_playing {
        icons::pause()
    } else {
        icons::play()
    };

    let heading = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "embed-footer-title",
                &[("title", ctx.title().as_str())],
            ))
            .size(typography::BODY),
        )
        .push(
            button(icons::sized(toggle_icon, sizing::ICON_SM))
                .on_press(Intent::ToggleBackdrop)
                .padding(spacing::XXS)
                .style(styles::button::ghost),
        );

    let left = Column::new().push(heading).push(
        Text::new(ctx.i18n.tr("embed-footer-powered"))
            .size(typography::CAPTION)
            .style(text::secondary),
    );

    let markers = [
        ("embed-footer-live", palette::SUCCESS_500),
        ("embed-footer-updates", palette::BLUE_400),
        ("embed-footer-interactive", palette::PURPLE_400),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::MD), |row, (key, color)| {
        row.push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(Text::new("●").size(typography::CAPTION).color(color))
                .push(
                    Text::new(ctx.i18n.tr(key))
                        .size(typography::CAPTION)
                        .style(text::secondary),
                ),
        )
    });

    Row::new()
        .padding([spacing::MD, spacing::LG])
        .align_y(Vertical::Center)
        .push(left)
        .push(Space::new().width(Length::Fill))
        .push(markers)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn detail_line_mentions_status_code() {
        let line = detail_line(&english(), &EmbedError::HttpStatus(503), "Data Story");
        assert!(line.contains("503"), "{line}");
    }

    #[test]
    fn every_error_kind_has_a_detail_line() {
        let i18n = english();
        for error in [
            EmbedError::FramingBlocked,
            EmbedError::HttpStatus(404),
            EmbedError::Timeout,
            EmbedError::Network("reset".to_string()),
        ] {
            let line = detail_line(&i18n, &error, "Data Story");
            assert!(!line.starts_with("MISSING"), "{error:?} -> {line}");
        }
    }
}
