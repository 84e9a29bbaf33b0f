// SPDX-License-Identifier: MPL-2.0
//! Static page sections: feature lists and the footer.

use super::Intent;
use crate::diagnostics::ActivityLog;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{rule, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Length,
};

struct FeatureList {
    title_key: &'static str,
    body_key: &'static str,
    accent: (Color, Color),
    items: [(&'static str, Color); 3],
}

const FEATURE_LISTS: [FeatureList; 2] = [
    FeatureList {
        title_key: "features-interactive-title",
        body_key: "features-interactive-body",
        accent: (palette::BLUE_600, palette::PURPLE_600),
        items: [
            ("features-interactive-zoom", palette::BLUE_400),
            ("features-interactive-filter", palette::PURPLE_400),
            ("features-interactive-tooltips", palette::CYAN_600),
        ],
    },
    FeatureList {
        title_key: "features-analytics-title",
        body_key: "features-analytics-body",
        accent: (palette::EMERALD_600, palette::CYAN_600),
        items: [
            ("features-analytics-sync", palette::EMERALD_600),
            ("features-analytics-grade", palette::CYAN_600),
            ("features-analytics-export", palette::BLUE_400),
        ],
    },
];

/// The two feature cards under the previews.
pub fn features<'a>(i18n: &I18n, compact: bool) -> Element<'a, Intent> {
    let cards = FEATURE_LISTS.iter().map(|list| feature_card(i18n, list));
    if compact {
        Column::with_children(cards).spacing(spacing::LG).into()
    } else {
        Row::with_children(cards).spacing(spacing::LG).into()
    }
}

fn feature_card<'a>(i18n: &I18n, list: &FeatureList) -> Element<'a, Intent> {
    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Container::new(icons::sized(icons::sparkle(), sizing::ICON_LG))
                .padding(spacing::SM)
                .style(styles::container::accent_pill(list.accent.0, list.accent.1)),
        )
        .push(Text::new(i18n.tr(list.title_key)).size(typography::TITLE_MD));

    let items = list
        .items
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, (key, color)| {
            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(Text::new("●").size(typography::CAPTION).color(*color))
                    .push(
                        Text::new(i18n.tr(key))
                            .size(typography::BODY)
                            .style(text::secondary),
                    ),
            )
        });

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(Text::new(i18n.tr(list.body_key)).size(typography::BODY))
            .push(items),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::glass_card)
    .into()
}

/// Page footer with the tagline and a one-line session summary.
pub fn footer<'a>(i18n: &I18n, activity: &ActivityLog) -> Element<'a, Intent> {
    let links = ["footer-privacy", "footer-terms", "footer-support"]
        .into_iter()
        .fold(Row::new().spacing(spacing::LG), |row, key| {
            row.push(
                Text::new(i18n.tr(key))
                    .size(typography::BODY_SM)
                    .style(text::secondary),
            )
        });

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(i18n.tr("app-name")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("footer-tagline"))
                .size(typography::BODY)
                .align_x(Horizontal::Center)
                .style(text::secondary),
        )
        .push(links)
        .push(rule::horizontal(1))
        .push(Text::new(i18n.tr("footer-copyright")).size(typography::CAPTION))
        .push(
            Text::new(activity_summary(i18n, activity))
                .size(typography::CAPTION)
                .style(text::secondary),
        );

    if let Some(latest) = activity.latest() {
        column = column.push(
            Text::new(latest.kind.to_string())
                .size(typography::CAPTION)
                .style(text::secondary),
        );
    }

    Container::new(column)
        .padding([spacing::XXL, spacing::LG])
        .center_x(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

/// Events recorded this session and retained problems.
#[must_use]
pub fn activity_summary(i18n: &I18n, activity: &ActivityLog) -> String {
    i18n.tr_with_args(
        "footer-activity",
        &[
            ("events", &activity.total_recorded().to_string()),
            ("problems", &activity.problem_count().to_string()),
        ],
    )
}
