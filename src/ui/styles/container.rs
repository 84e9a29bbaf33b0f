// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};
use std::f32::consts::PI;

/// Full-window page background: a soft vertical gradient.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(Radians(PI))
                .add_stop(0.0, colors.page_top)
                .add_stop(1.0, colors.page_bottom),
        ))),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Translucent card used for stats, panels and previews.
pub fn glass_card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface)),
        border: Border {
            color: colors.surface_border,
            width: 1.0,
            radius: radius::XL.into(),
        },
        shadow: shadow::LG,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Sticky navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    container::Style {
        border: Border::default(),
        shadow: shadow::SM,
        ..glass_card(theme)
    }
}

/// Dropdown menu under the navbar.
pub fn dropdown(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            radius: radius::LG.into(),
            ..glass_card(theme).border
        },
        ..glass_card(theme)
    }
}

/// Pill filled with an accent gradient (active badge, trend chip).
pub fn accent_pill(from: Color, to: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(Radians(PI / 2.0))
                .add_stop(0.0, from)
                .add_stop(1.0, to),
        ))),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Pill tinted with a single color.
pub fn tinted_pill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..color
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        text_color: Some(color),
        ..Default::default()
    }
}
