// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::button;
use iced::{Background, Border, Color, Gradient, Radians, Theme};
use std::f32::consts::FRAC_PI_2;

fn accent_gradient(from: Color, to: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(Radians(FRAC_PI_2))
            .add_stop(0.0, from)
            .add_stop(1.0, to),
    ))
}

/// Call-to-action button filled with an accent gradient.
pub fn accent(from: Color, to: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (from, to, shadow) = match status {
            button::Status::Hovered => (
                Color { a: 0.9, ..from },
                Color { a: 0.9, ..to },
                shadow::LG,
            ),
            button::Status::Disabled => (
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..from
                },
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..to
                },
                shadow::NONE,
            ),
            button::Status::Active | button::Status::Pressed => (from, to, shadow::MD),
        };

        button::Style {
            background: Some(accent_gradient(from, to)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::LG.into(),
                ..Border::default()
            },
            shadow,
            snap: true,
        }
    }
}

/// Primary action in brand colors.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    accent(colors.brand_primary, colors.brand_secondary)(theme, status)
}

/// View tab in the navbar. The active tab is filled.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            return primary(theme, button::Status::Active);
        }
        ghost(theme, status)
    }
}

/// Borderless button that only shows a background on hover.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.text_secondary
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..colors.text_secondary
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: if status == button::Status::Disabled {
            colors.text_secondary
        } else {
            colors.text_primary
        },
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined secondary button (retry, switch view).
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let base = ghost(theme, status);

    button::Style {
        background: base.background.or(Some(Background::Color(colors.surface))),
        border: Border {
            color: colors.brand_primary,
            width: 1.0,
            radius: radius::LG.into(),
        },
        text_color: colors.brand_primary,
        ..base
    }
}

/// Entry of the compact dropdown menu.
pub fn menu_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let mut style = ghost(theme, status);
        if active {
            style.background = Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.brand_primary
            }));
            style.text_color = colors.brand_primary;
        }
        style.border.radius = radius::MD.into();
        style
    }
}
