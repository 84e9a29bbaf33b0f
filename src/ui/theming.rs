// SPDX-License-Identifier: MPL-2.0
//! Theme mode handling and the color scheme derived from it.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors of the showcase page for one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Page background gradient
    pub page_top: Color,
    pub page_bottom: Color,

    // Glass cards
    pub surface: Color,
    pub surface_border: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_secondary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_top: palette::SLATE_50,
            page_bottom: Color::from_rgb(0.933, 0.949, 1.0),
            surface: Color {
                a: opacity::GLASS,
                ..palette::WHITE
            },
            surface_border: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            text_primary: palette::SLATE_900,
            text_secondary: palette::SLATE_500,
            brand_primary: palette::BLUE_600,
            brand_secondary: palette::PURPLE_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_top: palette::SLATE_950,
            page_bottom: palette::SLATE_900,
            surface: Color {
                a: opacity::GLASS,
                ..palette::SLATE_900
            },
            surface_border: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::SLATE_500
            },
            text_primary: palette::SLATE_100,
            text_secondary: palette::SLATE_300,
            brand_primary: palette::BLUE_400,
            brand_secondary: palette::PURPLE_400,
        }
    }

    /// Scheme matching an iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to light on detection error
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// The iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
