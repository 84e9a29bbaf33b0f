// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single unicode glyphs rendered with the default font, so they
//! follow the surrounding text color in both themes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let play_button = button(icons::sized(icons::play(), sizing::ICON_SM));
//! ```
//!
//! Icons use generic visual names describing their appearance, not the
//! action context (e.g., `arrow_out` not `open_in_tableau`).

use iced::widget::{text, Text};
use iced::{alignment, Length};

/// Defines an icon function returning its glyph as a centered text widget.
macro_rules! define_icon {
    ($name:ident, $glyph:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Text<'a> {
            text($glyph)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
        }
    };
}

define_icon!(play, "▶", "Play icon: triangle pointing right.");
define_icon!(pause, "⏸", "Pause icon: two vertical bars.");
define_icon!(hamburger, "☰", "Menu icon: three horizontal bars.");
define_icon!(cross, "✕", "Close icon: diagonal cross.");
define_icon!(arrow_out, "↗", "External link icon: arrow leaving a box.");
define_icon!(refresh, "⟳", "Retry icon: circular arrow.");
define_icon!(checkmark, "✓", "Checkmark icon.");
define_icon!(warning, "!", "Warning icon: exclamation mark.");
define_icon!(trend_up, "▲", "Trend icon: small upward triangle.");
define_icon!(sparkle, "✦", "Decorative four-pointed star.");

/// Sets the glyph size and a square footprint of the same size.
pub fn sized<'a>(icon: Text<'a>, size: f32) -> Text<'a> {
    icon.size(size * 0.75)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::Row;
    use iced::Element;

    fn labelled<'a>(label: &'a str) -> Element<'a, ()> {
        Row::new()
            .push(sized(checkmark(), 16.0))
            .push(text(label))
            .into()
    }

    #[test]
    fn icons_compose_with_borrowed_content() {
        let label = String::from("Ready");
        let _element = labelled(&label);
    }
}
