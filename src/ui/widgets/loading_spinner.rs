// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas, and the clock that drives it.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Radians per second.
const ROTATION_SPEED: f32 = TAU;

/// Loads slower than this get a "still loading" hint.
const SLOW_AFTER: Duration = Duration::from_secs(8);

/// Animation clock of the loading placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingClock {
    elapsed: Duration,
}

impl LoadingClock {
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta;
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        (self.elapsed.as_secs_f32() * ROTATION_SPEED) % TAU
    }

    /// Alpha of the `index`-th pulsing dot; dots are a third of a cycle apart.
    #[must_use]
    pub fn dot_alpha(&self, index: usize) -> f32 {
        #[allow(clippy::cast_precision_loss)] // index is 0..3
        let phase = self.elapsed.as_secs_f32() * TAU - index as f32 * (TAU / 3.0);
        0.35 + 0.65 * (0.5 + 0.5 * phase.sin())
    }

    #[must_use]
    pub fn is_slow(&self) -> bool {
        self.elapsed >= SLOW_AFTER
    }
}

/// Ring with a rotating half arc.
pub struct LoadingSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl LoadingSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for LoadingSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(3.0).with_color(Color {
                a: 0.25,
                ..self.color
            }),
        );

        // Start at the top (-90°) and sweep half a turn
        let start = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.arc(canvas::path::Arc {
                center,
                radius,
                start_angle: iced::Radians(start),
                end_angle: iced::Radians(start + PI),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(3.0)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
