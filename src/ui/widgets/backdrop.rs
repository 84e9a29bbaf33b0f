// SPDX-License-Identifier: MPL-2.0
//! Decorative backdrop: floating particles and a glow following the cursor.
//!
//! Particles are derived from their index, so the backdrop needs no random
//! number generator and looks the same on every launch. Time only advances
//! while the animation plays.

use crate::config::PARTICLE_COUNT;
use crate::ui::design_tokens::opacity;
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::f32::consts::TAU;
use std::time::Duration;

const GOLDEN_RATIO: f32 = 0.618_034;

/// Radius of the cursor glow.
const FOLLOWER_RADIUS: f32 = 160.0;

/// One floating particle, in relative units (`0..1` of the canvas).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub origin: Point,
    pub radius: f32,
    /// Canvas heights per second.
    pub rise_speed: f32,
    pub sway: f32,
    pub phase: f32,
}

impl Particle {
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        #[allow(clippy::cast_precision_loss)] // particle counts are tiny
        let i = index as f32 + 1.0;
        let fract = |value: f32| value - value.floor();

        Self {
            origin: Point::new(fract(i * GOLDEN_RATIO), fract(i * GOLDEN_RATIO * GOLDEN_RATIO + 0.5)),
            radius: 2.0 + 4.0 * fract(i * 0.371),
            rise_speed: 0.01 + 0.03 * fract(i * 0.529),
            sway: 0.01 + 0.02 * fract(i * 0.853),
            phase: fract(i * 0.127) * TAU,
        }
    }

    /// Relative position after `elapsed`; particles wrap from top to bottom.
    #[must_use]
    pub fn position_at(&self, elapsed: Duration) -> Point {
        let t = elapsed.as_secs_f32();
        let y = self.origin.y - self.rise_speed * t;
        let x = self.origin.x + self.sway * (t * 0.5 + self.phase).sin();
        Point::new(x.rem_euclid(1.0), y.rem_euclid(1.0))
    }
}

/// Backdrop animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    particles: Vec<Particle>,
    playing: bool,
    elapsed: Duration,
    cursor: Option<Point>,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Backdrop {
    #[must_use]
    pub fn new(playing: bool) -> Self {
        Self {
            particles: (0..PARTICLE_COUNT).map(Particle::from_index).collect(),
            playing,
            elapsed: Duration::ZERO,
            cursor: None,
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flips play/pause and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.playing {
            self.elapsed += delta;
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn set_cursor(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Absolute particle centers for a canvas of `size`.
    pub fn particle_positions(&self, size: Size) -> impl Iterator<Item = (Point, f32)> + '_ {
        self.particles.iter().map(move |particle| {
            let relative = particle.position_at(self.elapsed);
            (
                Point::new(relative.x * size.width, relative.y * size.height),
                particle.radius,
            )
        })
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        Canvas::new(BackdropCanvas { backdrop: self })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

struct BackdropCanvas<'a> {
    backdrop: &'a Backdrop,
}

impl<Message> canvas::Program<Message> for BackdropCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let colors = ColorScheme::for_theme(theme);
        let mut frame = Frame::new(renderer, bounds.size());

        for (index, (center, radius)) in self.backdrop.particle_positions(bounds.size()).enumerate() {
            let color = if index % 2 == 0 {
                colors.brand_primary
            } else {
                colors.brand_secondary
            };
            frame.fill(
                &Path::circle(center, radius),
                Color {
                    a: opacity::PARTICLE,
                    ..color
                },
            );
        }

        if let Some(cursor) = self.backdrop.cursor() {
            // Concentric rings fake a radial falloff
            for step in (1..=4).rev() {
                #[allow(clippy::cast_precision_loss)]
                let fraction = step as f32 / 4.0;
                frame.fill(
                    &Path::circle(cursor, FOLLOWER_RADIUS * fraction),
                    Color {
                        a: 0.04,
                        ..colors.brand_primary
                    },
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_are_deterministic_and_in_bounds() {
        let a = Backdrop::new(true);
        let b = Backdrop::new(false);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), PARTICLE_COUNT);
        for particle in a.particles() {
            assert!((0.0..1.0).contains(&particle.origin.x));
            assert!((0.0..1.0).contains(&particle.origin.y));
            assert!((2.0..=6.0).contains(&particle.radius));
        }
    }

    #[test]
    fn paused_backdrop_does_not_advance() {
        let mut backdrop = Backdrop::new(true);
        backdrop.advance(Duration::from_millis(500));
        assert!(!backdrop.toggle());
        backdrop.advance(Duration::from_secs(3));
        assert_eq!(backdrop.elapsed(), Duration::from_millis(500));
        assert!(backdrop.toggle());
    }

    #[test]
    fn particles_rise_and_wrap() {
        let particle = Particle::from_index(3);
        let later = particle.position_at(Duration::from_secs(1000));
        assert!((0.0..1.0).contains(&later.y));
        assert!((0.0..1.0).contains(&later.x));
        assert_ne!(particle.position_at(Duration::from_secs(1)), particle.position_at(Duration::ZERO));
    }

    #[test]
    fn cursor_is_ephemeral() {
        let mut backdrop = Backdrop::default();
        assert_eq!(backdrop.cursor(), None);
        backdrop.set_cursor(Point::new(10.0, 20.0));
        assert_eq!(backdrop.cursor(), Some(Point::new(10.0, 20.0)));
        backdrop.clear_cursor();
        assert_eq!(backdrop.cursor(), None);
    }
}
