// SPDX-License-Identifier: MPL-2.0
//! One-shot visibility trigger.
//!
//! A [`VisibilityTrigger`] is fed intersection observations for a single UI
//! element and fires the first time at least the configured fraction of the
//! element lies inside the viewport. It never fires again, whatever the
//! element does afterwards.

use crate::config::VISIBILITY_THRESHOLD;
use iced::Rectangle;

/// Result of feeding an observation to a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// This observation made the element visible for the first time.
    Triggered,
    /// Nothing changed.
    Ignored,
}

/// Tracks whether an element has ever been visible.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f32,
    has_been_visible: bool,
    released: bool,
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl VisibilityTrigger {
    /// Creates a trigger firing at `threshold` (fraction of area, clamped to `0..=1`).
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            has_been_visible: false,
            released: false,
        }
    }

    /// Feeds the fraction of the element currently inside the viewport.
    pub fn observe(&mut self, ratio: f32) -> Observation {
        if self.released || self.has_been_visible {
            return Observation::Ignored;
        }
        if ratio > 0.0 && ratio >= self.threshold {
            self.has_been_visible = true;
            Observation::Triggered
        } else {
            Observation::Ignored
        }
    }

    /// Stops observing. Further observations are ignored.
    pub fn release(&mut self) {
        self.released = true;
    }

    #[must_use]
    pub fn has_been_visible(&self) -> bool {
        self.has_been_visible
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

/// Fraction of `element` covered by `viewport`, in `0.0..=1.0`.
///
/// Zero-area elements count as fully visible when their position lies inside
/// the viewport, so empty placeholders still trigger.
#[must_use]
pub fn intersection_ratio(element: Rectangle, viewport: Rectangle) -> f32 {
    let area = element.width * element.height;
    if area <= 0.0 {
        return if viewport.contains(element.position()) {
            1.0
        } else {
            0.0
        };
    }

    let left = element.x.max(viewport.x);
    let top = element.y.max(viewport.y);
    let right = (element.x + element.width).min(viewport.x + viewport.width);
    let bottom = (element.y + element.height).min(viewport.y + viewport.height);

    if right <= left || bottom <= top {
        return 0.0;
    }

    (((right - left) * (bottom - top)) / area).clamp(0.0, 1.0)
}
