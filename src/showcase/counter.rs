// SPDX-License-Identifier: MPL-2.0
//! Animated stat counter.
//!
//! A counter shows `"0"` until its element first becomes visible, then counts
//! linearly from zero up to the numeric part of its target over a fixed
//! duration, keeping the target's non-numeric characters as a suffix on
//! every frame. The last frame shows the target string verbatim.
//!
//! Time is injected through [`AnimatedCounter::tick`], so the animation is
//! deterministic under test.

use super::visibility::{Observation, VisibilityTrigger};
use crate::config::DEFAULT_COUNTER_DURATION_MS;
use std::time::{Duration, Instant};

/// Text shown before the counter has been seen.
pub const IDLE_TEXT: &str = "0";

/// A target display string split into its numeric part and suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetValue {
    raw: String,
    numeric: Option<f64>,
    suffix: String,
}

impl TargetValue {
    /// Splits `raw` into numeric value and suffix.
    ///
    /// The numeric value is the first run of digits holding at most one
    /// decimal point; the suffix is every character of `raw` that is neither
    /// a digit nor a decimal point.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let suffix = raw
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != '.')
            .collect();

        Self {
            raw: raw.to_string(),
            numeric: leading_number(raw),
            suffix,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        self.numeric
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Text for a frame at `progress` (clamped to `0..=1`).
    ///
    /// Intermediate frames use one decimal place plus the suffix; progress 1
    /// returns the raw target. Non-numeric targets always return the raw text.
    #[must_use]
    pub fn frame_text(&self, progress: f64) -> String {
        let Some(target) = self.numeric else {
            return self.raw.clone();
        };
        let progress = progress.clamp(0.0, 1.0);
        if progress >= 1.0 {
            return self.raw.clone();
        }
        format!("{:.1}{}", target * progress, self.suffix)
    }
}

fn leading_number(raw: &str) -> Option<f64> {
    let start = raw.find(|c: char| c.is_ascii_digit() || c == '.')?;
    let mut seen_dot = false;
    let mut end = start;
    for (offset, c) in raw[start..].char_indices() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = start + offset + c.len_utf8();
    }

    let digits = &raw[start..end];
    if !digits.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    // "5." and ".5" both parse with Rust's float grammar.
    digits.parse::<f64>().ok()
}

/// Where a counter is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    /// Not yet visible.
    Waiting,
    /// Visible and counting. `started` is set by the first frame.
    Running { started: Option<Instant> },
    /// Showing the final text.
    Finished,
}

/// Counter animating from zero to a target once it becomes visible.
#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    target: TargetValue,
    duration: Duration,
    trigger: VisibilityTrigger,
    phase: CounterPhase,
    display: String,
}

impl AnimatedCounter {
    /// Creates a counter for `value` lasting `duration`.
    #[must_use]
    pub fn new(value: &str, duration: Duration) -> Self {
        let target = TargetValue::parse(value);
        let (phase, display) = if target.numeric().is_some() {
            (CounterPhase::Waiting, IDLE_TEXT.to_string())
        } else {
            (CounterPhase::Finished, target.raw().to_string())
        };

        Self {
            target,
            duration,
            trigger: VisibilityTrigger::default(),
            phase,
            display,
        }
    }

    /// Creates a counter with the default two-second duration.
    #[must_use]
    pub fn with_default_duration(value: &str) -> Self {
        Self::new(value, Duration::from_millis(DEFAULT_COUNTER_DURATION_MS))
    }

    /// Feeds the visible fraction of the counter's element.
    ///
    /// The first observation crossing the threshold starts the animation;
    /// every later observation is ignored.
    pub fn observe(&mut self, ratio: f32) -> Observation {
        let observation = self.trigger.observe(ratio);
        if observation == Observation::Triggered && self.phase == CounterPhase::Waiting {
            self.phase = CounterPhase::Running { started: None };
        }
        observation
    }

    /// Advances the animation to `now`. Returns `true` when the text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let CounterPhase::Running { started } = self.phase else {
            return false;
        };

        let started = started.unwrap_or(now);
        let fraction = progress(now.saturating_duration_since(started), self.duration);
        let text = self.target.frame_text(fraction);

        self.phase = if fraction >= 1.0 {
            CounterPhase::Finished
        } else {
            CounterPhase::Running {
                started: Some(started),
            }
        };

        if text == self.display {
            false
        } else {
            self.display = text;
            true
        }
    }

    /// Stops observing visibility. A running animation still completes.
    pub fn release(&mut self) {
        self.trigger.release();
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, CounterPhase::Running { .. })
    }

    /// Whether the counter still wants visibility observations.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.phase == CounterPhase::Waiting && !self.trigger.is_released()
    }

    #[must_use]
    pub fn target(&self) -> &TargetValue {
        &self.target
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// `elapsed / duration` clamped to `0..=1`; a zero duration is complete at once.
#[must_use]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn visible_counter(value: &str) -> (AnimatedCounter, Instant) {
        let mut counter = AnimatedCounter::with_default_duration(value);
        assert_eq!(counter.observe(1.0), Observation::Triggered);
        (counter, Instant::now())
    }

    #[test]
    fn parses_percentage() {
        let target = TargetValue::parse("98.7%");
        assert_eq!(target.numeric(), Some(98.7));
        assert_eq!(target.suffix(), "%");
    }

    #[test]
    fn parses_multi_character_suffix() {
        let target = TargetValue::parse("2.4M+");
        assert_eq!(target.numeric(), Some(2.4));
        assert_eq!(target.suffix(), "M+");
    }

    #[test]
    fn parse_stops_at_second_number() {
        let target = TargetValue::parse("4.8/5");
        assert_eq!(target.numeric(), Some(4.8));
        assert_eq!(target.suffix(), "/");
    }

    #[test]
    fn parse_skips_leading_symbols() {
        let target = TargetValue::parse("$12");
        assert_eq!(target.numeric(), Some(12.0));
        assert_eq!(target.suffix(), "$");
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(TargetValue::parse("N/A").numeric(), None);
        assert_eq!(TargetValue::parse(".").numeric(), None);
        assert_eq!(TargetValue::parse("").numeric(), None);
    }

    #[test]
    fn parse_accepts_at_most_one_decimal_point() {
        assert_eq!(TargetValue::parse("1.2.3").numeric(), Some(1.2));
        assert_eq!(TargetValue::parse(".5x").numeric(), Some(0.5));
    }

    #[test]
    fn shows_zero_until_visible() {
        let mut counter = AnimatedCounter::with_default_duration("98.7%");
        assert_eq!(counter.display(), "0");
        assert!(!counter.tick(Instant::now()));
        assert_eq!(counter.display(), "0");
        assert_eq!(counter.phase(), CounterPhase::Waiting);
    }

    #[test]
    fn below_threshold_does_not_start() {
        let mut counter = AnimatedCounter::with_default_duration("47");
        assert_eq!(counter.observe(0.05), Observation::Ignored);
        assert!(!counter.is_animating());
    }

    #[test]
    fn first_frame_is_progress_zero() {
        let (mut counter, start) = visible_counter("98.7%");
        assert_eq!(counter.display(), "0");
        assert!(counter.tick(start));
        assert_eq!(counter.display(), "0.0%");
    }

    #[test]
    fn intermediate_frame_keeps_suffix() {
        let (mut counter, start) = visible_counter("2.4M+");
        counter.tick(start);
        counter.tick(start + ms(1000));
        assert_eq!(counter.display(), "1.2M+");
    }

    #[test]
    fn final_frame_matches_target_exactly() {
        let (mut counter, start) = visible_counter("98.7%");
        counter.tick(start);
        counter.tick(start + ms(1999));
        assert!(counter.is_animating());
        counter.tick(start + ms(2000));

        assert_eq!(counter.display(), "98.7%");
        assert_eq!(counter.phase(), CounterPhase::Finished);
        assert!(!counter.is_animating());
    }

    #[test]
    fn integer_target_ends_without_decimal() {
        let (mut counter, start) = visible_counter("47");
        counter.tick(start);
        counter.tick(start + ms(500));
        assert_eq!(counter.display(), "11.8");
        counter.tick(start + ms(5000));
        assert_eq!(counter.display(), "47");
    }

    #[test]
    fn fraction_target_ends_on_original_text() {
        let (mut counter, start) = visible_counter("4.8/5");
        counter.tick(start);
        counter.tick(start + ms(1000));
        assert_eq!(counter.display(), "2.4/");
        counter.tick(start + ms(2000));
        assert_eq!(counter.display(), "4.8/5");
    }

    #[test]
    fn non_numeric_value_shows_immediately() {
        let mut counter = AnimatedCounter::with_default_duration("N/A");
        assert_eq!(counter.display(), "N/A");
        assert!(!counter.is_animating());
        counter.observe(1.0);
        assert!(!counter.tick(Instant::now()));
        assert_eq!(counter.display(), "N/A");
    }

    #[test]
    fn visibility_toggles_do_not_restart() {
        let (mut counter, start) = visible_counter("156");
        counter.tick(start);
        counter.tick(start + ms(2000));
        assert_eq!(counter.display(), "156");

        for ratio in [0.0, 1.0, 0.0, 1.0] {
            assert_eq!(counter.observe(ratio), Observation::Ignored);
        }
        assert!(!counter.tick(start + ms(2100)));
        assert_eq!(counter.display(), "156");
    }

    #[test]
    fn leaving_viewport_mid_animation_does_not_reverse() {
        let (mut counter, start) = visible_counter("156");
        counter.tick(start);
        counter.tick(start + ms(1000));
        counter.observe(0.0);
        counter.tick(start + ms(1500));
        assert_eq!(counter.display(), "117.0");
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut counter = AnimatedCounter::new("99.9%", Duration::ZERO);
        counter.observe(1.0);
        counter.tick(Instant::now());
        assert_eq!(counter.display(), "99.9%");
    }

    #[test]
    fn released_counter_never_starts() {
        let mut counter = AnimatedCounter::with_default_duration("47");
        counter.release();
        assert!(!counter.is_waiting());
        assert_eq!(counter.observe(1.0), Observation::Ignored);
        assert_eq!(counter.display(), "0");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(ms(3000), ms(2000)), 1.0);
        assert_eq!(progress(ms(0), ms(2000)), 0.0);
        assert_eq!(progress(ms(500), ms(2000)), 0.25);
    }
}
