// SPDX-License-Identifier: MPL-2.0
//! Registry of mounted stat counters.
//!
//! Each stat value on screen is backed by one [`AnimatedCounter`]. Preview
//! cards keep their counters for the lifetime of the app; the hero strip is
//! remounted whenever the active view changes, which releases the old
//! counters and gives the new view fresh ones that animate again.

use super::counter::{AnimatedCounter, IDLE_TEXT};
use super::registry::{self, ViewId};
use super::visibility::Observation;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Which part of the screen a counter lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Stat strip under the active view's title.
    Hero,
    /// Stat grid inside a view's preview card.
    Card,
}

/// Identifies one mounted counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterKey {
    pub placement: Placement,
    pub view: ViewId,
    pub index: usize,
}

impl CounterKey {
    #[must_use]
    pub fn hero(view: ViewId, index: usize) -> Self {
        Self {
            placement: Placement::Hero,
            view,
            index,
        }
    }

    #[must_use]
    pub fn card(view: ViewId, index: usize) -> Self {
        Self {
            placement: Placement::Card,
            view,
            index,
        }
    }
}

/// Owns every mounted counter.
#[derive(Debug, Clone)]
pub struct CounterBoard {
    counters: HashMap<CounterKey, AnimatedCounter>,
    duration: Duration,
    hero_view: Option<ViewId>,
}

impl CounterBoard {
    /// Creates a board with card counters mounted for every registry view.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        let mut board = Self {
            counters: HashMap::new(),
            duration,
            hero_view: None,
        };
        for view in registry::all() {
            for index in 0..view.stats.len() {
                board.mount(CounterKey::card(view.id, index));
            }
        }
        board
    }

    /// Makes the hero strip show `view`.
    ///
    /// Hero counters of any other view are released and dropped; `view` gets
    /// new counters. Calling it again for the current hero view is a no-op.
    pub fn sync_hero(&mut self, view: ViewId) {
        if self.hero_view == Some(view) {
            return;
        }

        let stale: Vec<CounterKey> = self
            .counters
            .keys()
            .filter(|key| key.placement == Placement::Hero && key.view != view)
            .copied()
            .collect();
        for key in stale {
            self.unmount(key);
        }

        for index in 0..view.descriptor().stats.len() {
            self.mount(CounterKey::hero(view, index));
        }
        self.hero_view = Some(view);
    }

    /// View currently shown in the hero strip.
    #[must_use]
    pub fn hero_view(&self) -> Option<ViewId> {
        self.hero_view
    }

    fn mount(&mut self, key: CounterKey) {
        let value = key.view.descriptor().stats[key.index].value;
        self.counters
            .insert(key, AnimatedCounter::new(value, self.duration));
    }

    /// Releases and removes one counter. Returns `false` if it was not mounted.
    pub fn unmount(&mut self, key: CounterKey) -> bool {
        match self.counters.remove(&key) {
            Some(mut counter) => {
                counter.release();
                true
            }
            None => false,
        }
    }

    /// Forwards a visibility observation; unknown keys are ignored.
    pub fn observe(&mut self, key: CounterKey, ratio: f32) -> Observation {
        self.counters
            .get_mut(&key)
            .map_or(Observation::Ignored, |counter| counter.observe(ratio))
    }

    /// Advances every running counter. Returns `true` if any text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for counter in self.counters.values_mut() {
            changed |= counter.tick(now);
        }
        changed
    }

    /// Whether any counter needs animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.counters.values().any(AnimatedCounter::is_animating)
    }

    /// Current text of a counter, `"0"` if it is not mounted.
    #[must_use]
    pub fn display(&self, key: CounterKey) -> &str {
        self.counters
            .get(&key)
            .map_or(IDLE_TEXT, AnimatedCounter::display)
    }

    /// Whether a counter is still waiting for its first visibility.
    #[must_use]
    pub fn is_waiting(&self, key: CounterKey) -> bool {
        self.counters
            .get(&key)
            .is_some_and(AnimatedCounter::is_waiting)
    }

    #[must_use]
    pub fn is_mounted(&self, key: CounterKey) -> bool {
        self.counters.contains_key(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> CounterBoard {
        CounterBoard::new(Duration::from_millis(2000))
    }

    fn run_to_end(board: &mut CounterBoard) {
        let start = Instant::now();
        board.tick(start);
        board.tick(start + Duration::from_secs(3));
    }

    #[test]
    fn cards_are_mounted_for_every_view() {
        let board = board();
        for view in ViewId::ALL {
            for index in 0..3 {
                assert!(board.is_mounted(CounterKey::card(view, index)));
            }
        }
        assert!(board.hero_view().is_none());
    }

    #[test]
    fn sync_hero_swaps_counters() {
        let mut board = board();
        board.sync_hero(ViewId::Story);
        assert!(board.is_mounted(CounterKey::hero(ViewId::Story, 0)));

        board.sync_hero(ViewId::Dashboard);
        assert!(!board.is_mounted(CounterKey::hero(ViewId::Story, 0)));
        assert!(board.is_mounted(CounterKey::hero(ViewId::Dashboard, 2)));
        assert_eq!(board.len(), 6 + 3);
    }

    #[test]
    fn hero_remount_replays_animation() {
        let mut board = board();
        let key = CounterKey::hero(ViewId::Story, 2);
        board.sync_hero(ViewId::Story);
        board.observe(key, 1.0);
        run_to_end(&mut board);
        assert_eq!(board.display(key), "98.7%");

        board.sync_hero(ViewId::Dashboard);
        board.sync_hero(ViewId::Story);
        assert_eq!(board.display(key), "0");
        assert!(board.is_waiting(key));
    }

    #[test]
    fn sync_hero_same_view_keeps_progress() {
        let mut board = board();
        let key = CounterKey::hero(ViewId::Story, 1);
        board.sync_hero(ViewId::Story);
        board.observe(key, 1.0);
        run_to_end(&mut board);

        board.sync_hero(ViewId::Story);
        assert_eq!(board.display(key), "47");
    }

    #[test]
    fn card_counters_survive_view_changes() {
        let mut board = board();
        let key = CounterKey::card(ViewId::Dashboard, 0);
        board.observe(key, 0.5);
        run_to_end(&mut board);

        board.sync_hero(ViewId::Dashboard);
        board.sync_hero(ViewId::Story);
        assert_eq!(board.display(key), "156");
    }

    #[test]
    fn animating_only_after_observation() {
        let mut board = board();
        assert!(!board.is_animating());
        board.observe(CounterKey::card(ViewId::Story, 0), 1.0);
        assert!(board.is_animating());
        run_to_end(&mut board);
        assert!(!board.is_animating());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut board = board();
        let key = CounterKey::hero(ViewId::Dashboard, 0);
        assert_eq!(board.observe(key, 1.0), Observation::Ignored);
        assert_eq!(board.display(key), "0");
        assert!(!board.unmount(key));
    }
}
