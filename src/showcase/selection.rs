// SPDX-License-Identifier: MPL-2.0
//! View selection state machine.
//!
//! Tracks which view is active and whether its embedded content is loading,
//! failed, or ready. Every load attempt carries a [`LoadTicket`]; completions
//! holding an outdated ticket are discarded so a slow answer for a view the
//! user already left can never flip the flags of the current one.

use super::registry::ViewId;

/// Generation tag of one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    /// Raw generation number.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Derived display phase of the embedding surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error,
    Ready,
}

/// Snapshot of the selection. Transitions replace it as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub active_view: ViewId,
    pub is_loading: bool,
    pub has_error: bool,
}

impl SelectionState {
    /// Startup state for `view`: loading, no error.
    #[must_use]
    pub fn initial(view: ViewId) -> Self {
        Self {
            active_view: view,
            is_loading: true,
            has_error: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.has_error {
            Phase::Error
        } else if self.is_loading {
            Phase::Loading
        } else {
            Phase::Ready
        }
    }
}

/// Result of feeding a load completion to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The completion belonged to the current attempt and was applied.
    Applied,
    /// The completion belonged to an earlier attempt and was dropped.
    Stale,
}

/// Owner of the [`SelectionState`].
#[derive(Debug, Clone)]
pub struct ViewSelection {
    state: SelectionState,
    current: LoadTicket,
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self::new(ViewId::default())
    }
}

impl ViewSelection {
    /// Creates the controller with `view` active and its first load pending.
    #[must_use]
    pub fn new(view: ViewId) -> Self {
        Self {
            state: SelectionState::initial(view),
            current: LoadTicket(0),
        }
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn active_view(&self) -> ViewId {
        self.state.active_view
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.state.has_error
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Ticket of the attempt currently in flight (or last finished).
    #[must_use]
    pub fn current_ticket(&self) -> LoadTicket {
        self.current
    }

    /// Switches to `view`.
    ///
    /// Returns the ticket of the new load attempt, or `None` when `view` is
    /// already active (no reload is started).
    pub fn select(&mut self, view: ViewId) -> Option<LoadTicket> {
        if view == self.state.active_view {
            return None;
        }
        self.state = SelectionState::initial(view);
        Some(self.next_ticket())
    }

    /// Marks the attempt identified by `ticket` as successfully loaded.
    pub fn content_loaded(&mut self, ticket: LoadTicket) -> Outcome {
        if ticket != self.current {
            return Outcome::Stale;
        }
        self.state = SelectionState {
            is_loading: false,
            ..self.state
        };
        Outcome::Applied
    }

    /// Marks the attempt identified by `ticket` as failed.
    pub fn content_failed(&mut self, ticket: LoadTicket) -> Outcome {
        if ticket != self.current {
            return Outcome::Stale;
        }
        self.state = SelectionState {
            is_loading: false,
            has_error: true,
            ..self.state
        };
        Outcome::Applied
    }

    /// Restarts loading the active view after a failure.
    ///
    /// Only valid in the error state; returns `None` (and changes nothing)
    /// otherwise.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        if !self.state.has_error {
            return None;
        }
        self.state = SelectionState::initial(self.state.active_view);
        Some(self.next_ticket())
    }

    fn next_ticket(&mut self) -> LoadTicket {
        self.current = LoadTicket(self.current.0 + 1);
        self.current
    }
}
