// SPDX-License-Identifier: MPL-2.0
//! Activity event types.
//!
//! Events record what the user did and how the embedding surface answered,
//! so a failing session can be reconstructed from the journal.

use crate::error::EmbedError;
use crate::showcase::{LoadTicket, ViewId};
use std::fmt;
use std::time::Instant;

/// A single journal entry.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    /// What happened.
    pub kind: ActivityKind,
}

impl ActivityEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: ActivityKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: ActivityKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data of an [`ActivityEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityKind {
    // ==========================================================================
    // User Actions
    // ==========================================================================
    /// The user switched views; a new load attempt started.
    ViewSelected { view: ViewId, ticket: LoadTicket },

    /// The user asked to reload the active view after a failure.
    RetryRequested { view: ViewId, ticket: LoadTicket },

    /// A source link was copied to the clipboard.
    LinkCopied { view: ViewId },

    /// The backdrop animation was paused or resumed.
    BackdropToggled { playing: bool },

    // ==========================================================================
    // Embed Outcomes
    // ==========================================================================
    /// The embedding surface reported success.
    ContentLoaded {
        view: ViewId,
        ticket: LoadTicket,
        title: Option<String>,
    },

    /// The embedding surface reported a failure.
    ContentFailed {
        view: ViewId,
        ticket: LoadTicket,
        error: EmbedError,
    },

    /// A completion for an outdated attempt was discarded.
    StaleDropped { ticket: LoadTicket, current: LoadTicket },

    // ==========================================================================
    // Ambient
    // ==========================================================================
    /// Where the settings directory was resolved at startup.
    SettingsLocated { directory: String, source: String },

    /// A non-fatal problem (config fallback, clipboard, ...).
    Warning { message: String },
}

impl ActivityKind {
    /// Whether this event describes a failure or warning.
    #[must_use]
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            ActivityKind::ContentFailed { .. } | ActivityKind::Warning { .. }
        )
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::ViewSelected { view, ticket } => {
                write!(f, "selected {} (#{})", view, ticket.generation())
            }
            ActivityKind::RetryRequested { view, ticket } => {
                write!(f, "retry {} (#{})", view, ticket.generation())
            }
            ActivityKind::LinkCopied { view } => write!(f, "copied link for {}", view),
            ActivityKind::BackdropToggled { playing } => {
                write!(f, "backdrop {}", if *playing { "playing" } else { "paused" })
            }
            ActivityKind::ContentLoaded { view, ticket, .. } => {
                write!(f, "loaded {} (#{})", view, ticket.generation())
            }
            ActivityKind::ContentFailed {
                view,
                ticket,
                error,
            } => write!(
                f,
                "failed {} (#{}): {}",
                view,
                ticket.generation(),
                error
            ),
            ActivityKind::StaleDropped { ticket, current } => write!(
                f,
                "dropped stale #{} (current #{})",
                ticket.generation(),
                current.generation()
            ),
            ActivityKind::SettingsLocated { directory, source } => {
                write!(f, "settings in {} ({})", directory, source)
            }
            ActivityKind::Warning { message } => write!(f, "warning: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::ViewSelection;

    #[test]
    fn with_timestamp_keeps_instant() {
        let now = Instant::now();
        let event = ActivityEvent::with_timestamp(
            ActivityKind::LinkCopied {
                view: ViewId::Story,
            },
            now,
        );
        assert_eq!(event.timestamp, now);
    }

    #[test]
    fn display_names_view_and_generation() {
        let mut selection = ViewSelection::default();
        let ticket = selection.select(ViewId::Dashboard).expect("new view");
        let kind = ActivityKind::ContentFailed {
            view: ViewId::Dashboard,
            ticket,
            error: EmbedError::HttpStatus(503),
        };
        assert_eq!(kind.to_string(), "failed dashboard (#1): HTTP status 503");
        assert!(kind.is_problem());
    }

    #[test]
    fn user_actions_are_not_problems() {
        assert!(!ActivityKind::BackdropToggled { playing: false }.is_problem());
    }
}
