// SPDX-License-Identifier: MPL-2.0
//! Notification queue and expiry.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen, newest first; the rest wait
//! in arrival order. A toast that reads exactly like one already shown or
//! waiting replaces it instead of stacking, so a view that keeps failing on
//! retry shows a single error with a fresh timer.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    waiting: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if let Some(slot) = self
            .visible
            .iter_mut()
            .chain(self.waiting.iter_mut())
            .find(|shown| shown.says_same_as(&notification))
        {
            *slot = notification;
            return;
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.waiting.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.total();
        self.visible.retain(|n| n.id() != id);
        self.waiting.retain(|n| n.id() != id);
        self.refill();
        self.total() < before
    }

    /// Drops every visible notification that expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.visible.retain(|n| !n.is_expired(now));
        self.refill();
    }

    /// Removes embed failure toasts once a view loads, so an old error does
    /// not linger next to working content.
    pub fn clear_embed_errors(&mut self) {
        self.visible.retain(|n| !n.is_embed_error());
        self.waiting.retain(|n| !n.is_embed_error());
        self.refill();
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Notifications on screen, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.total() > 0
    }

    fn total(&self) -> usize {
        self.visible.len() + self.waiting.len()
    }

    /// Moves waiting notifications on screen while there is room.
    fn refill(&mut self) {
        let room = MAX_VISIBLE.saturating_sub(self.visible.len());
        let promoted = self.waiting.len().min(room);
        self.visible.extend(self.waiting.drain(..promoted));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmbedError;
    use std::time::Duration;

    fn fill(manager: &mut Manager, count: usize) {
        for i in 0..count {
            manager.push(Notification::success(format!("toast-{i}")));
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_waits_and_is_promoted_on_dismiss() {
        let mut manager = Manager::new();
        let first = Notification::success("first");
        let first_id = first.id();
        manager.push(first);
        fill(&mut manager, MAX_VISIBLE);
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.dismiss(first_id));
    }

    #[test]
    fn newest_visible_toast_comes_first() {
        let mut manager = Manager::new();
        manager.push(Notification::success("older"));
        manager.push(Notification::success("newer"));
        assert_eq!(
            manager.visible().next().map(Notification::message_key),
            Some("newer")
        );
    }

    #[test]
    fn tick_expires_only_timed_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-link-copied"));
        manager.push(Notification::error("embed-error-network"));

        manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(10)));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.visible().next().map(Notification::message_key),
            Some("embed-error-network")
        );
    }

    #[test]
    fn repeated_failure_replaces_existing_toast() {
        let mut manager = Manager::new();
        let first = Notification::embed_failure(&EmbedError::Timeout, "Data Story");
        let first_id = first.id();
        manager.push(first);
        manager.push(Notification::embed_failure(&EmbedError::Timeout, "Data Story"));

        assert_eq!(manager.visible_count(), 1);
        assert!(manager.visible().all(|n| n.id() != first_id));
    }

    #[test]
    fn repeated_toast_in_queue_is_replaced_in_place() {
        let mut manager = Manager::new();
        fill(&mut manager, MAX_VISIBLE);
        manager.push(Notification::success("waiting"));
        manager.push(Notification::success("waiting"));
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn clear_embed_errors_keeps_other_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::error("embed-error-timeout"));
        manager.push(Notification::error("embed-error-framing-blocked"));
        manager.push(Notification::success("notification-link-copied"));
        manager.push(Notification::warning("notification-config-load-error"));
        assert_eq!(manager.queued_count(), 1);

        manager.clear_embed_errors();

        assert_eq!(manager.visible_count(), 2);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().all(|n| !n.is_embed_error()));
    }
}
