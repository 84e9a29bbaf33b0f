// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short-lived messages shown in the bottom-right corner: copied links,
//! configuration problems, embeds that failed to load.
//!
//! - [`Notification`] carries a severity and an i18n key resolved at render time.
//! - [`Manager`] queues notifications and expires them on `Tick`.
//! - [`Toast`] renders the visible ones.
//!
//! Success and info toasts stay ~3s, warnings ~5s, errors until dismissed.
//! At most three toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
