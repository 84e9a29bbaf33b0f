// SPDX-License-Identifier: MPL-2.0
//! In-memory activity journal.
//!
//! The application records view selections, embed outcomes and user actions
//! into a memory-bounded [`CircularBuffer`]. Nothing is written to disk; the
//! footer shows the latest entry and tests inspect the whole journal.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Bounded FIFO that counts what it evicts
//! - [`ActivityEvent`]: Timestamped journal entry
//! - [`ActivityLog`]: Owner of the buffer, written from the update loop

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{ActivityEvent, ActivityKind};

/// Journal of recent activity.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    buffer: CircularBuffer<ActivityEvent>,
}

impl ActivityLog {
    /// Creates an empty journal with the given capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
        }
    }

    /// Records an event stamped with the current time.
    pub fn record(&mut self, kind: ActivityKind) {
        self.buffer.push(ActivityEvent::new(kind));
    }

    /// Records a warning message.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(ActivityKind::Warning {
            message: message.into(),
        });
    }

    /// Retained events, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ActivityEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&ActivityEvent> {
        self.buffer.newest()
    }

    /// Retained failures and warnings.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.buffer.iter().filter(|e| e.kind.is_problem()).count()
    }

    /// Every event recorded this session, including ones no longer retained.
    #[must_use]
    pub fn total_recorded(&self) -> u64 {
        self.buffer.len() as u64 + self.buffer.evicted()
    }

    /// Retained event count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.slots()
    }
}
