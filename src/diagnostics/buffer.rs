// SPDX-License-Identifier: MPL-2.0
//! Bounded storage for journal entries.
//!
//! Once full, every push evicts the oldest entry and hands it back to the
//! caller. The buffer keeps a running count of evictions so the journal can
//! report how much history it has lost.

use crate::config::{DEFAULT_JOURNAL_CAPACITY, MAX_JOURNAL_CAPACITY, MIN_JOURNAL_CAPACITY};
use std::collections::VecDeque;

/// Journal capacity, guaranteed to be within
/// `MIN_JOURNAL_CAPACITY..=MAX_JOURNAL_CAPACITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Clamps `value` into the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_JOURNAL_CAPACITY, MAX_JOURNAL_CAPACITY))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_JOURNAL_CAPACITY)
    }
}

/// Fixed-size FIFO that overwrites its oldest entry.
///
/// ```
/// use analytics_hub::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer = CircularBuffer::new(BufferCapacity::new(16));
/// for value in 0..20 {
///     buffer.push(value);
/// }
///
/// assert_eq!(buffer.iter().next(), Some(&4));
/// assert_eq!(buffer.evicted(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    slots: usize,
    evicted: u64,
}

impl<T> Default for CircularBuffer<T> {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_slots(capacity.value())
    }

    /// Buffer holding `slots` entries (at least one), bypassing the journal
    /// bounds of [`BufferCapacity`].
    #[must_use]
    pub fn with_slots(slots: usize) -> Self {
        let slots = slots.max(1);
        Self {
            entries: VecDeque::with_capacity(slots),
            slots,
            evicted: 0,
        }
    }

    /// Appends `item`; returns the entry it displaced, if the buffer was full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let displaced = if self.entries.len() == self.slots {
            self.evicted += 1;
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(item);
        displaced
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.iter()
    }

    #[must_use]
    pub fn newest(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Number of entries pushed out since creation.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn slots(&self) -> usize {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_clamped_to_journal_bounds() {
        assert_eq!(BufferCapacity::new(0).value(), MIN_JOURNAL_CAPACITY);
        assert_eq!(BufferCapacity::new(usize::MAX).value(), MAX_JOURNAL_CAPACITY);
        assert_eq!(BufferCapacity::new(100).value(), 100);
        assert_eq!(BufferCapacity::default().value(), DEFAULT_JOURNAL_CAPACITY);
    }

    #[test]
    fn full_buffer_hands_back_oldest() {
        let mut buffer = CircularBuffer::with_slots(2);
        assert_eq!(buffer.push('a'), None);
        assert_eq!(buffer.push('b'), None);
        assert_eq!(buffer.push('c'), Some('a'));

        assert_eq!(buffer.iter().copied().collect::<String>(), "bc");
        assert_eq!(buffer.newest(), Some(&'c'));
        assert_eq!(buffer.evicted(), 1);
    }

    #[test]
    fn zero_slots_still_keeps_newest() {
        let mut buffer = CircularBuffer::with_slots(0);
        assert_eq!(buffer.slots(), 1);
        buffer.push("first");
        assert_eq!(buffer.push("second"), Some("first"));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn new_buffer_is_empty() {
        let buffer: CircularBuffer<u8> = CircularBuffer::new(BufferCapacity::new(32));
        assert!(buffer.is_empty());
        assert_eq!(buffer.newest(), None);
        assert_eq!(buffer.slots(), 32);
        assert_eq!(buffer.evicted(), 0);
    }
}
