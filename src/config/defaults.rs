// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Counter**: Stat counter animation timing and visibility threshold
//! - **Embed**: Embedding surface probe timeout
//! - **Layout**: Window breakpoints
//! - **Backdrop**: Decorative particle field
//! - **Journal**: Activity journal capacity

// ==========================================================================
// Counter Defaults
// ==========================================================================

/// Default duration of the zero-to-target counter animation (milliseconds).
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

/// Minimum counter duration; zero completes the animation on the first frame.
pub const MIN_COUNTER_DURATION_MS: u64 = 0;

/// Maximum counter duration (milliseconds).
pub const MAX_COUNTER_DURATION_MS: u64 = 10_000;

/// Fraction of a counter's area that must intersect the viewport before it
/// counts as visible.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

// ==========================================================================
// Embed Defaults
// ==========================================================================

/// Default timeout for probing an embed URL (seconds).
pub const DEFAULT_EMBED_TIMEOUT_SECS: u32 = 15;

/// Minimum embed timeout (seconds).
pub const MIN_EMBED_TIMEOUT_SECS: u32 = 1;

/// Maximum embed timeout (seconds).
pub const MAX_EMBED_TIMEOUT_SECS: u32 = 120;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Below this window width the navbar collapses view tabs into a menu.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

// ==========================================================================
// Backdrop Defaults
// ==========================================================================

/// Number of decorative floating particles.
pub const PARTICLE_COUNT: usize = 20;

// ==========================================================================
// Journal Defaults
// ==========================================================================

/// Default number of activity events retained in memory.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 256;

/// Minimum journal capacity.
pub const MIN_JOURNAL_CAPACITY: usize = 16;

/// Maximum journal capacity.
pub const MAX_JOURNAL_CAPACITY: usize = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_COUNTER_DURATION_MS > MIN_COUNTER_DURATION_MS);
    assert!(DEFAULT_COUNTER_DURATION_MS >= MIN_COUNTER_DURATION_MS);
    assert!(DEFAULT_COUNTER_DURATION_MS <= MAX_COUNTER_DURATION_MS);

    assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD <= 1.0);

    assert!(MIN_EMBED_TIMEOUT_SECS > 0);
    assert!(MAX_EMBED_TIMEOUT_SECS >= MIN_EMBED_TIMEOUT_SECS);
    assert!(DEFAULT_EMBED_TIMEOUT_SECS >= MIN_EMBED_TIMEOUT_SECS);
    assert!(DEFAULT_EMBED_TIMEOUT_SECS <= MAX_EMBED_TIMEOUT_SECS);

    assert!(COMPACT_BREAKPOINT > 0.0);
    assert!(PARTICLE_COUNT > 0);

    assert!(MIN_JOURNAL_CAPACITY > 0);
    assert!(MAX_JOURNAL_CAPACITY >= MIN_JOURNAL_CAPACITY);
    assert!(DEFAULT_JOURNAL_CAPACITY >= MIN_JOURNAL_CAPACITY);
    assert!(DEFAULT_JOURNAL_CAPACITY <= MAX_JOURNAL_CAPACITY);
};
