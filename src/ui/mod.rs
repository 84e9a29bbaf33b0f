// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! panel renders from a borrowed `ViewContext` and emits [`Intent`]s that the
//! application routes to the selection controller, the counter board or the
//! embed surface.
//!
//! # Page sections
//!
//! - [`navbar`] - Brand, view tabs and the compact hamburger menu
//! - [`hero`] - Active view title, description and stat counters
//! - [`embed_panel`] - Loading / error / ready states of the embedding surface
//! - [`preview_cards`] - One card per registered view
//! - [`sections`] - Feature lists and page footer
//!
//! # Shared infrastructure
//!
//! - [`stats`] - Stat tile with its animated counter
//! - [`widgets`] - Custom widgets (visibility sensor, spinner, backdrop)
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants
//! - [`theming`] - Light/Dark/System theme mode and color scheme
//! - [`icons`] - Glyph icons
//! - [`notifications`] - Toast notifications

pub mod design_tokens;
pub mod embed_panel;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod preview_cards;
pub mod sections;
pub mod stats;
pub mod styles;
pub mod theming;
pub mod widgets;

use crate::showcase::{CounterKey, ViewId};

/// What the user asked for from the page body.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SelectView(ViewId),
    /// Copy the view's external link.
    OpenSource(ViewId),
    Retry,
    ToggleBackdrop,
    /// A stat counter scrolled into view with the given intersection ratio.
    CounterVisible { key: CounterKey, ratio: f32 },
}
