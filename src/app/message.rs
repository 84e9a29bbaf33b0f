// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::embed::EmbedPage;
use crate::error::EmbedError;
use crate::showcase::{LoadTicket, ViewId};
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::Intent;
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Showcase(Intent),
    Notification(notifications::NotificationMessage),
    /// An embed probe finished. `ticket` identifies the attempt that started it.
    EmbedFinished {
        ticket: LoadTicket,
        result: Result<EmbedPage, EmbedError>,
    },
    CursorMoved(Point),
    CursorLeft,
    WindowResized(Size),
    /// Animation frame for counters, backdrop and the loading spinner.
    Frame(Instant),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// View shown at startup; overrides `showcase.default_view`.
    pub view: Option<ViewId>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ANALYTICS_HUB_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Skip network probes and report every embed as loaded.
    pub offline: bool,
}
