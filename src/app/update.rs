// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Selection changes always go through [`ViewSelection`]; the embed probe it
//! starts reports back with its ticket, and completions for older tickets are
//! dropped here after being journaled.

use super::Message;
use crate::config;
use crate::diagnostics::{ActivityKind, ActivityLog};
use crate::embed::{self, EmbedPage, EmbedSettings};
use crate::error::EmbedError;
use crate::i18n::fluent::I18n;
use crate::showcase::{CounterBoard, LoadTicket, Outcome, ViewId, ViewSelection};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::widgets::{Backdrop, LoadingClock};
use crate::ui::Intent;
use iced::Task;
use std::path::Path;
use std::time::{Duration, Instant};

/// Longest step fed to time-based animations, so a stalled window does not
/// make particles jump.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub selection: &'a mut ViewSelection,
    pub counters: &'a mut CounterBoard,
    pub embed: &'a EmbedSettings,
    pub page: &'a mut Option<EmbedPage>,
    pub last_error: &'a mut Option<EmbedError>,
    pub menu_open: &'a mut bool,
    pub backdrop: &'a mut Backdrop,
    pub loading: &'a mut LoadingClock,
    pub last_frame: &'a mut Option<Instant>,
    pub notifications: &'a mut notifications::Manager,
    pub activity: &'a mut ActivityLog,
    pub settings_dir: Option<&'a Path>,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open, ctx.selection.active_view()) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::SelectView(view) => select_view(ctx, view),
        NavbarEvent::OpenSource(view) => open_source(ctx, view),
    }
}

pub fn handle_intent(ctx: &mut UpdateContext<'_>, intent: Intent) -> Task<Message> {
    match intent {
        Intent::SelectView(view) => select_view(ctx, view),
        Intent::OpenSource(view) => open_source(ctx, view),
        Intent::Retry => retry(ctx),
        Intent::ToggleBackdrop => {
            let playing = ctx.backdrop.toggle();
            ctx.activity
                .record(ActivityKind::BackdropToggled { playing });
            *ctx.last_frame = None;
            persist_backdrop(ctx, playing);
            Task::none()
        }
        Intent::CounterVisible { key, ratio } => {
            ctx.counters.observe(key, ratio);
            Task::none()
        }
    }
}

/// Writes the backdrop preference back to `settings.toml`, keeping every
/// other value found on disk.
fn persist_backdrop(ctx: &mut UpdateContext<'_>, playing: bool) {
    let Some(dir) = ctx.settings_dir else {
        return;
    };

    let (mut settings, _) = config::load_with_override(Some(dir.to_path_buf()));
    settings.showcase.animate_backdrop = Some(playing);
    if let Err(error) = config::save_with_override(&settings, Some(dir.to_path_buf())) {
        ctx.activity.warn(format!("settings not saved: {error}"));
    }
}

/// Switches the active view and starts loading it. Re-selecting the active
/// view changes nothing.
pub fn select_view(ctx: &mut UpdateContext<'_>, view: ViewId) -> Task<Message> {
    let Some(ticket) = ctx.selection.select(view) else {
        return Task::none();
    };

    ctx.activity
        .record(ActivityKind::ViewSelected { view, ticket });
    ctx.counters.sync_hero(view);
    begin_load(ctx, ticket)
}

/// Reloads the active view after a failure. No-op in any other state.
pub fn retry(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(ticket) = ctx.selection.retry() else {
        return Task::none();
    };

    ctx.activity.record(ActivityKind::RetryRequested {
        view: ctx.selection.active_view(),
        ticket,
    });
    begin_load(ctx, ticket)
}

fn begin_load(ctx: &mut UpdateContext<'_>, ticket: LoadTicket) -> Task<Message> {
    *ctx.page = None;
    *ctx.last_error = None;
    ctx.loading.reset();
    start_probe(ctx.selection.active_view(), ticket, *ctx.embed)
}

/// Probes the embed URL of `view`; the result comes back tagged with `ticket`.
pub fn start_probe(view: ViewId, ticket: LoadTicket, settings: EmbedSettings) -> Task<Message> {
    let url = view.descriptor().embed_url.to_string();
    Task::perform(embed::probe(url, settings), move |result| {
        Message::EmbedFinished { ticket, result }
    })
}

pub fn handle_embed_finished(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    result: Result<EmbedPage, EmbedError>,
) -> Task<Message> {
    let view = ctx.selection.active_view();

    let outcome = match &result {
        Ok(_) => ctx.selection.content_loaded(ticket),
        Err(_) => ctx.selection.content_failed(ticket),
    };
    if outcome == Outcome::Stale {
        ctx.activity.record(ActivityKind::StaleDropped {
            ticket,
            current: ctx.selection.current_ticket(),
        });
        return Task::none();
    }

    match result {
        Ok(page) => {
            ctx.activity.record(ActivityKind::ContentLoaded {
                view,
                ticket,
                title: page.title.clone(),
            });
            ctx.notifications.clear_embed_errors();
            *ctx.page = Some(page);
        }
        Err(error) => {
            let descriptor = view.descriptor();
            let title = ctx.i18n.tr_or(&descriptor.title_key(), descriptor.title);
            ctx.notifications
                .push(Notification::embed_failure(&error, &title));
            ctx.activity.record(ActivityKind::ContentFailed {
                view,
                ticket,
                error: error.clone(),
            });
            *ctx.last_error = Some(error);
        }
    }
    Task::none()
}

/// Copies the view's external link and confirms with a toast. The URL is
/// passed through unchanged.
pub fn open_source(ctx: &mut UpdateContext<'_>, view: ViewId) -> Task<Message> {
    let descriptor = view.descriptor();
    let title = ctx.i18n.tr_or(&descriptor.title_key(), descriptor.title);

    ctx.activity.record(ActivityKind::LinkCopied { view });
    ctx.notifications
        .push(Notification::success("notification-link-copied").with_arg("title", title));
    iced::clipboard::write(descriptor.source_url.to_string())
}

/// Advances every time-based animation to `now`.
pub fn handle_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let delta = ctx
        .last_frame
        .map_or(Duration::ZERO, |last| now.saturating_duration_since(last))
        .min(MAX_FRAME_STEP);
    *ctx.last_frame = Some(now);

    ctx.backdrop.advance(delta);
    if ctx.selection.is_loading() {
        ctx.loading.advance(delta);
    }
    ctx.counters.tick(now);
    Task::none()
}
