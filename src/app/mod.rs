// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the presentation core (view selection,
//! counters), the embedding surface, localization and the decorative chrome,
//! and translates messages into side effects like embed probes or clipboard
//! writes.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_JOURNAL_CAPACITY};
use crate::diagnostics::{ActivityKind, ActivityLog, BufferCapacity};
use crate::embed::{EmbedPage, EmbedSettings};
use crate::error::EmbedError;
use crate::i18n::fluent::I18n;
use crate::showcase::{CounterBoard, ViewSelection};
use crate::ui::notifications;
use crate::ui::widgets::{Backdrop, LoadingClock};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Resolved once at startup; `System` is detected then.
    theme: Theme,
    selection: ViewSelection,
    counters: CounterBoard,
    embed: EmbedSettings,
    /// Summary of the last successful load of the active view.
    page: Option<EmbedPage>,
    /// Cause of the current error state, for the detail line.
    last_error: Option<EmbedError>,
    /// Whether the compact hamburger menu is open.
    menu_open: bool,
    window_width: f32,
    backdrop: Backdrop,
    loading: LoadingClock,
    last_frame: Option<Instant>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    activity: ActivityLog,
    /// Where preference changes are written back; `None` keeps them in memory.
    settings_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selection", &self.selection.state())
            .field("menu_open", &self.menu_open)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the state from config and CLI flags and starts loading the
    /// first view.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let override_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(override_dir.clone());
        let (mut app, task) = Self::with_config(&flags, &config);

        if let Some((directory, source)) = paths::resolve_config_dir(override_dir) {
            app.activity.record(ActivityKind::SettingsLocated {
                directory: directory.display().to_string(),
                source: source.to_string(),
            });
            app.settings_dir = Some(directory);
        }

        if let Some(key) = config_warning {
            app.activity.warn(format!("{key}: falling back to defaults"));
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, task)
    }

    /// Same as [`App::new`] with an already loaded configuration. Preference
    /// changes are not persisted.
    pub fn with_config(flags: &Flags, config: &Config) -> (Self, Task<Message>) {
        let start_view = flags.view.unwrap_or_else(|| config.showcase.start_view());
        let embed = if flags.offline {
            EmbedSettings::offline()
        } else {
            EmbedSettings::from_config(&config.embed)
        };

        let mut counters = CounterBoard::new(config.showcase.counter_duration().as_duration());
        counters.sync_hero(start_view);

        let app = App {
            i18n: I18n::new(flags.lang.clone(), config),
            theme: config.general.theme_mode.iced_theme(),
            selection: ViewSelection::new(start_view),
            counters,
            embed,
            page: None,
            last_error: None,
            menu_open: false,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            backdrop: Backdrop::new(config.showcase.backdrop_animated()),
            loading: LoadingClock::default(),
            last_frame: None,
            notifications: notifications::Manager::new(),
            activity: ActivityLog::new(BufferCapacity::new(DEFAULT_JOURNAL_CAPACITY)),
            settings_dir: None,
        };

        let task = update::start_probe(start_view, app.selection.current_ticket(), app.embed);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let descriptor = self.selection.active_view().descriptor();
        let view_title = self.i18n.tr_or(&descriptor.title_key(), descriptor.title);
        format!("{view_title} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn is_animating(&self) -> bool {
        self.counters.is_animating() || self.backdrop.is_playing() || self.selection.is_loading()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(self.is_animating()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            selection: &mut self.selection,
            counters: &mut self.counters,
            embed: &self.embed,
            page: &mut self.page,
            last_error: &mut self.last_error,
            menu_open: &mut self.menu_open,
            backdrop: &mut self.backdrop,
            loading: &mut self.loading,
            last_frame: &mut self.last_frame,
            notifications: &mut self.notifications,
            activity: &mut self.activity,
            settings_dir: self.settings_dir.as_deref(),
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Showcase(intent) => update::handle_intent(&mut ctx, intent),
            Message::EmbedFinished { ticket, result } => {
                update::handle_embed_finished(&mut ctx, ticket, result)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::CursorMoved(position) => {
                self.backdrop.set_cursor(position);
                Task::none()
            }
            Message::CursorLeft => {
                self.backdrop.clear_cursor();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
            Message::Frame(now) => update::handle_frame(&mut ctx, now),
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            selection: &self.selection,
            counters: &self.counters,
            page: self.page.as_ref(),
            last_error: self.last_error.as_ref(),
            menu_open: self.menu_open,
            window_width: self.window_width,
            backdrop: &self.backdrop,
            loading: &self.loading,
            notifications: &self.notifications,
            activity: &self.activity,
        })
    }

    #[must_use]
    pub fn selection(&self) -> &ViewSelection {
        &self.selection
    }

    #[must_use]
    pub fn counters(&self) -> &CounterBoard {
        &self.counters
    }

    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&EmbedError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn page(&self) -> Option<&EmbedPage> {
        self.page.as_ref()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::{CounterKey, LoadTicket, Phase, ViewId};
    use crate::ui::{navbar, Intent};
    use std::time::Duration;

    fn flags() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            offline: true,
            ..Flags::default()
        }
    }

    fn app() -> App {
        App::with_config(&flags(), &Config::default()).0
    }

    fn loaded(ticket: LoadTicket) -> Message {
        Message::EmbedFinished {
            ticket,
            result: Ok(EmbedPage {
                url: "https://example.com".to_string(),
                content_type: None,
                title: Some("Story".to_string()),
                probed: true,
            }),
        }
    }

    fn failed(ticket: LoadTicket, error: EmbedError) -> Message {
        Message::EmbedFinished {
            ticket,
            result: Err(error),
        }
    }

    #[test]
    fn starts_loading_first_view() {
        let app = app();
        assert_eq!(app.selection().active_view(), ViewId::Story);
        assert_eq!(app.selection().phase(), Phase::Loading);
        assert_eq!(app.counters().hero_view(), Some(ViewId::Story));
    }

    #[test]
    fn cli_view_overrides_config() {
        let flags = Flags {
            view: Some(ViewId::Dashboard),
            ..flags()
        };
        let (app, _) = App::with_config(&flags, &Config::default());
        assert_eq!(app.selection().active_view(), ViewId::Dashboard);
    }

    #[test]
    fn load_result_makes_view_ready() {
        let mut app = app();
        let ticket = app.selection().current_ticket();
        let _ = app.update(loaded(ticket));
        assert_eq!(app.selection().phase(), Phase::Ready);
        assert_eq!(
            app.page().and_then(|page| page.title.as_deref()),
            Some("Story")
        );
    }

    #[test]
    fn stale_result_is_dropped_and_journaled() {
        let mut app = app();
        let first = app.selection().current_ticket();
        let _ = app.update(Message::Showcase(Intent::SelectView(ViewId::Dashboard)));

        let _ = app.update(failed(first, EmbedError::Timeout));

        assert_eq!(app.selection().phase(), Phase::Loading);
        assert!(app.last_error().is_none());
        assert!(matches!(
            app.activity().latest().map(|event| &event.kind),
            Some(ActivityKind::StaleDropped { .. })
        ));
    }

    #[test]
    fn failure_then_retry_reloads_same_view() {
        let mut app = app();
        let ticket = app.selection().current_ticket();
        let _ = app.update(failed(ticket, EmbedError::HttpStatus(500)));
        assert_eq!(app.selection().phase(), Phase::Error);
        assert_eq!(app.last_error(), Some(&EmbedError::HttpStatus(500)));
        assert_eq!(app.notifications().visible_count(), 1);

        let _ = app.update(Message::Showcase(Intent::Retry));
        assert_eq!(app.selection().phase(), Phase::Loading);
        assert_eq!(app.selection().active_view(), ViewId::Story);
        assert!(app.last_error().is_none());
        assert_ne!(app.selection().current_ticket(), ticket);

        let _ = app.update(loaded(app.selection().current_ticket()));
        assert_eq!(app.notifications().visible_count(), 0);
    }

    #[test]
    fn retry_outside_error_state_does_nothing() {
        let mut app = app();
        let ticket = app.selection().current_ticket();
        let _ = app.update(Message::Showcase(Intent::Retry));
        assert_eq!(app.selection().current_ticket(), ticket);
    }

    #[test]
    fn navbar_selection_closes_menu_and_remounts_hero() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.is_menu_open());

        let _ = app.update(Message::Navbar(navbar::Message::SelectView(
            ViewId::Dashboard,
        )));
        assert!(!app.is_menu_open());
        assert_eq!(app.counters().hero_view(), Some(ViewId::Dashboard));
        assert!(!app.counters().is_mounted(CounterKey::hero(ViewId::Story, 0)));
    }

    #[test]
    fn visible_counter_animates_on_frames() {
        let mut app = app();
        let key = CounterKey::hero(ViewId::Story, 2);
        let _ = app.update(Message::Showcase(Intent::CounterVisible { key, ratio: 0.5 }));

        let start = Instant::now();
        let _ = app.update(Message::Frame(start));
        assert_eq!(app.counters().display(key), "0.0%");
        let _ = app.update(Message::Frame(start + Duration::from_secs(5)));
        assert_eq!(app.counters().display(key), "98.7%");
    }

    #[test]
    fn link_out_records_and_confirms() {
        let mut app = app();
        let _ = app.update(Message::Showcase(Intent::OpenSource(ViewId::Dashboard)));
        assert_eq!(
            app.activity().latest().map(|event| &event.kind),
            Some(&ActivityKind::LinkCopied {
                view: ViewId::Dashboard
            })
        );
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn backdrop_toggle_and_cursor() {
        let mut app = app();
        assert!(app.backdrop().is_playing());
        let _ = app.update(Message::Showcase(Intent::ToggleBackdrop));
        assert!(!app.backdrop().is_playing());

        let _ = app.update(Message::CursorMoved(iced::Point::new(4.0, 2.0)));
        assert!(app.backdrop().cursor().is_some());
        let _ = app.update(Message::CursorLeft);
        assert!(app.backdrop().cursor().is_none());
    }

    #[test]
    fn backdrop_toggle_is_saved_to_settings() {
        let dir = tempfile::tempdir().expect("temp dir");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..flags()
        };

        let (mut app, _) = App::new(flags.clone());
        let _ = app.update(Message::Showcase(Intent::ToggleBackdrop));

        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert!(!saved.showcase.backdrop_animated());

        let (restarted, _) = App::new(flags);
        assert!(!restarted.backdrop().is_playing());
    }

    #[test]
    fn preloaded_config_is_not_written_back() {
        let mut app = app();
        assert!(app.settings_dir.is_none());
        let _ = app.update(Message::Showcase(Intent::ToggleBackdrop));
        assert_eq!(app.activity().problem_count(), 0);
    }

    #[test]
    fn broken_config_file_warns() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("settings.toml"), "[general\nbroken").expect("write");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..flags()
        };

        let (app, _) = App::new(flags);
        assert_eq!(app.notifications().visible_count(), 1);
        assert_eq!(app.activity().problem_count(), 1);
        assert!(app.activity().iter().any(|event| matches!(
            &event.kind,
            ActivityKind::SettingsLocated { source, .. } if source == "override"
        )));
    }
}
