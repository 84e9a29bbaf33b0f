// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, back to front: the animated backdrop, the page (navbar above a
//! scrollable body), then the toast overlay.

use super::Message;
use crate::diagnostics::ActivityLog;
use crate::embed::EmbedPage;
use crate::error::EmbedError;
use crate::i18n::fluent::I18n;
use crate::showcase::{CounterBoard, ViewSelection};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{self, Toast};
use crate::ui::widgets::{Backdrop, LoadingClock};
use crate::ui::{embed_panel, hero, navbar, preview_cards, sections, styles, Intent};
use iced::widget::{scrollable, stack, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: &'a ViewSelection,
    pub counters: &'a CounterBoard,
    pub page: Option<&'a EmbedPage>,
    pub last_error: Option<&'a EmbedError>,
    pub menu_open: bool,
    pub window_width: f32,
    pub backdrop: &'a Backdrop,
    pub loading: &'a LoadingClock,
    pub notifications: &'a notifications::Manager,
    pub activity: &'a ActivityLog,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let active_view = ctx.selection.active_view();
    let descriptor = active_view.descriptor();
    let compact = navbar::is_compact(ctx.window_width);

    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        active_view,
        menu_open: ctx.menu_open,
        window_width: ctx.window_width,
    })
    .map(Message::Navbar);

    let hero_view = hero::view(hero::ViewContext {
        i18n: ctx.i18n,
        descriptor,
        counters: ctx.counters,
    });

    let panel = embed_panel::view(embed_panel::ViewContext {
        i18n: ctx.i18n,
        descriptor,
        phase: ctx.selection.phase(),
        page: ctx.page,
        last_error: ctx.last_error,
        loading: ctx.loading,
        backdrop_playing: ctx.backdrop.is_playing(),
    });

    let cards = preview_cards::view(preview_cards::ViewContext {
        i18n: ctx.i18n,
        active_view,
        counters: ctx.counters,
        compact,
    });

    let main = Column::new()
        .spacing(spacing::XXL)
        .padding([0.0, spacing::LG])
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(panel)
        .push(cards)
        .push(sections::features(ctx.i18n, compact));

    let body: Element<'_, Intent> = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(hero_view)
        .push(Container::new(main).center_x(Length::Fill))
        .push(sections::footer(ctx.i18n, ctx.activity))
        .into();

    let page = Column::new()
        .push(navbar_view)
        .push(scrollable(body.map(Message::Showcase)).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Container::new(stack![ctx.backdrop.view(), page, toasts])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
