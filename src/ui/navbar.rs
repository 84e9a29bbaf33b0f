// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the view tabs.
//!
//! Wide windows show one tab per registered view next to the "Open in
//! Tableau" link. Below the compact breakpoint the tabs collapse into a
//! hamburger button that toggles a dropdown menu.

use crate::config::COMPACT_BREAKPOINT;
use crate::i18n::fluent::I18n;
use crate::showcase::{registry, ViewId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active_view: ViewId,
    pub menu_open: bool,
    pub window_width: f32,
}

impl ViewContext<'_> {
    fn is_compact(&self) -> bool {
        is_compact(self.window_width)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    SelectView(ViewId),
    OpenSource(ViewId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SelectView(ViewId),
    OpenSource(ViewId),
}

/// Whether a window of `width` uses the hamburger menu.
#[must_use]
pub fn is_compact(width: f32) -> bool {
    width < COMPACT_BREAKPOINT
}

/// Process a navbar message and return the corresponding event.
///
/// Picking a view other than `active_view` closes the menu; re-picking the
/// active view leaves it open.
pub fn update(message: Message, menu_open: &mut bool, active_view: ViewId) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::SelectView(view) => {
            if view != active_view {
                *menu_open = false;
            }
            Event::SelectView(view)
        }
        Message::OpenSource(view) => Event::OpenSource(view),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.menu_open && ctx.is_compact() {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Column::new()
        .push(Text::new(ctx.i18n.tr("app-name")).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.i18n.tr("navbar-tagline"))
                .size(typography::CAPTION)
                .style(text::secondary),
        );

    let logo = Container::new(icons::sized(icons::trend_up(), sizing::ICON_MD))
        .padding(spacing::XS)
        .style(styles::container::accent_pill(
            registry::first().accent.0,
            registry::first().accent.1,
        ));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(logo)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.is_compact() {
        let glyph = if ctx.menu_open {
            icons::cross()
        } else {
            icons::hamburger()
        };
        row = row.push(
            button(icons::sized(glyph, sizing::ICON_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::ghost),
        );
    } else {
        for view in ViewId::ALL {
            row = row.push(build_tab(ctx, view));
        }
        row = row.push(build_source_link(ctx));
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn build_tab<'a>(ctx: &ViewContext<'a>, view: ViewId) -> Element<'a, Message> {
    let descriptor = view.descriptor();
    let active = view == ctx.active_view;
    let label = ctx.i18n.tr_or(&descriptor.title_key(), descriptor.title);

    button(Text::new(label).size(typography::BODY))
        .on_press(Message::SelectView(view))
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::tab(active))
        .into()
}

fn build_source_link<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::arrow_out(), sizing::ICON_SM))
        .push(Text::new(ctx.i18n.tr("navbar-open-source")).size(typography::BODY));

    button(content)
        .on_press(Message::OpenSource(ctx.active_view))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu = Column::new().spacing(spacing::XXS);

    for view in ViewId::ALL {
        let descriptor = view.descriptor();
        let label = ctx.i18n.tr_or(&descriptor.title_key(), descriptor.title);
        menu = menu.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::SelectView(view))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::menu_item(view == ctx.active_view)),
        );
    }
    menu = menu.push(
        button(
            Row::new()
                .spacing(spacing::XXS)
                .push(icons::sized(icons::arrow_out(), sizing::ICON_SM))
                .push(Text::new(ctx.i18n.tr("navbar-open-source")).size(typography::BODY)),
        )
        .on_press(Message::OpenSource(ctx.active_view))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::menu_item(false)),
    );

    Container::new(
        Container::new(menu)
            .width(Length::Fixed(sizing::DROPDOWN_WIDTH))
            .padding(spacing::XS)
            .style(styles::container::dropdown),
    )
    .width(Length::Fill)
    .padding([spacing::XXS, spacing::LG])
    .align_x(Horizontal::Right)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_state() {
        let mut menu_open = false;
        assert_eq!(update(Message::ToggleMenu, &mut menu_open, ViewId::Story), Event::None);
        assert!(menu_open);
        update(Message::ToggleMenu, &mut menu_open, ViewId::Story);
        assert!(!menu_open);
    }

    #[test]
    fn selecting_another_view_closes_menu() {
        let mut menu_open = true;
        let event = update(
            Message::SelectView(ViewId::Dashboard),
            &mut menu_open,
            ViewId::Story,
        );
        assert_eq!(event, Event::SelectView(ViewId::Dashboard));
        assert!(!menu_open);
    }

    #[test]
    fn reselecting_active_view_keeps_menu_open() {
        let mut menu_open = true;
        let event = update(Message::SelectView(ViewId::Story), &mut menu_open, ViewId::Story);
        assert_eq!(event, Event::SelectView(ViewId::Story));
        assert!(menu_open);
    }

    #[test]
    fn open_source_is_forwarded_without_touching_menu() {
        let mut menu_open = true;
        let event = update(
            Message::OpenSource(ViewId::Dashboard),
            &mut menu_open,
            ViewId::Story,
        );
        assert_eq!(event, Event::OpenSource(ViewId::Dashboard));
        assert!(menu_open);
    }

    #[test]
    fn compact_bar_renders_with_open_menu() {
        let i18n = I18n::default();
        for menu_open in [false, true] {
            let _element = view(ViewContext {
                i18n: &i18n,
                active_view: ViewId::Dashboard,
                menu_open,
                window_width: COMPACT_BREAKPOINT / 2.0,
            });
        }
    }

    #[test]
    fn wide_bar_renders_tabs() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            active_view: ViewId::Story,
            menu_open: false,
            window_width: COMPACT_BREAKPOINT * 2.0,
        });
    }

    #[test]
    fn compact_below_breakpoint() {
        assert!(is_compact(COMPACT_BREAKPOINT - 1.0));
        assert!(!is_compact(COMPACT_BREAKPOINT));
    }
}
