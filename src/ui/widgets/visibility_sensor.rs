// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports when its content scrolls into view.
//!
//! The sensor holds no state of its own. The owner decides whether it is
//! still interested (`armed`) and the sensor publishes the intersection ratio
//! each time it observes the content at or above the threshold.

use crate::config::VISIBILITY_THRESHOLD;
use crate::showcase::visibility::intersection_ratio;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{window, Element, Event, Length, Rectangle, Size};

pub struct VisibilitySensor<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    armed: bool,
    threshold: f32,
    on_visible: Option<Box<dyn Fn(f32) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> VisibilitySensor<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            armed: false,
            threshold: VISIBILITY_THRESHOLD,
            on_visible: None,
        }
    }

    /// Publishes `on_visible(ratio)` while armed and visible enough.
    #[must_use]
    pub fn on_visible(mut self, on_visible: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_visible = Some(Box::new(on_visible));
        self
    }

    #[must_use]
    pub fn armed(mut self, armed: bool) -> Self {
        self.armed = armed;
        self
    }

    #[must_use]
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for VisibilitySensor<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        if !is_observation_point(event) {
            return;
        }
        if let Some(on_visible) = &self.on_visible {
            let ratio = intersection_ratio(layout.bounds(), *viewport);
            if should_publish(self.armed, ratio, self.threshold) {
                shell.publish(on_visible(ratio));
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<VisibilitySensor<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(sensor: VisibilitySensor<'a, Message, Theme, Renderer>) -> Self {
        Self::new(sensor)
    }
}

/// Wraps `content` in a visibility sensor.
pub fn visibility_sensor<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> VisibilitySensor<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    VisibilitySensor::new(content)
}

/// Events after which the content may have moved relative to the viewport.
fn is_observation_point(event: &Event) -> bool {
    matches!(
        event,
        Event::Window(window::Event::RedrawRequested(_) | window::Event::Resized(_))
            | Event::Mouse(mouse::Event::WheelScrolled { .. })
    )
}

fn should_publish(armed: bool, ratio: f32, threshold: f32) -> bool {
    armed && ratio > 0.0 && ratio >= threshold
}
