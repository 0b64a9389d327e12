//! Checkbox Component

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::MediColors;

/// A labeled checkbox. Clicking anywhere on the row (box or label) toggles
/// it and hands the new value to the change handler.
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    fn render_box(&self) -> impl IntoElement {
        let (fill, border) = if self.checked {
            (MediColors::accent(), MediColors::accent())
        } else {
            (MediColors::input_bg(), MediColors::input_border())
        };

        div()
            .size(px(18.0))
            .rounded_sm()
            .border_1()
            .border_color(border)
            .bg(fill)
            .flex()
            .items_center()
            .justify_center()
            .text_color(MediColors::text_light())
            .text_size(px(12.0))
            .when(self.checked, |d| d.child("✓"))
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let next = !self.checked;

        div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .child(self.render_box())
            .children(self.label.map(|label| {
                div()
                    .text_sm()
                    .text_color(MediColors::text_primary())
                    .child(label)
            }))
            .when_some(self.on_change, |d, handler| {
                d.on_click(move |_event, window, cx| handler(next, window, cx))
            })
    }
}
