//! Modal Component
//!
//! Centered dialog over a dimmed backdrop. The body scrolls when the
//! content outgrows the dialog; editor modals use the wide layout.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Div, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::MediColors;

#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<gpui::AnyElement>,
    on_close: Option<Box<dyn Fn(&mut App) + 'static>>,
    wide: bool,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            on_close: None,
            wide: false,
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Close handler, wired to both the × button and nothing else. The
    /// backdrop deliberately does not close so a stray click cannot drop
    /// form input.
    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Two-column form layout.
    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    fn header(title: SharedString, on_close: Option<Box<dyn Fn(&mut App) + 'static>>) -> Div {
        let mut header = div()
            .px_6()
            .py_4()
            .border_b_1()
            .border_color(MediColors::border())
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(16.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(MediColors::text_primary())
                    .child(title),
            );

        if let Some(handler) = on_close {
            header = header.child(
                div()
                    .id("modal-close")
                    .size(px(24.0))
                    .rounded_sm()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(MediColors::text_muted())
                    .text_size(px(16.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(MediColors::table_row_hover()))
                    .on_click(move |_event: &ClickEvent, _window, cx| handler(cx))
                    .child("×"),
            );
        }

        header
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let max_width = if self.wide { px(860.0) } else { px(600.0) };

        div()
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x00000088))
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .bg(MediColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(400.0))
                    .max_w(max_width)
                    .max_h(px(760.0))
                    .flex()
                    .flex_col()
                    .child(Self::header(self.title, self.on_close))
                    .child(
                        div()
                            .id("modal-body")
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .overflow_y_scroll()
                            .children(self.children),
                    ),
            )
    }
}
