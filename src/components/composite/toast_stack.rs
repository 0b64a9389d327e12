//! ToastStack Component
//!
//! Overlay stack for transient notifications, newest at the bottom.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};
use uuid::Uuid;

use crate::state::toast_state::{Toast, ToastKind};
use crate::theme::colors::MediColors;

/// ToastStack component
#[derive(IntoElement)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    on_dismiss: Option<Rc<dyn Fn(Uuid, &mut App)>>,
}

impl ToastStack {
    /// Create a toast stack from the current toasts
    pub fn new(toasts: &[Toast]) -> Self {
        Self {
            toasts: toasts.to_vec(),
            on_dismiss: None,
        }
    }

    /// Set the dismiss handler
    pub fn on_dismiss(mut self, handler: impl Fn(Uuid, &mut App) + 'static) -> Self {
        self.on_dismiss = Some(Rc::new(handler));
        self
    }

    fn render_toast(toast: &Toast, on_dismiss: Option<Rc<dyn Fn(Uuid, &mut App)>>) -> impl IntoElement {
        let glyph = match toast.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        };
        let id = toast.id;

        let mut close = div()
            .id(SharedString::from(format!("toast-{}", id)))
            .px_1()
            .cursor_pointer()
            .text_color(MediColors::text_light())
            .child("×");

        if let Some(handler) = on_dismiss {
            close = close.on_click(move |_event, _window, cx| {
                handler(id, cx);
            });
        }

        div()
            .min_w(px(280.0))
            .max_w(px(420.0))
            .flex()
            .items_center()
            .gap_3()
            .px_4()
            .py_3()
            .rounded_md()
            .bg(toast.kind.color())
            .shadow_lg()
            .child(
                div()
                    .text_color(MediColors::text_light())
                    .font_weight(gpui::FontWeight::BOLD)
                    .child(glyph),
            )
            .child(
                div()
                    .flex_1()
                    .text_sm()
                    .text_color(MediColors::text_light())
                    .child(toast.message.clone()),
            )
            .child(close)
    }
}

impl RenderOnce for ToastStack {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_dismiss = self.on_dismiss;

        div()
            .absolute()
            .bottom(px(24.0))
            .right(px(24.0))
            .flex()
            .flex_col()
            .gap_2()
            .children(
                self.toasts
                    .iter()
                    .map(|toast| Self::render_toast(toast, on_dismiss.clone())),
            )
    }
}
