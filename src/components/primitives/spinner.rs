//! Spinner Component
//!
//! Inline busy indicator for loading sections.

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::colors::MediColors;

/// A small loading indicator with a label
#[derive(IntoElement)]
pub struct Spinner {
    label: SharedString,
}

impl Spinner {
    /// Create a new spinner
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl RenderOnce for Spinner {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .py_8()
            .child(
                div()
                    .text_color(MediColors::accent())
                    .text_size(px(16.0))
                    .child("\u{27f3}"),
            )
            .child(
                div()
                    .text_color(MediColors::text_muted())
                    .text_sm()
                    .child(self.label),
            )
    }
}
