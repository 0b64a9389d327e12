//! StatCard Component
//!
//! Dashboard summary card with a tinted accent bar and a large counter.

use gpui::{div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window};

use crate::theme::colors::MediColors;
use crate::theme::typography::Typography;

/// StatCard component
#[derive(IntoElement)]
pub struct StatCard {
    label: SharedString,
    value: SharedString,
    tint: Rgba,
    loading: bool,
}

impl StatCard {
    /// Create a new stat card
    pub fn new(label: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            tint: MediColors::stat_blue(),
            loading: false,
        }
    }

    /// Set the accent tint
    pub fn tint(mut self, tint: Rgba) -> Self {
        self.tint = tint;
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl RenderOnce for StatCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let value: SharedString = if self.loading {
            "...".into()
        } else {
            self.value
        };

        div()
            .flex_1()
            .flex()
            .items_center()
            .gap_4()
            .p_6()
            .bg(MediColors::content_bg())
            .border_1()
            .border_color(MediColors::border())
            .rounded_lg()
            // Accent bar
            .child(div().w(px(4.0)).h(px(48.0)).rounded_full().bg(self.tint))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(MediColors::text_secondary())
                            .child(self.label),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_3XL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(MediColors::text_primary())
                            .child(value),
                    ),
            )
    }
}
