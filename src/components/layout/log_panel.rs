//! Log Panel Component
//!
//! Collapsible activity log strip docked under the content area. Collapsed
//! it shows just the header bar; expanded it shows the most recent entries,
//! newest first.

use gpui::{
    div, prelude::*, px, AnyElement, Context, Div, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, Stateful, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::state::log_state::LogEntry;
use crate::theme::colors::MediColors;
use crate::utils::format::format_time;

const HEADER_HEIGHT: f32 = 32.0;
const EXPANDED_HEIGHT: f32 = 150.0;
const VISIBLE_ENTRIES: usize = 50;

pub struct LogPanel {
    entities: AppEntities,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn header_button(
        id: &'static str,
        label: impl Into<SharedString>,
        on_click: impl Fn(&mut gpui::App) + 'static,
    ) -> Stateful<Div> {
        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_color(MediColors::text_muted())
            .text_size(px(11.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
            .on_click(move |_event, _window, cx| on_click(cx))
            .child(label.into())
    }

    fn render_header(&self, expanded: bool, count: usize, cx: &Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let clear_target = self.entities.logs.clone();
        let toggle_target = self.entities.logs.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(gpui::rgba(0xffffff22))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_color(MediColors::text_light())
                            .text_size(px(13.0))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .child(t(locale, "log-title")),
                    )
                    .child(
                        div()
                            .text_color(MediColors::text_muted())
                            .text_size(px(11.0))
                            .child(format!("({count})")),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Self::header_button(
                        "clear-logs",
                        t(locale, "log-clear"),
                        move |cx| {
                            clear_target.update(cx, |logs, cx| {
                                logs.clear();
                                cx.notify();
                            });
                        },
                    ))
                    .child(Self::header_button(
                        "toggle-logs",
                        if expanded { "▼" } else { "▲" },
                        move |cx| {
                            toggle_target.update(cx, |logs, cx| {
                                logs.toggle_expanded();
                                cx.notify();
                            });
                        },
                    )),
            )
    }

    fn render_entry(entry: &LogEntry) -> AnyElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(MediColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(70.0))
                    .child(format_time(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(entry.level.color())
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(MediColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
            .into_any_element()
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let logs = self.entities.logs.read(cx);
        let expanded = logs.expanded;
        let count = logs.len();

        let recent: Vec<LogEntry> = if expanded {
            logs.entries()
                .iter()
                .rev()
                .take(VISIBLE_ENTRIES)
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        div()
            .h(px(if expanded {
                EXPANDED_HEIGHT
            } else {
                HEADER_HEIGHT
            }))
            .w_full()
            .bg(MediColors::log_panel_bg())
            .flex()
            .flex_col()
            .child(self.render_header(expanded, count, cx))
            .when(expanded, |panel| {
                panel.child(
                    div()
                        .id("log-entries")
                        .flex_1()
                        .overflow_y_scroll()
                        .px_4()
                        .py_1()
                        .children(recent.iter().map(Self::render_entry)),
                )
            })
    }
}
