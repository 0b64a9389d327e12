//! Pagination Component

use std::rc::Rc;

use gpui::{
    div, prelude::*, App, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::MediColors;

/// Footer bar under a data table: total count on the left, prev / "page n
/// of m" / next on the right. Pages are 1-based; arrows past either end
/// render disabled.
#[derive(IntoElement)]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
    total_items: u64,
    items_label: SharedString,
    on_page_change: Option<Rc<dyn Fn(u32, &mut App)>>,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32, total_items: u64) -> Self {
        Self {
            current_page: current_page.max(1),
            total_pages: total_pages.max(1),
            total_items,
            items_label: "items".into(),
            on_page_change: None,
        }
    }

    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    pub fn on_page_change(mut self, handler: impl Fn(u32, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn arrow(
        id: &'static str,
        glyph: &'static str,
        target: Option<u32>,
        handler: Option<Rc<dyn Fn(u32, &mut App)>>,
    ) -> impl IntoElement {
        let enabled = target.is_some();

        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_sm()
            .text_color(if enabled {
                MediColors::text_primary()
            } else {
                MediColors::text_muted()
            })
            .child(glyph)
            .when_some(target.zip(handler), |el, (page, handler)| {
                el.cursor_pointer()
                    .hover(|s| s.bg(MediColors::table_row_hover()))
                    .on_click(move |_event, _window, cx| handler(page, cx))
            })
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let prev = (current > 1).then(|| current - 1);
        let next = (current < self.total_pages).then(|| current + 1);

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(MediColors::border())
            .child(
                div()
                    .text_sm()
                    .text_color(MediColors::text_secondary())
                    .child(format!("{} {}", self.total_items, self.items_label)),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Self::arrow(
                        "prev-page",
                        "←",
                        prev,
                        self.on_page_change.clone(),
                    ))
                    .child(
                        div()
                            .text_sm()
                            .text_color(MediColors::text_primary())
                            .child(format!("{} / {}", current, self.total_pages)),
                    )
                    .child(Self::arrow("next-page", "→", next, self.on_page_change)),
            )
    }
}
