//! Image Search Modal
//!
//! Search the catalog with a local photo. The typed path is validated
//! before the upload goes out; matches land in the shared state.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, Entity, FontWeight, InteractiveElement,
    IntoElement, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::badge::{Badge, BadgeKind};
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::medicine::Medicine;
use crate::features::medicines::controller::MedicinesController;
use crate::i18n::{t, t_count, Locale};
use crate::theme::colors::MediColors;

/// Image search modal
pub struct ImageSearchModal {
    entities: AppEntities,
    controller: Rc<MedicinesController>,
    path_input: Entity<TextInput>,
    error: Option<String>,
}

impl ImageSearchModal {
    pub fn new(
        entities: AppEntities,
        controller: Rc<MedicinesController>,
        cx: &mut Context<Self>,
    ) -> Self {
        let path_input = text_input(
            "search-image-path",
            entities.medicines.read(cx).search_path.clone(),
            "/path/to/photo.jpg",
            cx,
        );
        path_input.update(cx, {
            let entities = entities.clone();
            let modal = cx.weak_entity();
            move |input, _| {
                input.on_change({
                    let entities = entities.clone();
                    move |value, _window, cx| {
                        let value = value.to_string();
                        entities.medicines.update(cx, move |medicines, _| {
                            medicines.set_search_path(value);
                        });
                    }
                });
                input.on_submit(move |_window, cx| {
                    modal.update(cx, |modal, cx| modal.run(cx)).ok();
                });
            }
        });

        cx.observe(&entities.medicines, |_, _, cx| cx.notify()).detach();
        cx.observe(&entities.i18n, |_, _, cx| cx.notify()).detach();

        Self {
            entities,
            controller,
            path_input,
            error: None,
        }
    }

    fn run(&mut self, cx: &mut Context<Self>) {
        let path = self.entities.medicines.read(cx).search_path.clone();
        match self.controller.search(&path, cx) {
            Err(message) => {
                self.error = Some(message);
                cx.notify();
            }
            Ok(()) => {
                self.error = None;
                cx.notify();
            }
        }
    }

    fn render_match(&self, index: usize, medicine: &Medicine, locale: Locale) -> AnyElement {
        let controller = self.controller.clone();
        let row = medicine.clone();

        let mut right = div().flex().items_center().gap_2();
        if let Some(percent) = medicine.similarity_percent() {
            right = right.child(Badge::new(format!("{percent}%")).kind(BadgeKind::Green));
        }
        if let Some(confidence) = &medicine.confidence {
            right = right.child(Badge::new(confidence.clone()));
        }

        div()
            .id(("match", index))
            .flex()
            .items_center()
            .justify_between()
            .px_3()
            .py_2()
            .rounded_md()
            .border_1()
            .border_color(MediColors::border())
            .cursor_pointer()
            .hover(|s| s.bg(MediColors::table_row_hover()))
            .on_click(move |_event, _window, cx| {
                controller.open_details(row.clone(), cx);
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(MediColors::text_primary())
                            .child(medicine.display_name(locale)),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(MediColors::text_muted())
                            .child(medicine.display_brand(locale)),
                    ),
            )
            .child(right)
            .into_any_element()
    }
}

impl Render for ImageSearchModal {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (searching, search_done, search_failed, matches) = {
            let state = self.entities.medicines.read(cx);
            (
                state.searching,
                state.search_done,
                state.search_failed,
                state.search_matches.clone(),
            )
        };

        let close_entities = self.entities.clone();
        let mut modal = Modal::new(t(locale, "search-title")).on_close(move |cx| {
            close_entities.medicines.update(cx, |medicines, cx| {
                medicines.close_search();
                cx.notify();
            });
        });

        modal = modal.child(
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_size(px(13.0))
                        .text_color(MediColors::text_secondary())
                        .child(t(locale, "search-file")),
                )
                .child(self.path_input.clone()),
        );

        if let Some(error) = &self.error {
            modal = modal.child(
                div()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .bg(gpui::rgba(0xfee2e2ff))
                    .text_size(px(13.0))
                    .text_color(MediColors::danger())
                    .child(error.clone()),
            );
        }

        let label = if searching {
            t(locale, "search-searching")
        } else {
            t(locale, "search-run")
        };
        modal = modal.child(
            div().flex().justify_end().child(
                Button::primary("run-search", label)
                    .loading(searching)
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.run(cx);
                    })),
            ),
        );

        // Photo tips, shown until a search lands
        if !search_done {
            modal = modal.child(
                div()
                    .p_3()
                    .rounded_md()
                    .bg(MediColors::accent_soft())
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(12.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(MediColors::accent())
                            .child(t(locale, "search-tips-title")),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(MediColors::text_secondary())
                            .child(t(locale, "search-tips")),
                    ),
            );
        }

        if search_done && !search_failed {
            if matches.is_empty() {
                modal = modal.child(
                    div()
                        .py_6()
                        .flex()
                        .justify_center()
                        .text_sm()
                        .text_color(MediColors::text_muted())
                        .child(t(locale, "search-no-match")),
                );
            } else {
                let mut results = div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(MediColors::text_primary())
                            .child(SharedString::from(format!(
                                "{} · {}",
                                t(locale, "search-results"),
                                t_count(locale, "search-found", matches.len() as i64),
                            ))),
                    );
                for (index, medicine) in matches.iter().enumerate() {
                    results = results.child(self.render_match(index, medicine, locale));
                }
                modal = modal.child(results);
            }
        }

        modal
    }
}
