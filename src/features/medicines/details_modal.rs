//! Medicine Details Modal
//!
//! Read-only view of one record with an image carousel and per-image
//! delete. Content tracks the shared state so an image delete refreshes
//! in place.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, FontWeight, InteractiveElement,
    IntoElement, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::badge::{Badge, BadgeKind};
use crate::components::primitives::button::Button;
use crate::domain::medicine::Medicine;
use crate::features::medicines::controller::MedicinesController;
use crate::i18n::{t, Locale};
use crate::state::medicines_state::MedicinesState;
use crate::theme::colors::MediColors;
use crate::utils::format::format_datetime;

/// Medicine details modal
pub struct MedicineDetailsModal {
    entities: AppEntities,
    controller: Rc<MedicinesController>,
    confirm_image_delete: bool,
}

impl MedicineDetailsModal {
    pub fn new(
        entities: AppEntities,
        controller: Rc<MedicinesController>,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.observe(&entities.medicines, |_, _, cx| cx.notify()).detach();
        cx.observe(&entities.i18n, |_, _, cx| cx.notify()).detach();
        Self {
            entities,
            controller,
            confirm_image_delete: false,
        }
    }

    fn nav_button(
        &self,
        id: &'static str,
        glyph: &'static str,
        step: fn(&mut MedicinesState),
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .id(id)
            .size(px(28.0))
            .rounded_md()
            .flex()
            .items_center()
            .justify_center()
            .text_color(MediColors::text_secondary())
            .cursor_pointer()
            .hover(|s| s.bg(MediColors::table_row_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.entities.medicines.update(cx, |medicines, cx| {
                    step(medicines);
                    cx.notify();
                });
            }))
            .child(glyph)
    }

    fn render_carousel(
        &self,
        locale: Locale,
        medicine: &Medicine,
        image_index: usize,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        if medicine.images.is_empty() {
            return div()
                .h(px(120.0))
                .rounded_md()
                .bg(MediColors::sidebar_bg())
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(MediColors::text_muted())
                .child(t(locale, "med-no-images"))
                .into_any_element();
        }

        let count = medicine.images.len();
        let index = image_index.min(count - 1);
        let current = medicine.images[index].clone();

        let mut footer = div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(MediColors::text_muted())
                    .child(format!("{} {} / {}", t(locale, "med-image"), index + 1, count)),
            );

        if self.confirm_image_delete {
            let controller = self.controller.clone();
            let id = medicine.id.clone();
            let image_name = current.clone();
            footer = footer.child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(MediColors::danger())
                            .child(t(locale, "med-image-delete-confirm")),
                    )
                    .child(
                        div()
                            .id("image-delete-cancel")
                            .px_2()
                            .py_1()
                            .rounded_sm()
                            .text_size(px(12.0))
                            .text_color(MediColors::text_secondary())
                            .cursor_pointer()
                            .hover(|s| s.bg(MediColors::table_row_hover()))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.confirm_image_delete = false;
                                cx.notify();
                            }))
                            .child(t(locale, "action-cancel")),
                    )
                    .child(
                        div()
                            .id("image-delete-confirm")
                            .px_2()
                            .py_1()
                            .rounded_sm()
                            .text_size(px(12.0))
                            .text_color(MediColors::danger())
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xfee2e2ff)))
                            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                                this.confirm_image_delete = false;
                                controller.delete_image(id.clone(), image_name.clone(), cx);
                            }))
                            .child(t(locale, "action-delete")),
                    ),
            );
        } else {
            footer = footer.child(
                div()
                    .id("image-delete")
                    .px_2()
                    .py_1()
                    .rounded_sm()
                    .text_size(px(12.0))
                    .text_color(MediColors::danger())
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xfee2e2ff)))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.confirm_image_delete = true;
                        cx.notify();
                    }))
                    .child(t(locale, "action-delete")),
            );
        }

        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .when(count > 1, |el| {
                        el.child(self.nav_button("img-prev", "←", |m| m.prev_image(), cx))
                    })
                    .child(
                        // The backend serves files by name; the card shows which
                        // file the carousel points at.
                        div()
                            .flex_1()
                            .h(px(160.0))
                            .rounded_md()
                            .border_1()
                            .border_color(MediColors::border())
                            .bg(MediColors::sidebar_bg())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_sm()
                            .text_color(MediColors::text_secondary())
                            .overflow_hidden()
                            .child(current.clone()),
                    )
                    .when(count > 1, |el| {
                        el.child(self.nav_button("img-next", "→", |m| m.next_image(), cx))
                    }),
            )
            .child(footer)
            .into_any_element()
    }

    fn render_info_item(&self, label: SharedString, value: String) -> AnyElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(MediColors::text_muted())
                    .child(label),
            )
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(MediColors::text_primary())
                    .child(if value.is_empty() { "-".to_string() } else { value }),
            )
            .into_any_element()
    }

    fn render_section(&self, label: SharedString, body: String) -> Option<AnyElement> {
        if body.is_empty() {
            return None;
        }
        Some(
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_size(px(12.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(MediColors::text_muted())
                        .child(label),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(MediColors::text_secondary())
                        .child(body),
                )
                .into_any_element(),
        )
    }
}

impl Render for MedicineDetailsModal {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (medicine, image_index) = {
            let state = self.entities.medicines.read(cx);
            (state.details.clone(), state.image_index)
        };

        // The page drops this entity once the state closes
        let Some(medicine) = medicine else {
            return div().into_any_element();
        };

        let close_entities = self.entities.clone();
        let mut modal = Modal::new(medicine.display_name(locale))
            .wide()
            .on_close(move |cx| {
                close_entities.medicines.update(cx, |medicines, cx| {
                    medicines.close_details();
                    cx.notify();
                });
            });

        // Search matches carry a score and extra hints
        if let Some(percent) = medicine.similarity_percent() {
            let label = medicine
                .confidence
                .clone()
                .unwrap_or_else(|| format!("{} {}%", t(locale, "search-similarity"), percent));
            let mut row = div()
                .flex()
                .items_center()
                .gap_2()
                .child(Badge::new(label).kind(BadgeKind::Green));
            if let Some(match_type) = &medicine.match_type {
                row = row.child(Badge::new(format!(
                    "{}: {}",
                    t(locale, "med-type"),
                    match_type
                )));
            }
            modal = modal.child(row);
        }

        modal = modal.child(self.render_carousel(locale, &medicine, image_index, cx));

        let mut info_rows = div().flex().flex_col().gap_3();
        info_rows = info_rows.child(
            div()
                .flex()
                .gap_4()
                .child(self.render_info_item(
                    t(locale, "med-brand"),
                    medicine.display_brand(locale),
                ))
                .child(self.render_info_item(
                    t(locale, "med-origin"),
                    medicine.display_origin(locale),
                )),
        );
        let added = medicine
            .created_at
            .as_ref()
            .map(format_datetime)
            .unwrap_or_default();
        info_rows = info_rows.child(
            div()
                .flex()
                .gap_4()
                .child(self.render_info_item(t(locale, "med-added"), added))
                .child(self.render_info_item(
                    t(locale, "med-dosage"),
                    medicine.dosage.clone().unwrap_or_default(),
                )),
        );
        modal = modal.child(info_rows);

        let sections = [
            ("med-details", medicine.display_details(locale)),
            ("med-usage", medicine.display_usage(locale)),
            ("med-how-to-use", medicine.display_how_to_use(locale)),
            ("med-side-effects", medicine.display_side_effects(locale)),
        ];
        for (key, body) in sections {
            if let Some(section) = self.render_section(t(locale, key), body) {
                modal = modal.child(section);
            }
        }

        modal = modal.child(
            div().flex().justify_end().pt_2().child(
                Button::secondary("details-close", t(locale, "action-close")).on_click(
                    cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.entities.medicines.update(cx, |medicines, cx| {
                            medicines.close_details();
                            cx.notify();
                        });
                    }),
                ),
            ),
        );

        modal.into_any_element()
    }
}
