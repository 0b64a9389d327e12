//! Medicines Page
//!
//! Catalog table with search, server-side sort and pagination, and the
//! editor, details, and image-search modals.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable, Pagination, SortDirection};
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::medicine::Medicine;
use crate::domain::query::SortOrder;
use crate::features::medicines::controller::MedicinesController;
use crate::features::medicines::details_modal::MedicineDetailsModal;
use crate::features::medicines::editor_modal::MedicineEditorModal;
use crate::features::medicines::image_search_modal::ImageSearchModal;
use crate::i18n::{t, Locale};
use crate::theme::colors::MediColors;
use crate::utils::format::{format_number, truncate};

/// Medicines page component
pub struct MedicinesPage {
    entities: AppEntities,
    controller: Rc<MedicinesController>,
    search_input: Entity<TextInput>,
    table: Entity<DataTable<Medicine>>,
    editor: Option<Entity<MedicineEditorModal>>,
    details: Option<Entity<MedicineDetailsModal>>,
    search_modal: Option<Entity<ImageSearchModal>>,
}

impl MedicinesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = Rc::new(MedicinesController::new(entities.clone()));
        let locale = entities.i18n.read(cx).locale;

        let search_input = text_input(
            "med-search",
            entities.medicines.read(cx).filter.clone(),
            t(locale, "med-search-placeholder"),
            cx,
        );
        search_input.update(cx, {
            let controller = controller.clone();
            move |input, _| {
                input.on_change(move |value, _window, cx| {
                    controller.set_filter(value.to_string(), cx);
                });
            }
        });

        let table = cx.new(|cx| {
            let mut table = DataTable::new(cx);
            table.set_columns(Self::build_columns(locale, &entities));
            table.on_sort({
                let controller = controller.clone();
                move |column, cx| controller.toggle_sort(column, cx)
            });
            table.on_row_click({
                let controller = controller.clone();
                move |row: &Medicine, cx| controller.open_details(row.clone(), cx)
            });
            table
        });

        // Keep the table in step with the catalog state
        cx.observe(&entities.medicines, |this, _, cx| {
            this.sync_table(cx);
            cx.notify();
        })
        .detach();

        // Language switch relabels columns and placeholders
        cx.observe(&entities.i18n, |this, _, cx| {
            let locale = this.entities.i18n.read(cx).locale;
            let entities = this.entities.clone();
            this.table.update(cx, |table, cx| {
                table.set_columns(Self::build_columns(locale, &entities));
                cx.notify();
            });
            this.search_input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "med-search-placeholder"));
                cx.notify();
            });
            this.sync_table(cx);
            cx.notify();
        })
        .detach();

        controller.refresh(cx);

        let page = Self {
            entities,
            controller,
            search_input,
            table,
            editor: None,
            details: None,
            search_modal: None,
        };
        page.sync_table(cx);
        page
    }

    /// Re-fetch the current page
    pub fn refresh(&self, cx: &mut Context<Self>) {
        self.controller.refresh(cx);
    }

    fn build_columns(locale: Locale, entities: &AppEntities) -> Vec<Column<Medicine>> {
        let name_col = Column::new("name", t(locale, "col-name"), move |m: &Medicine| {
            div()
                .font_weight(gpui::FontWeight::MEDIUM)
                .child(m.display_name(locale))
                .into_any_element()
        })
        .min_width(140.0)
        .sortable();

        let brand_col = Column::new("brand", t(locale, "col-brand"), move |m: &Medicine| {
            let brand = m.display_brand(locale);
            div()
                .child(if brand.is_empty() { "-".to_string() } else { brand })
                .into_any_element()
        })
        .min_width(100.0)
        .sortable();

        let origin_col = Column::new("origin", t(locale, "col-origin"), move |m: &Medicine| {
            let origin = m.display_origin(locale);
            div()
                .child(if origin.is_empty() { "-".to_string() } else { origin })
                .into_any_element()
        })
        .min_width(100.0)
        .sortable();

        let details_col = Column::new("details", t(locale, "col-details"), move |m: &Medicine| {
            div()
                .text_color(MediColors::text_secondary())
                .child(truncate(&m.display_details(locale), 60))
                .into_any_element()
        })
        .min_width(160.0);

        let edit_label = t(locale, "action-edit");
        let delete_label = t(locale, "action-delete");
        let actions_entities = entities.clone();
        let actions_col = Column::new("actions", t(locale, "col-actions"), move |m: &Medicine| {
            let edit_row = m.clone();
            let delete_row = m.clone();
            let edit_entities = actions_entities.clone();
            let delete_entities = actions_entities.clone();

            div()
                .flex()
                .justify_end()
                .gap_2()
                .child(
                    div()
                        .id(SharedString::from(format!("med-edit-{}", m.id)))
                        .px_2()
                        .py_1()
                        .rounded_sm()
                        .text_size(px(12.0))
                        .text_color(MediColors::accent())
                        .cursor_pointer()
                        .hover(|s| s.bg(MediColors::accent_soft()))
                        .on_click(move |_event, _window, cx| {
                            cx.stop_propagation();
                            edit_entities.medicines.update(cx, |medicines, cx| {
                                medicines.open_edit(&edit_row);
                                cx.notify();
                            });
                        })
                        .child(edit_label.clone()),
                )
                .child(
                    div()
                        .id(SharedString::from(format!("med-delete-{}", m.id)))
                        .px_2()
                        .py_1()
                        .rounded_sm()
                        .text_size(px(12.0))
                        .text_color(MediColors::danger())
                        .cursor_pointer()
                        .hover(|s| s.bg(gpui::rgba(0xfee2e2ff)))
                        .on_click(move |_event, _window, cx| {
                            cx.stop_propagation();
                            delete_entities.medicines.update(cx, |medicines, cx| {
                                medicines.request_delete(delete_row.clone());
                                cx.notify();
                            });
                        })
                        .child(delete_label.clone()),
                )
                .into_any_element()
        })
        .width(150.0);

        vec![name_col, brand_col, origin_col, details_col, actions_col]
    }

    fn sync_table(&self, cx: &mut Context<Self>) {
        let locale = self.entities.i18n.read(cx).locale;
        let (rows, loading, sort) = {
            let state = self.entities.medicines.read(cx);
            let rows: Vec<Medicine> = state.filtered().into_iter().cloned().collect();
            let sort = state.sort_by.clone().map(|column| {
                let direction = match state.sort_order.unwrap_or(SortOrder::Asc) {
                    SortOrder::Asc => SortDirection::Ascending,
                    SortOrder::Desc => SortDirection::Descending,
                };
                (SharedString::from(column), direction)
            });
            (rows, state.loading, sort)
        };

        self.table.update(cx, |table, cx| {
            table.set_rows(rows);
            table.set_loading(loading);
            table.set_sort(sort);
            table.set_empty_message(t(locale, "med-none"));
            table.set_loading_message(t(locale, "table-loading"));
            cx.notify();
        });
    }

    fn render_confirm_delete(&self, locale: Locale, medicine: &Medicine, cx: &mut Context<Self>) -> impl IntoElement {
        let entities = self.entities.clone();
        let close_entities = self.entities.clone();
        let controller = self.controller.clone();
        let row = medicine.clone();

        Modal::new(t(locale, "med-delete-confirm"))
            .on_close(move |cx| {
                close_entities.medicines.update(cx, |medicines, cx| {
                    medicines.cancel_delete();
                    cx.notify();
                });
            })
            .child(
                div()
                    .text_sm()
                    .text_color(MediColors::text_secondary())
                    .child(medicine.display_name(locale)),
            )
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .child(
                        Button::secondary("confirm-cancel", t(locale, "action-cancel")).on_click(
                            move |_event: &ClickEvent, _window, cx| {
                                entities.medicines.update(cx, |medicines, cx| {
                                    medicines.cancel_delete();
                                    cx.notify();
                                });
                            },
                        ),
                    )
                    .child(
                        Button::danger("confirm-delete", t(locale, "action-delete")).on_click(
                            cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                                controller.delete(&row, cx);
                            }),
                        ),
                    ),
            )
    }
}

impl Render for MedicinesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (total, page, total_pages, editor_open, details_open, search_open, confirm_delete) = {
            let state = self.entities.medicines.read(cx);
            (
                state.total,
                state.page,
                state.total_pages,
                state.editor_open,
                state.details.is_some(),
                state.search_open,
                state.confirm_delete.clone(),
            )
        };

        // Modals live only while their state says they are open
        if editor_open {
            if self.editor.is_none() {
                let entities = self.entities.clone();
                let controller = self.controller.clone();
                self.editor =
                    Some(cx.new(|cx| MedicineEditorModal::new(entities, controller, cx)));
            }
        } else {
            self.editor = None;
        }

        if details_open {
            if self.details.is_none() {
                let entities = self.entities.clone();
                let controller = self.controller.clone();
                self.details =
                    Some(cx.new(|cx| MedicineDetailsModal::new(entities, controller, cx)));
            }
        } else {
            self.details = None;
        }

        if search_open {
            if self.search_modal.is_none() {
                let entities = self.entities.clone();
                let controller = self.controller.clone();
                self.search_modal =
                    Some(cx.new(|cx| ImageSearchModal::new(entities, controller, cx)));
            }
        } else {
            self.search_modal = None;
        }

        let controller = self.controller.clone();

        let mut content = div()
            .size_full()
            .flex()
            .flex_col()
            .gap_4()
            .p_6()
            // Toolbar
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(div().w(px(280.0)).child(self.search_input.clone()))
                    .child(
                        div()
                            .text_sm()
                            .text_color(MediColors::text_secondary())
                            .child(format!(
                                "{}: {}",
                                t(locale, "med-total"),
                                format_number(total as i64)
                            )),
                    )
                    .child(div().flex_1())
                    .child(
                        Button::secondary("open-image-search", t(locale, "med-image-search"))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.entities.medicines.update(cx, |medicines, cx| {
                                    medicines.open_search();
                                    cx.notify();
                                });
                            })),
                    )
                    .child(
                        Button::primary("add-medicine", t(locale, "med-add")).on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.entities.medicines.update(cx, |medicines, cx| {
                                    medicines.open_create();
                                    cx.notify();
                                });
                            }),
                        ),
                    ),
            )
            // Table
            .child(div().flex_1().min_h(px(0.0)).child(self.table.clone()))
            // Pagination
            .child(
                Pagination::new(page, total_pages, total)
                    .items_label(t(locale, "med-title"))
                    .on_page_change(move |page, cx| controller.set_page(page, cx)),
            );

        // Overlays
        if let Some(editor) = &self.editor {
            content = content.child(editor.clone());
        }
        if let Some(details) = &self.details {
            content = content.child(details.clone());
        }
        if let Some(search) = &self.search_modal {
            content = content.child(search.clone());
        }
        if let Some(medicine) = confirm_delete {
            content = content.child(self.render_confirm_delete(locale, &medicine, cx));
        }

        content
    }
}
