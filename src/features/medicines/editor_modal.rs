//! Medicine Editor Modal
//!
//! Create/edit form over the shared draft. Inputs are seeded from the draft
//! when the modal opens and write back on every change.

use std::path::PathBuf;
use std::rc::Rc;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::medicine::MedicineDraft;
use crate::features::medicines::controller::MedicinesController;
use crate::i18n::{t, Locale};
use crate::theme::colors::MediColors;

type DraftField = fn(&mut MedicineDraft) -> &mut String;

struct EditorField {
    label_key: &'static str,
    input: Entity<TextInput>,
}

/// Medicine create/edit form
pub struct MedicineEditorModal {
    entities: AppEntities,
    controller: Rc<MedicinesController>,
    fields: Vec<EditorField>,
    paths_input: Entity<TextInput>,
    error: Option<String>,
}

impl MedicineEditorModal {
    pub fn new(
        entities: AppEntities,
        controller: Rc<MedicinesController>,
        cx: &mut Context<Self>,
    ) -> Self {
        let draft = entities.medicines.read(cx).draft.clone();

        // English/Bangla pairs land side by side in the two-column layout
        let specs: [(&'static str, String, DraftField); 14] = [
            ("med-name", draft.name.clone(), |d| &mut d.name),
            ("med-name-bn", draft.name_bn.clone(), |d| &mut d.name_bn),
            ("med-brand", draft.brand.clone(), |d| &mut d.brand),
            ("med-brand-bn", draft.brand_bn.clone(), |d| &mut d.brand_bn),
            ("med-origin", draft.origin.clone(), |d| &mut d.origin),
            ("med-origin-bn", draft.origin_bn.clone(), |d| &mut d.origin_bn),
            ("med-details", draft.details.clone(), |d| &mut d.details),
            ("med-details-bn", draft.details_bn.clone(), |d| &mut d.details_bn),
            ("med-side-effects", draft.side_effects.clone(), |d| {
                &mut d.side_effects
            }),
            ("med-side-effects-bn", draft.side_effects_bn.clone(), |d| {
                &mut d.side_effects_bn
            }),
            ("med-usage", draft.usage.clone(), |d| &mut d.usage),
            ("med-usage-bn", draft.usage_bn.clone(), |d| &mut d.usage_bn),
            ("med-how-to-use", draft.how_to_use.clone(), |d| {
                &mut d.how_to_use
            }),
            ("med-how-to-use-bn", draft.how_to_use_bn.clone(), |d| {
                &mut d.how_to_use_bn
            }),
        ];

        let fields = specs
            .into_iter()
            .map(|(label_key, initial, accessor)| EditorField {
                label_key,
                input: Self::field_input(&entities, label_key, initial, accessor, cx),
            })
            .collect();

        let paths_input = text_input("med-image-paths-input", String::new(), "a.jpg; b.jpg", cx);
        paths_input.update(cx, {
            let entities = entities.clone();
            move |input, _| {
                input.on_change(move |value, _window, cx| {
                    let paths: Vec<PathBuf> = value
                        .split(';')
                        .map(str::trim)
                        .filter(|part| !part.is_empty())
                        .map(PathBuf::from)
                        .collect();
                    entities.medicines.update(cx, |medicines, _| {
                        medicines.draft.image_paths = paths;
                    });
                });
            }
        });

        // Saving flag and relabels come from outside the modal
        cx.observe(&entities.medicines, |_, _, cx| cx.notify()).detach();
        cx.observe(&entities.i18n, |_, _, cx| cx.notify()).detach();

        Self {
            entities,
            controller,
            fields,
            paths_input,
            error: None,
        }
    }

    fn field_input(
        entities: &AppEntities,
        label_key: &'static str,
        initial: String,
        accessor: DraftField,
        cx: &mut Context<Self>,
    ) -> Entity<TextInput> {
        let input = text_input(label_key, initial, "", cx);
        input.update(cx, {
            let entities = entities.clone();
            move |input, _| {
                input.on_change(move |value, _window, cx| {
                    let value = value.to_string();
                    entities.medicines.update(cx, move |medicines, _| {
                        *accessor(&mut medicines.draft) = value;
                    });
                });
            }
        });
        input
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let draft = self.entities.medicines.read(cx).draft.clone();
        match draft.validate() {
            Err(err) => {
                self.error = Some(err.toast_message());
                cx.notify();
            }
            Ok(()) => {
                self.error = None;
                self.controller.save(cx);
            }
        }
    }

    fn render_field(&self, locale: Locale, field: &EditorField) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(MediColors::text_secondary())
                    .child(t(locale, field.label_key)),
            )
            .child(field.input.clone())
    }
}

impl Render for MedicineEditorModal {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (editing, saving) = {
            let state = self.entities.medicines.read(cx);
            (state.editing_id.is_some(), state.saving)
        };

        let title = if editing {
            t(locale, "med-edit-title")
        } else {
            t(locale, "med-add-title")
        };

        let close_entities = self.entities.clone();
        let mut modal = Modal::new(title).wide().on_close(move |cx| {
            close_entities.medicines.update(cx, |medicines, cx| {
                medicines.close_editor();
                cx.notify();
            });
        });

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

        for pair in self.fields.chunks(2) {
            let mut row = div().flex().gap_4();
            for field in pair {
                row = row.child(self.render_field(locale, field));
            }
            modal = modal.child(row);
        }

        modal
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(MediColors::text_secondary())
                            .child(t(locale, "med-image-paths")),
                    )
                    .child(self.paths_input.clone()),
            )
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .pt_2()
                    .child(
                        Button::secondary("editor-cancel", t(locale, "action-cancel")).on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.entities.medicines.update(cx, |medicines, cx| {
                                    medicines.close_editor();
                                    cx.notify();
                                });
                            }),
                        ),
                    )
                    .child(
                        Button::primary("editor-save", t(locale, "action-save"))
                            .loading(saving)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.submit(cx);
                            })),
                    ),
            )
    }
}
