//! User Editor Modal
//!
//! Edit form over the shared draft. A fresh copy of the account can land
//! while the form is open (`FetchUserDetails`), so inputs re-seed from the
//! draft whenever the state changes.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, Entity, IntoElement, ParentElement,
    Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::components::primitives::select::{select, Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::user::{ROLE_ADMIN, ROLE_USER};
use crate::features::users::controller::UsersController;
use crate::i18n::{t, Locale};
use crate::state::users_state::UserDraft;
use crate::theme::colors::MediColors;

type DraftField = fn(&mut UserDraft) -> &mut String;

/// User edit form
pub struct UserEditorModal {
    entities: AppEntities,
    controller: Rc<UsersController>,
    /// Inline validation error shown above the buttons
    error: Option<String>,
    name_input: Entity<TextInput>,
    email_input: Entity<TextInput>,
    phone_input: Entity<TextInput>,
    dob_input: Entity<TextInput>,
    location_input: Entity<TextInput>,
    bio_input: Entity<TextInput>,
    gender_select: Entity<Select>,
    role_select: Entity<Select>,
}

impl UserEditorModal {
    pub fn new(
        entities: AppEntities,
        controller: Rc<UsersController>,
        cx: &mut Context<Self>,
    ) -> Self {
        let locale = entities.i18n.read(cx).locale;
        let draft = entities.users.read(cx).draft.clone();

        let name_input =
            Self::draft_input(&entities, "user-name", &draft.name, |d| &mut d.name, cx);
        let email_input =
            Self::draft_input(&entities, "user-email", &draft.email, |d| &mut d.email, cx);
        let phone_input =
            Self::draft_input(&entities, "user-phone", &draft.phone, |d| &mut d.phone, cx);
        let dob_input = Self::draft_input(
            &entities,
            "user-dob",
            &draft.date_of_birth,
            |d| &mut d.date_of_birth,
            cx,
        );
        dob_input.update(cx, |input, _| input.set_placeholder("YYYY-MM-DD"));
        let location_input = Self::draft_input(
            &entities,
            "user-location",
            &draft.location,
            |d| &mut d.location,
            cx,
        );
        let bio_input =
            Self::draft_input(&entities, "user-bio", &draft.bio, |d| &mut d.bio, cx);

        let gender_select = select(
            "user-gender",
            Self::gender_options(locale),
            Some(draft.gender.clone()),
            cx,
        );
        gender_select.update(cx, {
            let entities = entities.clone();
            move |select, _| {
                select.on_select(move |value, _window, cx| {
                    let value = value.to_string();
                    entities.users.update(cx, move |users, _| {
                        users.draft.gender = value;
                    });
                });
            }
        });

        let role_select = select(
            "user-role",
            Self::role_options(locale),
            Some(draft.role.clone()),
            cx,
        );
        role_select.update(cx, {
            let entities = entities.clone();
            move |select, _| {
                select.on_select(move |value, _window, cx| {
                    let value = value.to_string();
                    entities.users.update(cx, move |users, _| {
                        users.draft.role = value;
                    });
                });
            }
        });

        cx.observe(&entities.users, |this, _, cx| {
            this.reseed(cx);
            cx.notify();
        })
        .detach();
        cx.observe(&entities.i18n, |this, _, cx| {
            let locale = this.entities.i18n.read(cx).locale;
            this.gender_select.update(cx, |select, cx| {
                select.set_options(Self::gender_options(locale));
                cx.notify();
            });
            this.role_select.update(cx, |select, cx| {
                select.set_options(Self::role_options(locale));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            controller,
            error: None,
            name_input,
            email_input,
            phone_input,
            dob_input,
            location_input,
            bio_input,
            gender_select,
            role_select,
        }
    }

    fn draft_input(
        entities: &AppEntities,
        id: &'static str,
        initial: &str,
        accessor: DraftField,
        cx: &mut Context<Self>,
    ) -> Entity<TextInput> {
        let input = text_input(id, initial, "", cx);
        input.update(cx, {
            let entities = entities.clone();
            move |input, _| {
                input.on_change(move |value, _window, cx| {
                    let value = value.to_string();
                    entities.users.update(cx, move |users, _| {
                        *accessor(&mut users.draft) = value;
                    });
                });
            }
        });
        input
    }

    fn gender_options(locale: Locale) -> Vec<SelectOption> {
        vec![
            SelectOption::new("", t(locale, "gender-unspecified")),
            SelectOption::new("male", t(locale, "gender-male")),
            SelectOption::new("female", t(locale, "gender-female")),
            SelectOption::new("other", t(locale, "gender-other")),
        ]
    }

    fn role_options(locale: Locale) -> Vec<SelectOption> {
        vec![
            SelectOption::new(ROLE_ADMIN, t(locale, "users-role-admin")),
            SelectOption::new(ROLE_USER, t(locale, "users-role-user")),
        ]
    }

    /// Push the state draft back into the inputs after a server refresh
    fn reseed(&self, cx: &mut Context<Self>) {
        let draft = self.entities.users.read(cx).draft.clone();
        Self::seed(&self.name_input, &draft.name, cx);
        Self::seed(&self.email_input, &draft.email, cx);
        Self::seed(&self.phone_input, &draft.phone, cx);
        Self::seed(&self.dob_input, &draft.date_of_birth, cx);
        Self::seed(&self.location_input, &draft.location, cx);
        Self::seed(&self.bio_input, &draft.bio, cx);

        self.gender_select.update(cx, |select, cx| {
            if select.selected() != Some(draft.gender.as_str()) {
                select.set_selected(Some(draft.gender.clone()));
                cx.notify();
            }
        });
        self.role_select.update(cx, |select, cx| {
            if select.selected() != Some(draft.role.as_str()) {
                select.set_selected(Some(draft.role.clone()));
                cx.notify();
            }
        });
    }

    fn seed(input: &Entity<TextInput>, value: &str, cx: &mut Context<Self>) {
        input.update(cx, |input, cx| {
            if input.value() != value {
                input.set_value(value);
                cx.notify();
            }
        });
    }

    /// Validate before anything leaves the client; violations stay inline
    fn submit(&mut self, cx: &mut Context<Self>) {
        let draft = self.entities.users.read(cx).draft.clone();
        match draft.update_payload().validate() {
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

    fn labeled(&self, locale: Locale, key: &'static str, el: AnyElement) -> AnyElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(MediColors::text_secondary())
                    .child(t(locale, key)),
            )
            .child(el)
            .into_any_element()
    }
}

impl Render for UserEditorModal {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let saving = self.entities.users.read(cx).saving;

        let close_entities = self.entities.clone();
        let mut modal = Modal::new(t(locale, "users-edit-title"))
            .wide()
            .on_close(move |cx| {
                close_entities.users.update(cx, |users, cx| {
                    users.close_editor();
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

        modal
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(self.labeled(
                        locale,
                        "profile-name",
                        self.name_input.clone().into_any_element(),
                    ))
                    .child(self.labeled(
                        locale,
                        "col-email",
                        self.email_input.clone().into_any_element(),
                    )),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(self.labeled(
                        locale,
                        "profile-phone",
                        self.phone_input.clone().into_any_element(),
                    ))
                    .child(self.labeled(
                        locale,
                        "profile-dob",
                        self.dob_input.clone().into_any_element(),
                    )),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(self.labeled(
                        locale,
                        "profile-gender",
                        self.gender_select.clone().into_any_element(),
                    ))
                    .child(self.labeled(
                        locale,
                        "users-role",
                        self.role_select.clone().into_any_element(),
                    )),
            )
            .child(self.labeled(
                locale,
                "users-location",
                self.location_input.clone().into_any_element(),
            ))
            .child(self.labeled(
                locale,
                "users-bio",
                self.bio_input.clone().into_any_element(),
            ))
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .pt_2()
                    .child(
                        Button::secondary("user-editor-cancel", t(locale, "action-cancel"))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.entities.users.update(cx, |users, cx| {
                                    users.close_editor();
                                    cx.notify();
                                });
                            })),
                    )
                    .child(
                        Button::primary("user-editor-save", t(locale, "action-save"))
                            .loading(saving)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.submit(cx);
                            })),
                    ),
            )
    }
}
