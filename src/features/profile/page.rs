//! Profile Page
//!
//! Form over the signed-in account plus avatar and cover photo uploads.
//! The form re-seeds whenever the server sends back a fresh profile.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, Div, Entity, FontWeight,
    InteractiveElement, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::Button;
use crate::components::primitives::select::{select, Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::user::ROLE_ADMIN;
use crate::features::profile::controller::ProfileController;
use crate::i18n::{t, Locale};
use crate::state::profile_state::ProfileState;
use crate::theme::colors::MediColors;
use crate::utils::format::initials;

type ProfileField = fn(&mut ProfileState) -> &mut String;

/// Profile page component
pub struct ProfilePage {
    entities: AppEntities,
    controller: Rc<ProfileController>,
    name_input: Entity<TextInput>,
    email_input: Entity<TextInput>,
    phone_input: Entity<TextInput>,
    dob_input: Entity<TextInput>,
    gender_select: Entity<Select>,
    avatar_input: Entity<TextInput>,
    cover_input: Entity<TextInput>,
    avatar_error: Option<String>,
    cover_error: Option<String>,
}

impl ProfilePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = Rc::new(ProfileController::new(entities.clone()));
        let locale = entities.i18n.read(cx).locale;
        let profile = entities.profile.read(cx).clone();

        let name_input =
            Self::profile_input(&entities, "profile-name", &profile.name, |p| &mut p.name, cx);
        let phone_input = Self::profile_input(
            &entities,
            "profile-phone",
            &profile.phone,
            |p| &mut p.phone,
            cx,
        );
        let dob_input = Self::profile_input(
            &entities,
            "profile-dob",
            &profile.date_of_birth,
            |p| &mut p.date_of_birth,
            cx,
        );
        dob_input.update(cx, |input, _| input.set_placeholder("YYYY-MM-DD"));
        let avatar_input = Self::profile_input(
            &entities,
            "avatar-path",
            &profile.avatar_path,
            |p| &mut p.avatar_path,
            cx,
        );
        avatar_input.update(cx, |input, _| input.set_placeholder("/path/to/photo.jpg"));
        let cover_input = Self::profile_input(
            &entities,
            "cover-path",
            &profile.cover_path,
            |p| &mut p.cover_path,
            cx,
        );
        cover_input.update(cx, |input, _| input.set_placeholder("/path/to/photo.jpg"));

        // The email never leaves this form, the backend refuses changes
        let email = entities
            .session
            .read(cx)
            .user
            .as_ref()
            .map(|user| user.email.clone())
            .unwrap_or_default();
        let email_input = text_input("profile-email", email, "", cx);
        email_input.update(cx, |input, _| input.set_disabled(true));

        let gender_select = select(
            "profile-gender",
            Self::gender_options(locale),
            Some(profile.gender.clone()),
            cx,
        );
        gender_select.update(cx, {
            let entities = entities.clone();
            move |select, _| {
                select.on_select(move |value, _window, cx| {
                    let value = value.to_string();
                    entities.profile.update(cx, move |profile, _| {
                        profile.gender = value;
                    });
                });
            }
        });

        cx.observe(&entities.profile, |this, _, cx| {
            this.reseed(cx);
            cx.notify();
        })
        .detach();
        cx.observe(&entities.session, |this, _, cx| {
            let email = this
                .entities
                .session
                .read(cx)
                .user
                .as_ref()
                .map(|user| user.email.clone())
                .unwrap_or_default();
            this.email_input.update(cx, |input, cx| {
                if input.value() != email {
                    input.set_value(email);
                    cx.notify();
                }
            });
            cx.notify();
        })
        .detach();
        cx.observe(&entities.i18n, |this, _, cx| {
            let locale = this.entities.i18n.read(cx).locale;
            this.gender_select.update(cx, |select, cx| {
                select.set_options(Self::gender_options(locale));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            controller,
            name_input,
            email_input,
            phone_input,
            dob_input,
            gender_select,
            avatar_input,
            cover_input,
            avatar_error: None,
            cover_error: None,
        }
    }

    /// No list fetch here; the form reflects the session
    pub fn refresh(&self, _cx: &mut Context<Self>) {}

    fn profile_input(
        entities: &AppEntities,
        id: &'static str,
        initial: &str,
        accessor: ProfileField,
        cx: &mut Context<Self>,
    ) -> Entity<TextInput> {
        let input = text_input(id, initial, "", cx);
        input.update(cx, {
            let entities = entities.clone();
            move |input, _| {
                input.on_change(move |value, _window, cx| {
                    let value = value.to_string();
                    entities.profile.update(cx, move |profile, _| {
                        *accessor(profile) = value;
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

    /// Push the state back into the inputs after a server refresh
    fn reseed(&self, cx: &mut Context<Self>) {
        let profile = self.entities.profile.read(cx).clone();
        Self::seed(&self.name_input, &profile.name, cx);
        Self::seed(&self.phone_input, &profile.phone, cx);
        Self::seed(&self.dob_input, &profile.date_of_birth, cx);
        Self::seed(&self.avatar_input, &profile.avatar_path, cx);
        Self::seed(&self.cover_input, &profile.cover_path, cx);

        self.gender_select.update(cx, |select, cx| {
            if select.selected() != Some(profile.gender.as_str()) {
                select.set_selected(Some(profile.gender.clone()));
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

    fn card(&self) -> Div {
        div()
            .bg(MediColors::content_bg())
            .border_1()
            .border_color(MediColors::border())
            .rounded_lg()
            .p_6()
            .flex()
            .flex_col()
            .gap_4()
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

    fn render_photo_section(
        &self,
        locale: Locale,
        title_key: &'static str,
        current: Option<String>,
        input: Entity<TextInput>,
        error: Option<String>,
        upload_id: &'static str,
        remove_id: &'static str,
        uploading: bool,
        on_upload: fn(&mut Self, &mut Context<Self>),
        on_remove: fn(&mut Self, &mut Context<Self>),
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let mut section = self
            .card()
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(MediColors::text_primary())
                    .child(t(locale, title_key)),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(MediColors::text_muted())
                    .child(current.clone().unwrap_or_else(|| "-".to_string())),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(div().flex_1().child(input))
                    .child(
                        Button::secondary(upload_id, t(locale, "action-upload"))
                            .loading(uploading)
                            .on_click(cx.listener(
                                move |this, _event: &ClickEvent, _window, cx| {
                                    on_upload(this, cx);
                                },
                            )),
                    )
                    .child(
                        Button::danger(remove_id, t(locale, "action-remove"))
                            .disabled(current.is_none() || uploading)
                            .on_click(cx.listener(
                                move |this, _event: &ClickEvent, _window, cx| {
                                    on_remove(this, cx);
                                },
                            )),
                    ),
            );

        if let Some(error) = error {
            section = section.child(
                div()
                    .text_size(px(12.0))
                    .text_color(MediColors::danger())
                    .child(error),
            );
        }

        section.into_any_element()
    }
}

impl Render for ProfilePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (saving, uploading) = {
            let state = self.entities.profile.read(cx);
            (state.saving, state.uploading)
        };
        let (name, email, role, avatar, cover) = {
            let session = self.entities.session.read(cx);
            match &session.user {
                Some(user) => (
                    user.name.clone(),
                    user.email.clone(),
                    user.role.clone(),
                    user.image.clone(),
                    user.cover_photo.clone(),
                ),
                None => Default::default(),
            }
        };

        let role_badge = Badge::for_role(
            &role,
            if role == ROLE_ADMIN {
                t(locale, "users-role-admin")
            } else {
                t(locale, "users-role-user")
            },
        );

        div()
            .id("profile-scroll")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .flex()
            .flex_col()
            .items_center()
            .child(
                div()
                    .w_full()
                    .max_w(px(760.0))
                    .flex()
                    .flex_col()
                    .gap_4()
                    // Identity header
                    .child(
                        self.card().child(
                            div()
                                .flex()
                                .items_center()
                                .gap_4()
                                .child(
                                    div()
                                        .size(px(72.0))
                                        .rounded_full()
                                        .bg(MediColors::accent())
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .text_color(MediColors::text_light())
                                        .text_size(px(24.0))
                                        .font_weight(FontWeight::SEMIBOLD)
                                        .child(initials(&name)),
                                )
                                .child(
                                    div()
                                        .flex()
                                        .flex_col()
                                        .gap_1()
                                        .child(
                                            div()
                                                .text_size(px(18.0))
                                                .font_weight(FontWeight::MEDIUM)
                                                .text_color(MediColors::text_primary())
                                                .child(name.clone()),
                                        )
                                        .child(
                                            div()
                                                .text_size(px(13.0))
                                                .text_color(MediColors::text_secondary())
                                                .child(email),
                                        )
                                        .child(div().child(role_badge)),
                                ),
                        ),
                    )
                    // Photos
                    .child(self.render_photo_section(
                        locale,
                        "profile-photo",
                        avatar,
                        self.avatar_input.clone(),
                        self.avatar_error.clone(),
                        "avatar-upload",
                        "avatar-remove",
                        uploading,
                        |this, cx| match this.controller.upload_avatar(cx) {
                            Err(message) => {
                                this.avatar_error = Some(message);
                                cx.notify();
                            }
                            Ok(()) => {
                                this.avatar_error = None;
                                cx.notify();
                            }
                        },
                        |this, cx| this.controller.remove_avatar(cx),
                        cx,
                    ))
                    .child(self.render_photo_section(
                        locale,
                        "profile-cover",
                        cover,
                        self.cover_input.clone(),
                        self.cover_error.clone(),
                        "cover-upload",
                        "cover-remove",
                        uploading,
                        |this, cx| match this.controller.upload_cover(cx) {
                            Err(message) => {
                                this.cover_error = Some(message);
                                cx.notify();
                            }
                            Ok(()) => {
                                this.cover_error = None;
                                cx.notify();
                            }
                        },
                        |this, cx| this.controller.remove_cover(cx),
                        cx,
                    ))
                    // Editable fields
                    .child(
                        self.card()
                            .child(self.labeled(
                                locale,
                                "profile-name",
                                self.name_input.clone().into_any_element(),
                            ))
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .gap_1()
                                    .child(self.labeled(
                                        locale,
                                        "profile-email",
                                        self.email_input.clone().into_any_element(),
                                    ))
                                    .child(
                                        div()
                                            .text_size(px(11.0))
                                            .text_color(MediColors::text_muted())
                                            .child(t(locale, "profile-email-hint")),
                                    ),
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
                            .child(self.labeled(
                                locale,
                                "profile-gender",
                                self.gender_select.clone().into_any_element(),
                            ))
                            .child(
                                div().flex().justify_end().child(
                                    Button::primary("profile-save", t(locale, "profile-save"))
                                        .loading(saving)
                                        .on_click(cx.listener(
                                            |this, _event: &ClickEvent, _window, cx| {
                                                this.controller.save(cx);
                                            },
                                        )),
                                ),
                            ),
                    ),
            )
    }
}
