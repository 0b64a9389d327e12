//! Login Page
//!
//! Centered sign-in card shown while no admin session exists.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::spinner::Spinner;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::features::login::controller::LoginController;
use crate::i18n::t;
use crate::theme::colors::MediColors;
use crate::utils::config_store;

/// Login page component
pub struct LoginPage {
    entities: AppEntities,
    controller: LoginController,
    email_input: Entity<TextInput>,
    password_input: Entity<TextInput>,
    remember: bool,
}

impl LoginPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = LoginController::new(entities.clone());

        // Observe session changes (progress and inline error)
        cx.observe(&entities.session, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Pre-fill from the remembered login, if any
        let settings = config_store::load_settings().unwrap_or_default();
        let (email, password, remember) = if settings.remember.enabled {
            (
                settings.remember.email.clone(),
                settings.remember.password.clone().unwrap_or_default(),
                true,
            )
        } else {
            (String::new(), String::new(), false)
        };

        let locale = entities.i18n.read(cx).locale;
        let email_input = text_input("login-email", email, t(locale, "login-email"), cx);
        let password_input = text_input("login-password", password, t(locale, "login-password"), cx);
        password_input.update(cx, |input, _| input.set_masked(true));

        // Enter anywhere in the form submits
        for input in [&email_input, &password_input] {
            let page = cx.weak_entity();
            input.update(cx, |input, _| {
                input.on_submit(move |_window, cx| {
                    page.update(cx, |page, cx| page.submit(cx)).ok();
                });
            });
        }

        Self {
            entities,
            controller,
            email_input,
            password_input,
            remember,
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let email = self.email_input.read(cx).value().trim().to_string();
        let password = self.password_input.read(cx).value().to_string();
        self.controller.submit(email, password, self.remember, cx);
    }

    fn render_field(
        &self,
        label: impl Into<gpui::SharedString>,
        input: &Entity<TextInput>,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(MediColors::text_secondary())
                    .child(label.into()),
            )
            .child(input.clone())
    }
}

impl Render for LoginPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let session = self.entities.session.read(cx);
        let checking = session.checking;
        let logging_in = session.logging_in;
        let login_error = session.login_error.clone();

        let container = div()
            .size_full()
            .bg(MediColors::background())
            .flex()
            .items_center()
            .justify_center();

        // Startup session check still in flight
        if checking {
            return container.child(Spinner::new(t(locale, "table-loading")));
        }

        let submit_label = if logging_in {
            t(locale, "login-signing-in")
        } else {
            t(locale, "login-submit")
        };

        let remember = self.remember;

        let mut card = div()
            .w(px(400.0))
            .bg(MediColors::content_bg())
            .rounded_lg()
            .shadow_lg()
            .p_8()
            .flex()
            .flex_col()
            .gap_4()
            // Brand and title
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(24.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(MediColors::accent())
                            .child(t(locale, "app-brand")),
                    )
                    .child(
                        div()
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(MediColors::text_primary())
                            .child(t(locale, "login-title")),
                    )
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(MediColors::text_muted())
                            .child(t(locale, "login-subtitle")),
                    ),
            );

        // Inline error from validation or a rejected login
        if let Some(message) = login_error {
            card = card.child(
                div()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .bg(gpui::rgba(0xfee2e2ff))
                    .text_size(px(13.0))
                    .text_color(MediColors::danger())
                    .child(message),
            );
        }

        card = card
            .child(self.render_field(t(locale, "login-email"), &self.email_input))
            .child(self.render_field(t(locale, "login-password"), &self.password_input))
            .child(
                Checkbox::new("login-remember")
                    .checked(remember)
                    .label(t(locale, "login-remember"))
                    .on_change({
                        let page = cx.entity();
                        move |checked, _window, cx| {
                            page.update(cx, |page, cx| {
                                page.remember = checked;
                                cx.notify();
                            });
                        }
                    }),
            )
            .child(
                div().w_full().flex().flex_col().child(
                    Button::primary("login-submit", submit_label)
                        .loading(logging_in)
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.submit(cx);
                        })),
                ),
            );

        container.child(card)
    }
}
