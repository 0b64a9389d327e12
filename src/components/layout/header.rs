//! Header Component
//!
//! The top bar with the page title, backend status, and language switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::state::connection_state::ConnectionTarget;
use crate::theme::colors::MediColors;
use crate::utils::format::initials;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe connection changes
        cx.observe(&entities.connection, |_this, _, cx| cx.notify())
            .detach();

        // Observe the active page for the title
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        // Observe the session for the user chip
        cx.observe(&entities.session, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_connection_indicator(
        &self,
        target: ConnectionTarget,
        label: impl Into<gpui::SharedString>,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let conn = self.entities.connection.read(cx);
        let connected = conn.is_connected(target);

        let (color, status) = if connected {
            (MediColors::success(), "●")
        } else {
            (gpui::rgba(0x9ca3afff), "○")
        };

        div()
            .flex()
            .items_center()
            .gap_1()
            .child(
                div()
                    .text_color(color)
                    .text_size(px(10.0))
                    .child(status),
            )
            .child(
                div()
                    .text_color(MediColors::text_secondary())
                    .text_size(px(12.0))
                    .child(label.into()),
            )
    }

    fn render_user_chip(&self, cx: &Context<Self>) -> impl IntoElement {
        let session = self.entities.session.read(cx);
        let name = session
            .user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default();

        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .size(px(28.0))
                    .rounded_full()
                    .bg(MediColors::accent())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(MediColors::text_light())
                    .text_size(px(12.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(initials(&name)),
            )
            .child(
                div()
                    .text_color(MediColors::text_primary())
                    .text_size(px(13.0))
                    .child(name),
            )
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active_page = self.entities.nav.read(cx).active_page;
        let title = t(locale, active_page.title_key());
        let lang_label = locale.display_name();
        let api_label = t(locale, "connection-api");
        let search_label = t(locale, "connection-search");

        let entities = self.entities.clone();

        div()
            .h(px(56.0))
            .w_full()
            .bg(MediColors::header_bg())
            .border_b_1()
            .border_color(MediColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            // Left side: page title
            .child(
                div()
                    .text_color(MediColors::text_primary())
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(title),
            )
            // Right side: backend status, language switcher, user chip
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    // Connection indicators
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_4()
                            .child(self.render_connection_indicator(
                                ConnectionTarget::Api,
                                api_label,
                                cx,
                            ))
                            .child(self.render_connection_indicator(
                                ConnectionTarget::ImageSearch,
                                search_label,
                                cx,
                            )),
                    )
                    // Language switcher
                    .child(
                        div()
                            .id("lang-switcher")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(MediColors::accent_soft())
                            .text_color(MediColors::accent())
                            .text_size(px(13.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xdbeafeff)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.i18n.update(cx, |i18n, cx| {
                                    i18n.toggle_locale();
                                    cx.notify();
                                });
                            })
                            .child(lang_label),
                    )
                    .child(self.render_user_chip(cx)),
            )
    }
}

