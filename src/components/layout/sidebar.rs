//! Sidebar Component
//!
//! Navigation sidebar with the brand block, page links, and the session card.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::i18n::{t, Locale};
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::theme::colors::MediColors;
use crate::utils::keymap::humanize_keystroke;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe navigation changes
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        // Observe the session for the bottom card
        cx.observe(&entities.session, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn shortcut_for(page: ActivePage) -> &'static str {
        match page {
            ActivePage::Dashboard => "secondary-1",
            ActivePage::Medicines => "secondary-2",
            ActivePage::Users => "secondary-3",
            ActivePage::Profile => "secondary-4",
        }
    }

    fn render_nav_item(
        &self,
        page: ActivePage,
        locale: Locale,
        active_page: ActivePage,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let label = t(locale, page.title_key());
        let hint = humanize_keystroke(Self::shortcut_for(page));
        let entities = self.entities.clone();

        let bg_color = if is_active {
            MediColors::accent_soft()
        } else {
            gpui::rgba(0x00000000)
        };

        let text_color = if is_active {
            MediColors::accent()
        } else {
            MediColors::text_secondary()
        };

        let border_color = if is_active {
            MediColors::accent()
        } else {
            gpui::rgba(0x00000000)
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .px_4()
            .py_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .flex()
            .items_center()
            .justify_between()
            .cursor_pointer()
            .hover(|s| s.bg(MediColors::table_row_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.set_active_page(page);
                    cx.notify();
                });
            })
            .child(
                div()
                    .text_color(text_color)
                    .text_size(px(14.0))
                    .child(label),
            )
            .child(
                div()
                    .text_color(MediColors::text_muted())
                    .text_size(px(11.0))
                    .child(hint),
            )
    }

    fn render_session_card(&self, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        let session = self.entities.session.read(cx);
        let (name, email) = session
            .user
            .as_ref()
            .map(|user| (user.name.clone(), user.email.clone()))
            .unwrap_or_default();

        div()
            .w_full()
            .px_4()
            .py_3()
            .border_t_1()
            .border_color(MediColors::border())
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_color(MediColors::text_primary())
                    .text_size(px(13.0))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(name),
            )
            .child(
                div()
                    .text_color(MediColors::text_muted())
                    .text_size(px(12.0))
                    .child(email),
            )
            .child(
                div()
                    .id("logout")
                    .mt_1()
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .text_size(px(13.0))
                    .text_color(MediColors::danger())
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xfee2e2ff)))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        if let Some(hub) = cx.try_global::<ServiceHub>() {
                            hub.send(ServiceCommand::Logout);
                        }
                    })
                    .child(t(locale, "action-logout")),
            )
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active_page = self.entities.nav.read(cx).active_page;

        div()
            .w(px(220.0))
            .h_full()
            .bg(MediColors::sidebar_bg())
            .border_r_1()
            .border_color(MediColors::border())
            .flex()
            .flex_col()
            // Brand block
            .child(
                div()
                    .px_4()
                    .py_4()
                    .border_b_1()
                    .border_color(MediColors::border())
                    .child(
                        div()
                            .text_color(MediColors::accent())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .child(t(locale, "app-brand")),
                    ),
            )
            .child(
                div().flex_1().flex().flex_col().pt_2().children(
                    ActivePage::all()
                        .iter()
                        .map(|page| self.render_nav_item(*page, locale, active_page)),
                ),
            )
            .child(self.render_session_card(locale, cx))
    }
}
