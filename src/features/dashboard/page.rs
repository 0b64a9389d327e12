//! Dashboard Page
//!
//! Overview counters, quick actions, and the system status card.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::composite::stat_card::StatCard;
use crate::features::dashboard::controller::DashboardController;
use crate::i18n::{t, Locale};
use crate::state::connection_state::ConnectionTarget;
use crate::theme::colors::MediColors;
use crate::utils::format::format_number;

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    controller: DashboardController,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = DashboardController::new(entities.clone());

        // Observe the counters
        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe connection changes for the status card
        cx.observe(&entities.connection, |_this, _, cx| cx.notify())
            .detach();

        controller.refresh_if_stale(cx);

        Self {
            entities,
            controller,
        }
    }

    /// Re-fetch the counters
    pub fn refresh(&self, cx: &mut Context<Self>) {
        self.controller.refresh(cx);
    }

    fn render_quick_action(
        &self,
        id: &'static str,
        title: SharedString,
        hint: SharedString,
        target: ActivePage,
        open_create: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let entities = self.entities.clone();

        div()
            .id(id)
            .flex_1()
            .p_4()
            .rounded_md()
            .border_1()
            .border_color(MediColors::border())
            .cursor_pointer()
            .hover(|s| s.bg(MediColors::accent_soft()))
            .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.set_active_page(target);
                    cx.notify();
                });
                if open_create {
                    entities.medicines.update(cx, |medicines, cx| {
                        medicines.open_create();
                        cx.notify();
                    });
                }
            }))
            .child(
                div()
                    .text_size(px(14.0))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(MediColors::text_primary())
                    .child(title),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(MediColors::text_muted())
                    .child(hint),
            )
    }

    fn render_status_row(
        &self,
        label: SharedString,
        value: SharedString,
        color: Rgba,
    ) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_between()
            .py_2()
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(MediColors::text_secondary())
                    .child(label),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(div().text_size(px(10.0)).text_color(color).child("●"))
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(MediColors::text_primary())
                            .child(value),
                    ),
            )
    }

    fn render_status_card(&self, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        let connection = self.entities.connection.read(cx);
        let api_up = connection.is_connected(ConnectionTarget::Api);
        let search_up = connection.is_connected(ConnectionTarget::ImageSearch);

        let status_color = |up: bool| {
            if up {
                MediColors::success()
            } else {
                MediColors::danger()
            }
        };
        let status_value = |up: bool| {
            if up {
                t(locale, "dash-api-online")
            } else {
                t(locale, "dash-api-offline")
            }
        };

        div()
            .flex_1()
            .p_6()
            .bg(MediColors::content_bg())
            .border_1()
            .border_color(MediColors::border())
            .rounded_lg()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(15.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(MediColors::text_primary())
                    .mb_2()
                    .child(t(locale, "dash-system-status")),
            )
            .child(self.render_status_row(
                t(locale, "dash-api-server"),
                status_value(api_up),
                status_color(api_up),
            ))
            .child(self.render_status_row(
                t(locale, "connection-search"),
                status_value(search_up),
                status_color(search_up),
            ))
            .child(self.render_status_row(
                t(locale, "dash-database"),
                t(locale, "dash-db-connected"),
                status_color(api_up),
            ))
            .child(self.render_status_row(
                t(locale, "dash-last-backup"),
                t(locale, "dash-backup-value"),
                MediColors::info(),
            ))
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let dashboard = self.entities.dashboard.read(cx);
        let loading = dashboard.loading;
        let total_medicines = format_number(dashboard.total_medicines as i64);
        let total_users = format_number(dashboard.total_users as i64);
        let active_users = format_number(dashboard.active_users as i64);

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .p_6()
            // Stat cards
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(
                        StatCard::new(t(locale, "dash-total-medicines"), total_medicines)
                            .tint(MediColors::stat_blue())
                            .loading(loading),
                    )
                    .child(
                        StatCard::new(t(locale, "dash-total-users"), total_users)
                            .tint(MediColors::stat_green())
                            .loading(loading),
                    )
                    .child(
                        StatCard::new(t(locale, "dash-active-users"), active_users)
                            .tint(MediColors::stat_purple())
                            .loading(loading),
                    )
                    .child(
                        StatCard::new(t(locale, "dash-growth"), "+12%")
                            .tint(MediColors::warning()),
                    ),
            )
            // Quick actions
            .child(
                div()
                    .p_6()
                    .bg(MediColors::content_bg())
                    .border_1()
                    .border_color(MediColors::border())
                    .rounded_lg()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .text_size(px(15.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(MediColors::text_primary())
                            .child(t(locale, "dash-quick-actions")),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_4()
                            .child(self.render_quick_action(
                                "qa-add-medicine",
                                t(locale, "dash-add-medicine"),
                                t(locale, "dash-add-medicine-hint"),
                                ActivePage::Medicines,
                                true,
                                cx,
                            ))
                            .child(self.render_quick_action(
                                "qa-manage-users",
                                t(locale, "dash-manage-users"),
                                t(locale, "dash-manage-users-hint"),
                                ActivePage::Users,
                                false,
                                cx,
                            )),
                    ),
            )
            // System status
            .child(div().flex().gap_4().child(self.render_status_card(locale, cx)))
    }
}
