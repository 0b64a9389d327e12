//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace gates everything behind the admin session, holds the
//! sidebar, header, content area, and log panel, and runs the event pump
//! that bridges service events to UI updates.

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};
use tracing::warn;

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::composite::toast_stack::ToastStack;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::components::layout::sidebar::Sidebar;
use crate::eventing::app_event::AppEvent;
use crate::features::dashboard::page::DashboardPage;
use crate::features::login::page::LoginPage;
use crate::features::medicines::page::MedicinesPage;
use crate::features::profile::page::ProfilePage;
use crate::features::users::page::UsersPage;
use crate::state::dashboard_state::DashboardState;
use crate::state::medicines_state::MedicinesState;
use crate::state::profile_state::ProfileState;
use crate::state::toast_state::TOAST_TTL;
use crate::state::users_state::UsersState;
use crate::theme::colors::MediColors;
use crate::utils::config_store;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    log_panel: Entity<LogPanel>,
    // Page views (created lazily and cached per session)
    login_page: Option<Entity<LoginPage>>,
    dashboard_page: Option<Entity<DashboardPage>>,
    medicines_page: Option<Entity<MedicinesPage>>,
    users_page: Option<Entity<UsersPage>>,
    profile_page: Option<Entity<ProfilePage>>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        // Start event pump
        Self::start_event_pump(event_rx, entities.clone(), cx);

        // Re-fetch the target page on navigation. Pages that do not exist
        // yet fetch in their constructor, so only cached ones need it.
        cx.observe(&entities.nav, |this, _, cx| {
            this.refresh_active_page(cx);
            cx.notify();
        })
        .detach();

        // The session gates the whole layout; dropping the cached pages on
        // logout gives the next admin a clean slate.
        cx.observe(&entities.session, |this, _, cx| {
            if this.entities.session.read(cx).is_authenticated() {
                this.login_page = None;
            } else {
                this.dashboard_page = None;
                this.medicines_page = None;
                this.users_page = None;
                this.profile_page = None;
            }
            cx.notify();
        })
        .detach();

        // Persist UI preferences when the locale or the log panel changes.
        cx.observe(&entities.i18n, |this, _, cx| {
            this.persist_ui_settings(cx);
            cx.notify();
        })
        .detach();
        cx.observe(&entities.logs, |this, _, cx| {
            this.persist_ui_settings(cx);
        })
        .detach();

        Self {
            entities,
            header,
            sidebar,
            log_panel,
            login_page: None,
            dashboard_page: None,
            medicines_page: None,
            users_page: None,
            profile_page: None,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    /// Re-fetch the list behind the page the admin just switched to
    fn refresh_active_page(&mut self, cx: &mut Context<Self>) {
        match self.entities.nav.read(cx).active_page {
            ActivePage::Dashboard => {
                if let Some(page) = &self.dashboard_page {
                    page.update(cx, |page, cx| page.refresh(cx));
                }
            }
            ActivePage::Medicines => {
                if let Some(page) = &self.medicines_page {
                    page.update(cx, |page, cx| page.refresh(cx));
                }
            }
            ActivePage::Users => {
                if let Some(page) = &self.users_page {
                    page.update(cx, |page, cx| page.refresh(cx));
                }
            }
            ActivePage::Profile => {
                if let Some(page) = &self.profile_page {
                    page.update(cx, |page, cx| page.refresh(cx));
                }
            }
        }
    }

    /// Write the locale and log panel preferences back to `settings.toml`.
    ///
    /// The settings entity acts as the change detector, so log pushes that
    /// leave the panel state alone never touch the disk.
    fn persist_ui_settings(&self, cx: &mut Context<Self>) {
        let locale = self.entities.i18n.read(cx).locale;
        let expanded = self.entities.logs.read(cx).expanded;

        let changed = self.entities.settings.update(cx, |state, _| {
            let code = locale.as_code();
            let mut changed = false;
            if state.settings.ui.locale != code {
                state.settings.ui.locale = code.to_string();
                changed = true;
            }
            if state.settings.ui.log_panel_expanded != expanded {
                state.settings.ui.log_panel_expanded = expanded;
                changed = true;
            }
            changed
        });
        if !changed {
            return;
        }

        // Load-mutate-save so the worker's remembered-login writes and
        // these UI writes never clobber each other's fields.
        let result = config_store::load_settings().and_then(|mut settings| {
            settings.ui.locale = locale.as_code().to_string();
            settings.ui.log_panel_expanded = expanded;
            config_store::save_settings(&settings)
        });
        if let Err(err) = result {
            warn!("Could not save UI settings: {err}");
        }
    }

    /// Get or create a page view for the given page
    fn get_or_create_page(
        &mut self,
        page: ActivePage,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let entities = self.entities.clone();
        match page {
            ActivePage::Dashboard => self
                .dashboard_page
                .get_or_insert_with(|| cx.new(|cx| DashboardPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Medicines => self
                .medicines_page
                .get_or_insert_with(|| cx.new(|cx| MedicinesPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Users => self
                .users_page
                .get_or_insert_with(|| cx.new(|cx| UsersPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Profile => self
                .profile_page
                .get_or_insert_with(|| cx.new(|cx| ProfilePage::new(entities, cx)))
                .clone()
                .into_any_element(),
        }
    }

    fn render_toasts(&self, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let toasts = self.entities.toasts.read(cx);
        if toasts.is_empty() {
            return None;
        }
        let entities = self.entities.clone();
        Some(
            ToastStack::new(toasts.toasts()).on_dismiss(move |id, cx| {
                entities.toasts.update(cx, |toasts, cx| {
                    toasts.dismiss(id);
                    cx.notify();
                });
            }),
        )
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Everything is gated behind the admin session
        if !self.entities.session.read(cx).is_authenticated() {
            let entities = self.entities.clone();
            let login_page = self
                .login_page
                .get_or_insert_with(|| cx.new(|cx| LoginPage::new(entities, cx)))
                .clone();
            return div()
                .relative()
                .size_full()
                .child(login_page)
                .children(self.render_toasts(cx));
        }

        let active_page = self.entities.nav.read(cx).active_page;
        let content = self.get_or_create_page(active_page, cx);

        div()
            .relative()
            .size_full()
            .flex()
            .flex_row()
            .bg(MediColors::background())
            .child(
                // Sidebar
                self.sidebar.clone(),
            )
            .child(
                // Main column
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.header.clone())
                    .child(
                        // Content
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(MediColors::background())
                            .child(content),
                    )
                    .child(self.log_panel.clone()),
            )
            .children(self.render_toasts(cx))
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::Toast { kind, message } => {
            let id = entities.toasts.update(cx, |toasts, cx| {
                let id = toasts.push(kind, message);
                cx.notify();
                id
            });
            // Auto-dismiss after the TTL; a manual dismiss earlier makes
            // this a no-op.
            let toasts = entities.toasts.clone();
            cx.spawn(async move |cx| {
                cx.background_executor().timer(TOAST_TTL).await;
                let _ = toasts.update(cx, |toasts, cx| {
                    toasts.dismiss(id);
                    cx.notify();
                });
            })
            .detach();
        }
        AppEvent::ConnectionChanged {
            target,
            connected,
            detail,
        } => {
            entities.connection.update(cx, |conn, cx| {
                conn.set_status(target, connected, detail);
                cx.notify();
            });
        }
        AppEvent::SessionResolved { user } => {
            if let Some(user) = &user {
                entities.profile.update(cx, |profile, cx| {
                    profile.load_from(user);
                    cx.notify();
                });
            }
            entities.session.update(cx, |session, cx| {
                session.resolve(user);
                cx.notify();
            });
        }
        AppEvent::LoginSucceeded { user } => {
            entities.profile.update(cx, |profile, cx| {
                profile.load_from(&user);
                cx.notify();
            });
            entities.session.update(cx, |session, cx| {
                session.login_succeeded(user);
                cx.notify();
            });
        }
        AppEvent::LoginFailed { message } => {
            entities.session.update(cx, |session, cx| {
                session.login_failed(message);
                cx.notify();
            });
        }
        AppEvent::LoggedOut => {
            entities.session.update(cx, |session, cx| {
                session.logged_out();
                cx.notify();
            });
            // Catalog rows, account rows, and the profile form do not
            // survive a logout.
            entities.medicines.update(cx, |state, cx| {
                *state = MedicinesState::default();
                cx.notify();
            });
            entities.users.update(cx, |state, cx| {
                *state = UsersState::default();
                cx.notify();
            });
            entities.dashboard.update(cx, |state, cx| {
                *state = DashboardState::default();
                cx.notify();
            });
            entities.profile.update(cx, |state, cx| {
                *state = ProfileState::default();
                cx.notify();
            });
        }
        AppEvent::ProfileUpdated { user } => {
            entities.profile.update(cx, |profile, cx| {
                profile.load_from(&user);
                cx.notify();
            });
            entities.session.update(cx, |session, cx| {
                session.update_profile(user);
                cx.notify();
            });
        }
        AppEvent::ProfileSaveFinished => {
            entities.profile.update(cx, |profile, cx| {
                profile.save_finished();
                cx.notify();
            });
        }
        AppEvent::ProfileUploadFinished => {
            entities.profile.update(cx, |profile, cx| {
                profile.upload_finished();
                cx.notify();
            });
        }
        AppEvent::MedicinesLoaded { page } => {
            entities.medicines.update(cx, |state, cx| {
                state.update_page(page);
                cx.notify();
            });
        }
        AppEvent::MedicinesLoadFailed => {
            entities.medicines.update(cx, |state, cx| {
                state.set_loading(false);
                cx.notify();
            });
        }
        AppEvent::MedicineDetailsLoaded { medicine } => {
            entities.medicines.update(cx, |state, cx| {
                state.details_loaded(medicine);
                cx.notify();
            });
        }
        AppEvent::MedicineSaveFinished { saved } => {
            entities.medicines.update(cx, |state, cx| {
                state.save_finished(saved);
                cx.notify();
            });
        }
        AppEvent::UsersLoaded { page } => {
            entities.users.update(cx, |state, cx| {
                state.update_page(page);
                cx.notify();
            });
        }
        AppEvent::UsersLoadFailed => {
            entities.users.update(cx, |state, cx| {
                state.set_loading(false);
                cx.notify();
            });
        }
        AppEvent::UserDetailsLoaded { user } => {
            entities.users.update(cx, |state, cx| {
                state.details_loaded(&user);
                cx.notify();
            });
        }
        AppEvent::UserSaveFinished { saved } => {
            entities.users.update(cx, |state, cx| {
                state.save_finished(saved);
                cx.notify();
            });
        }
        AppEvent::StatsLoaded {
            total_medicines,
            total_users,
            active_users,
        } => {
            entities.dashboard.update(cx, |state, cx| {
                state.update_stats(total_medicines, total_users, active_users);
                cx.notify();
            });
        }
        AppEvent::StatsLoadFailed => {
            entities.dashboard.update(cx, |state, cx| {
                state.set_loading(false);
                cx.notify();
            });
        }
        AppEvent::SearchCompleted { matches, failed } => {
            entities.medicines.update(cx, |state, cx| {
                state.search_completed(matches, failed);
                cx.notify();
            });
        }
    }
}
