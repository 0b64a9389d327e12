//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    px, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions,
};
use tracing::{error, warn};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::app::workspace::Workspace;
use crate::domain::settings::AppSettings;
use crate::eventing::app_event::AppEvent;
use crate::features::dashboard::controller::DashboardController;
use crate::features::medicines::controller::MedicinesController;
use crate::features::users::controller::UsersController;
use crate::i18n::{t, Locale};
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::utils::config_store;
use crate::utils::keymap::{new_key_bindings, ListAction, MenuAction, NavAction};

/// Run the MediVision admin application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Settings drive the locale, the log panel, and the backend URL.
        // A broken settings file falls back to defaults rather than
        // blocking startup.
        let settings = config_store::load_settings().unwrap_or_else(|err| {
            warn!("Could not load settings, using defaults: {err}");
            AppSettings::default()
        });
        let locale = Locale::from_code(&settings.ui.locale);

        // Initialize global entities and seed them from the settings
        let entities = AppEntities::init(cx);
        entities.settings.update(cx, |state, _| {
            state.update_settings(settings.clone());
        });
        entities.i18n.update(cx, |i18n, _| i18n.set_locale(locale));
        entities.logs.update(cx, |logs, _| {
            logs.expanded = settings.ui.log_panel_expanded;
        });
        cx.set_global(entities.clone());

        // Set up action handlers
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });
        cx.on_action(|action: &NavAction, cx: &mut App| {
            let entities = cx.global::<AppEntities>().clone();
            // Shortcuts only navigate once an admin is signed in
            if !entities.session.read(cx).is_authenticated() {
                return;
            }
            let page = match action {
                NavAction::Dashboard => ActivePage::Dashboard,
                NavAction::Medicines => ActivePage::Medicines,
                NavAction::Users => ActivePage::Users,
                NavAction::Profile => ActivePage::Profile,
            };
            entities.nav.update(cx, |nav, cx| {
                nav.set_active_page(page);
                cx.notify();
            });
        });
        cx.on_action(|action: &ListAction, cx: &mut App| {
            let ListAction::Refresh = action;
            let entities = cx.global::<AppEntities>().clone();
            if !entities.session.read(cx).is_authenticated() {
                return;
            }
            match entities.nav.read(cx).active_page {
                ActivePage::Dashboard => DashboardController::new(entities).refresh(cx),
                ActivePage::Medicines => MedicinesController::new(entities).refresh(cx),
                ActivePage::Users => UsersController::new(entities).refresh(cx),
                // The profile form reflects the session, nothing to re-fetch
                ActivePage::Profile => {}
            }
        });
        cx.bind_keys(new_key_bindings());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            // If no windows remain, quit the application
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

        // Initialize service hub and kick off the startup session check
        let service_hub = ServiceHub::new(event_tx, &settings);
        service_hub.send(ServiceCommand::CheckSession);
        cx.set_global(service_hub);

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(1400.0), px(900.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app-title")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        });
        if let Err(err) = opened {
            error!("Could not open the main window: {err}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
