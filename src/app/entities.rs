//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! This pattern avoids "monolith state" by splitting state by update frequency.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    connection_state::ConnectionState, dashboard_state::DashboardState, i18n_state::I18nState,
    log_state::LogState, medicines_state::MedicinesState, nav_state::NavState,
    profile_state::ProfileState, session_state::SessionState, settings_state::SettingsState,
    toast_state::ToastState, users_state::UsersState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Signed-in admin session
    pub session: Entity<SessionState>,
    /// Persisted application settings
    pub settings: Entity<SettingsState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Sidebar navigation state
    pub nav: Entity<NavState>,
    /// Backend and image-search reachability
    pub connection: Entity<ConnectionState>,
    /// Activity log (ring buffer)
    pub logs: Entity<LogState>,
    /// Transient toast notifications
    pub toasts: Entity<ToastState>,
    /// Dashboard counters
    pub dashboard: Entity<DashboardState>,
    /// Medicine catalog state
    pub medicines: Entity<MedicinesState>,
    /// User management state
    pub users: Entity<UsersState>,
    /// Own-profile form state
    pub profile: Entity<ProfileState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            // The startup session check is already in flight when the
            // first frame renders.
            session: cx.new(|_| SessionState::checking()),
            settings: cx.new(|_| SettingsState::default()),
            i18n: cx.new(|_| I18nState::default()),
            nav: cx.new(|_| NavState::default()),
            connection: cx.new(|_| ConnectionState::default()),
            logs: cx.new(|_| LogState::new(2000)),
            toasts: cx.new(|_| ToastState::default()),
            dashboard: cx.new(|_| DashboardState::default()),
            medicines: cx.new(|_| MedicinesState::default()),
            users: cx.new(|_| UsersState::default()),
            profile: cx.new(|_| ProfileState::default()),
        }
    }
}
