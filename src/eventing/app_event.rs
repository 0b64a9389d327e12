//! AppEvent - Application Event Enum
//!
//! All events that can be sent from services to the UI layer.

use chrono::{DateTime, Local};

use crate::domain::medicine::Medicine;
use crate::domain::query::Paginated;
use crate::domain::user::User;
use crate::state::connection_state::ConnectionTarget;
use crate::state::log_state::LogLevel;
use crate::state::toast_state::ToastKind;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message for the activity panel
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// User-facing toast notification
    Toast { kind: ToastKind, message: String },

    /// Connection status changed
    ConnectionChanged {
        target: ConnectionTarget,
        connected: bool,
        detail: Option<String>,
    },

    /// Startup session check finished; `None` means the login view gates
    SessionResolved { user: Option<User> },

    /// Login accepted for an admin account
    LoginSucceeded { user: User },

    /// Login rejected; message for the inline form error
    LoginFailed { message: String },

    /// Session closed after logout
    LoggedOut,

    /// Signed-in profile changed (profile edit, avatar or cover ops)
    ProfileUpdated { user: User },

    /// Profile save finished, successfully or not
    ProfileSaveFinished,

    /// Avatar or cover upload/remove finished, successfully or not
    ProfileUploadFinished,

    /// A page of the medicine catalog arrived
    MedicinesLoaded { page: Paginated<Medicine> },

    /// A catalog fetch failed; rows stay as they were
    MedicinesLoadFailed,

    /// A single medicine arrived (details view refresh)
    MedicineDetailsLoaded { medicine: Medicine },

    /// Medicine create/update finished; a reload follows on success
    MedicineSaveFinished { saved: bool },

    /// A page of user accounts arrived
    UsersLoaded { page: Paginated<User> },

    /// An accounts fetch failed; rows stay as they were
    UsersLoadFailed,

    /// A fresh copy of one account arrived (editor refresh)
    UserDetailsLoaded { user: User },

    /// User update finished; a reload follows on success
    UserSaveFinished { saved: bool },

    /// Dashboard counters arrived
    StatsLoaded {
        total_medicines: u64,
        total_users: u64,
        active_users: u64,
    },

    /// The dashboard counters could not be loaded
    StatsLoadFailed,

    /// Image search finished; `failed` distinguishes an error from a
    /// legitimate empty result
    SearchCompleted { matches: Vec<Medicine>, failed: bool },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    /// Create a debug log event
    pub fn debug(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Debug, message)
    }

    /// Create a success toast
    pub fn success_toast(message: impl Into<String>) -> Self {
        Self::Toast {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    /// Create an error toast
    pub fn error_toast(message: impl Into<String>) -> Self {
        Self::Toast {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}
