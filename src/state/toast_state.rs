//! ToastState - Transient User-Facing Notifications

use std::time::Duration;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Toast flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn color(&self) -> gpui::Rgba {
        match self {
            ToastKind::Success => gpui::rgba(0x16a34aff), // Green
            ToastKind::Error => gpui::rgba(0xdc2626ff),   // Red
        }
    }
}

/// A single toast
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Local>,
}

/// State for the toast overlay
#[derive(Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
}

impl ToastState {
    /// Show a new toast, returning its id for the dismiss timer
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Local::now(),
        };
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    /// Dismiss a toast by id (timer fired or close clicked)
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Toasts in display order, oldest first
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut state = ToastState::default();
        let first = state.push(ToastKind::Success, "Medicine created successfully");
        let second = state.push(ToastKind::Error, "Operation failed");
        assert_eq!(state.toasts().len(), 2);

        state.dismiss(first);
        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts()[0].id, second);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut state = ToastState::default();
        state.push(ToastKind::Success, "ok");
        state.dismiss(Uuid::new_v4());
        assert_eq!(state.toasts().len(), 1);
    }
}
