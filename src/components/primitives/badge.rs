//! Badge Component
//!
//! Small tinted label for roles and match scores.

use gpui::{
    div, px, App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window,
};

use crate::theme::colors::MediColors;

/// Badge tint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeKind {
    /// Blue (admin role)
    Blue,
    /// Gray (regular role)
    #[default]
    Gray,
    /// Green (match confidence)
    Green,
}

impl BadgeKind {
    fn colors(&self) -> (Rgba, Rgba) {
        match self {
            BadgeKind::Blue => (MediColors::badge_blue_bg(), MediColors::badge_blue_text()),
            BadgeKind::Gray => (MediColors::badge_gray_bg(), MediColors::badge_gray_text()),
            BadgeKind::Green => (MediColors::badge_green_bg(), MediColors::badge_green_text()),
        }
    }
}

/// A tinted pill label
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    kind: BadgeKind,
}

impl Badge {
    /// Create a new badge
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            kind: BadgeKind::default(),
        }
    }

    /// Set the badge tint
    pub fn kind(mut self, kind: BadgeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Badge for an account role
    pub fn for_role(role: &str, label: impl Into<SharedString>) -> Self {
        let kind = if role == crate::domain::user::ROLE_ADMIN {
            BadgeKind::Blue
        } else {
            BadgeKind::Gray
        };
        Self::new(label).kind(kind)
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, text) = self.kind.colors();

        div()
            .px_2()
            .py_px()
            .rounded_full()
            .bg(bg)
            .text_color(text)
            .text_size(px(12.0))
            .child(self.label)
    }
}
