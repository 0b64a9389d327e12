//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::MediColors;

/// Visual intent of a [`Button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Blue filled button for the main action of a view.
    #[default]
    Primary,
    /// Gray filled button for cancel/close actions.
    Secondary,
    /// Red filled button for destructive actions.
    Danger,
}

struct ButtonPalette {
    bg: Rgba,
    fg: Rgba,
    hover: Rgba,
}

impl ButtonVariant {
    fn palette(self) -> ButtonPalette {
        match self {
            ButtonVariant::Primary => ButtonPalette {
                bg: MediColors::button_primary_bg(),
                fg: MediColors::button_primary_text(),
                hover: MediColors::accent_hover(),
            },
            ButtonVariant::Secondary => ButtonPalette {
                bg: gpui::rgba(0xe5e7ebff),
                fg: MediColors::text_primary(),
                hover: gpui::rgba(0xd1d5dbff),
            },
            ButtonVariant::Danger => ButtonPalette {
                bg: MediColors::button_danger_bg(),
                fg: MediColors::button_danger_text(),
                hover: gpui::rgba(0xb91c1cff),
            },
        }
    }
}

/// A filled, clickable button. Disabled and loading buttons render dimmed
/// and drop their click handler.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    disabled: bool,
    loading: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            disabled: false,
            loading: false,
            on_click: None,
        }
    }

    /// Primary (blue) button.
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label)
    }

    /// Secondary (gray) button.
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        let mut button = Self::new(id, label);
        button.variant = ButtonVariant::Secondary;
        button
    }

    /// Danger (red) button.
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        let mut button = Self::new(id, label);
        button.variant = ButtonVariant::Danger;
        button
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// While loading the button is inert, like disabled, so a double click
    /// cannot issue the same request twice.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let palette = self.variant.palette();
        let inert = self.disabled || self.loading;

        let mut element = div()
            .id(self.id)
            .px(px(16.0))
            .py(px(8.0))
            .rounded_md()
            .bg(palette.bg)
            .text_color(palette.fg)
            .text_size(px(14.0))
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .child(self.label);

        if inert {
            element = element.opacity(0.5);
        } else {
            element = element.hover(move |s| s.bg(palette.hover));
            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
