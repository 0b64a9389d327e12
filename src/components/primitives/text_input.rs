//! TextInput Component
//!
//! A minimal single-line text field. Keyboard input is handled directly
//! from key events; selection and cursor movement are not supported.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString, Styled,
    Window,
};

use crate::theme::colors::MediColors;

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    masked: bool,
    disabled: bool,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Window, &mut Context<Self>) + 'static>>,
    on_submit: Option<Box<dyn Fn(&mut Window, &mut Context<Self>) + 'static>>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            masked: false,
            disabled: false,
            focus_handle: cx.focus_handle(),
            on_change: None,
            on_submit: None,
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Render the value as dots (passwords)
    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    /// Set disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Window, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Set the Enter handler
    pub fn on_submit(&mut self, handler: impl Fn(&mut Window, &mut Context<Self>) + 'static) {
        self.on_submit = Some(Box::new(handler));
    }

    fn notify_change(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_change.take() {
            handler(&self.value, window, cx);
            self.on_change = Some(handler);
        }
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        let keystroke = &event.keystroke;
        let modifiers = keystroke.modifiers;
        if modifiers.control || modifiers.alt || modifiers.platform || modifiers.function {
            return;
        }

        match keystroke.key.as_str() {
            "backspace" => {
                self.value.pop();
                self.notify_change(window, cx);
            }
            "enter" => {
                if let Some(handler) = self.on_submit.take() {
                    handler(window, cx);
                    self.on_submit = Some(handler);
                }
            }
            "space" => {
                self.value.push(' ');
                self.notify_change(window, cx);
            }
            _ => {
                if let Some(text) = keystroke.key_char.clone() {
                    self.value.push_str(&text);
                    self.notify_change(window, cx);
                }
            }
        }
    }

    fn display_text(&self, focused: bool) -> (SharedString, bool) {
        if self.value.is_empty() {
            return (self.placeholder.clone(), true);
        }
        let mut text = if self.masked {
            "\u{2022}".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        };
        if focused {
            text.push('\u{258f}');
        }
        (SharedString::from(text), false)
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            MediColors::border_focus()
        } else {
            MediColors::input_border()
        };

        let (display_text, is_placeholder) = self.display_text(is_focused);
        let text_color = if is_placeholder {
            MediColors::input_placeholder()
        } else {
            MediColors::text_primary()
        };

        let opacity = if self.disabled { 0.6 } else { 1.0 };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, window, cx| {
                this.handle_key_down(event, window, cx);
            }))
            .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                if !this.disabled {
                    window.focus(&this.focus_handle);
                    cx.notify();
                }
            }))
            .px_3()
            .py_2()
            .bg(MediColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .overflow_hidden()
            .opacity(opacity)
            .cursor_text()
            .child(display_text)
    }
}

/// Create a text input entity with an initial value and placeholder
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input
    })
}
