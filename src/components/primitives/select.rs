//! Select Component
//!
//! A dropdown backed by its own entity so the option list can open and
//! close. Options are plain value/label pairs.

use gpui::{
    deferred, div, prelude::*, px, ClickEvent, Context, ElementId, Entity, IntoElement,
    ParentElement, Render, SharedString, Styled, Window,
};

use crate::theme::colors::MediColors;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A select/dropdown component
pub struct Select {
    id: ElementId,
    options: Vec<SelectOption>,
    selected: Option<String>,
    placeholder: SharedString,
    open: bool,
    disabled: bool,
    on_select: Option<Box<dyn Fn(&str, &mut Window, &mut Context<Self>) + 'static>>,
}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<ElementId>, _cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            selected: None,
            placeholder: "Select...".into(),
            open: false,
            disabled: false,
            on_select: None,
        }
    }

    /// Set the options
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
    }

    /// Set the selected value
    pub fn set_selected(&mut self, value: Option<String>) {
        self.selected = value;
    }

    /// Get the selected value
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Set the selection handler
    pub fn on_select(&mut self, handler: impl Fn(&str, &mut Window, &mut Context<Self>) + 'static) {
        self.on_select = Some(Box::new(handler));
    }

    fn choose(&mut self, value: String, window: &mut Window, cx: &mut Context<Self>) {
        self.selected = Some(value.clone());
        self.open = false;
        if let Some(handler) = self.on_select.take() {
            handler(&value, window, cx);
            self.on_select = Some(handler);
        }
        cx.notify();
    }

    fn selected_label(&self) -> Option<SharedString> {
        let selected = self.selected.as_ref()?;
        self.options
            .iter()
            .find(|opt| &opt.value == selected)
            .map(|opt| opt.label.clone())
    }

    fn render_option(&self, option: &SelectOption, cx: &mut Context<Self>) -> impl IntoElement {
        let value = option.value.clone();
        let is_selected = self.selected.as_deref() == Some(option.value.as_str());

        div()
            .id(SharedString::from(format!("opt-{}", option.value)))
            .px_3()
            .py_2()
            .text_sm()
            .text_color(if is_selected {
                MediColors::accent()
            } else {
                MediColors::text_primary()
            })
            .cursor_pointer()
            .hover(|s| s.bg(MediColors::table_row_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                this.choose(value.clone(), window, cx);
            }))
            .child(option.label.clone())
    }
}

impl Render for Select {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let display_text = self.selected_label().unwrap_or(self.placeholder.clone());
        let text_color = if self.selected.is_some() {
            MediColors::text_primary()
        } else {
            MediColors::input_placeholder()
        };
        let opacity = if self.disabled { 0.6 } else { 1.0 };

        let mut trigger = div()
            .id(self.id.clone())
            .px_3()
            .py_2()
            .bg(MediColors::input_bg())
            .border_1()
            .border_color(MediColors::input_border())
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(150.0))
            .flex()
            .items_center()
            .justify_between()
            .gap_2()
            .opacity(opacity)
            .child(display_text)
            .child(
                div()
                    .text_color(MediColors::text_muted())
                    .text_size(px(10.0))
                    .child(if self.open { "\u{25b2}" } else { "\u{25bc}" }),
            );

        if !self.disabled {
            trigger = trigger
                .cursor_pointer()
                .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                    this.open = !this.open;
                    cx.notify();
                }));
        }

        let mut container = div().relative().child(trigger);

        if self.open {
            let options: Vec<_> = self
                .options
                .clone()
                .into_iter()
                .map(|opt| self.render_option(&opt, cx).into_any_element())
                .collect();

            container = container.child(
                deferred(
                    div()
                        .id(SharedString::from(format!("{:?}-menu", self.id)))
                        .absolute()
                        .top(px(40.0))
                        .left_0()
                        .min_w_full()
                        .bg(MediColors::content_bg())
                        .border_1()
                        .border_color(MediColors::border())
                        .rounded_md()
                        .shadow_lg()
                        .overflow_hidden()
                        .on_mouse_down_out(cx.listener(|this, _event, _window, cx| {
                            this.open = false;
                            cx.notify();
                        }))
                        .children(options),
                )
                .with_priority(1),
            );
        }

        container
    }
}

/// Create a select entity with options and an initial selection
pub fn select<V: 'static>(
    id: impl Into<ElementId>,
    options: Vec<SelectOption>,
    selected: Option<String>,
    cx: &mut Context<V>,
) -> Entity<Select> {
    let id = id.into();
    cx.new(|cx| {
        let mut select = Select::new(id, cx);
        select.set_options(options);
        select.set_selected(selected);
        select
    })
}
