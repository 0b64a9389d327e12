//! DataTable Component
//!
//! A data table with sortable headers and clickable rows.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, Context, Div, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use super::column::{Column, ColumnWidth, SortDirection};
use crate::theme::colors::MediColors;

/// DataTable component
pub struct DataTable<R: Clone + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: SharedString,
    loading_message: SharedString,
    /// Active sort shown in the header
    sort: Option<(SharedString, SortDirection)>,
    on_sort: Option<Rc<dyn Fn(&str, &mut App)>>,
    on_row_click: Option<Rc<dyn Fn(&R, &mut App)>>,
}

impl<R: Clone + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 44.0,
            header_height: 40.0,
            loading: false,
            empty_message: "No data".into(),
            loading_message: "Loading...".into(),
            sort: None,
            on_sort: None,
            on_row_click: None,
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Set the loading message
    pub fn set_loading_message(&mut self, message: impl Into<SharedString>) {
        self.loading_message = message.into();
    }

    /// Set the sort indicator shown in the header
    pub fn set_sort(&mut self, sort: Option<(SharedString, SortDirection)>) {
        self.sort = sort;
    }

    /// Set the handler for sortable header clicks
    pub fn on_sort(&mut self, handler: impl Fn(&str, &mut App) + 'static) {
        self.on_sort = Some(Rc::new(handler));
    }

    /// Set the handler for row clicks
    pub fn on_row_click(&mut self, handler: impl Fn(&R, &mut App) + 'static) {
        self.on_row_click = Some(Rc::new(handler));
    }

    fn apply_width(cell: Div, width: &ColumnWidth) -> Div {
        match width {
            ColumnWidth::Fixed(w) => cell.w(px(*w)).flex_none(),
            ColumnWidth::Grow { min } => {
                let cell = cell.flex_1();
                match min {
                    Some(min) => cell.min_w(px(*min)),
                    None => cell,
                }
            }
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(MediColors::table_header_bg())
            .border_b_1()
            .border_color(MediColors::border())
            .children(self.columns.iter().map(|col| {
                let indicator = self
                    .sort
                    .as_ref()
                    .filter(|(id, _)| *id == col.id)
                    .map(|(_, direction)| direction.glyph());

                let mut cell = Self::apply_width(div(), &col.width)
                    .px_3()
                    .flex()
                    .items_center()
                    .gap_1()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(MediColors::text_primary())
                    .child(col.label.clone());

                if let Some(glyph) = indicator {
                    cell = cell.child(
                        div()
                            .text_color(MediColors::accent())
                            .text_size(px(12.0))
                            .child(glyph),
                    );
                }

                match self.on_sort.clone().filter(|_| col.sortable) {
                    Some(handler) => {
                        let col_id = col.id.clone();
                        cell.id(col.id.clone())
                            .cursor_pointer()
                            .hover(|s| s.bg(MediColors::table_row_hover()))
                            .on_click(move |_event, _window, cx| {
                                handler(&col_id, cx);
                            })
                            .into_any_element()
                    }
                    None => cell.into_any_element(),
                }
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            MediColors::content_bg()
        } else {
            MediColors::table_row_alt()
        };

        let mut element = div()
            .id(("row", index))
            .min_h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(MediColors::table_row_hover()))
            .border_b_1()
            .border_color(MediColors::border())
            .children(self.columns.iter().map(|col| {
                let cell_content = col.render_cell(row);
                Self::apply_width(div(), &col.width)
                    .px_3()
                    .text_sm()
                    .text_color(MediColors::text_primary())
                    .overflow_hidden()
                    .child(cell_content)
            }));

        if let Some(handler) = self.on_row_click.clone() {
            let row = row.clone();
            element = element
                .cursor_pointer()
                .on_click(move |_event, _window, cx| {
                    handler(&row, cx);
                });
        }

        element
    }

    /// Render empty state
    fn render_empty(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .py_8()
            .text_color(MediColors::text_muted())
            .child(self.empty_message.clone())
    }

    /// Render loading state
    fn render_loading(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .py_8()
            .text_color(MediColors::text_muted())
            .child(self.loading_message.clone())
    }
}

impl<R: Clone + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(MediColors::content_bg())
            .border_1()
            .border_color(MediColors::border())
            .rounded_md()
            .overflow_hidden();

        // Header
        table = table.child(self.render_header());

        // Body
        if self.loading {
            table = table.child(self.render_loading());
        } else if self.rows.is_empty() {
            table = table.child(self.render_empty());
        } else {
            let rows_content = div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                );
            table = table.child(rows_content);
        }

        table
    }
}
