//! Column Definition

use gpui::{AnyElement, SharedString};

/// Sort direction shown in a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Ascending => "\u{2191}",
            SortDirection::Descending => "\u{2193}",
        }
    }
}

/// How a column claims horizontal space.
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Fixed width in pixels, never grows.
    Fixed(f32),
    /// Takes a share of the remaining space, optionally at least `min` px.
    Grow { min: Option<f32> },
}

/// One column of a [`super::DataTable`]: header label, width rule, an
/// optional sort flag (the column id doubles as the backend `sortBy` value),
/// and the cell renderer.
pub struct Column<R> {
    pub id: SharedString,
    pub label: SharedString,
    pub width: ColumnWidth,
    pub sortable: bool,
    cell: Box<dyn Fn(&R) -> AnyElement>,
}

impl<R: 'static> Column<R> {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        cell: impl Fn(&R) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::Grow { min: None },
            sortable: false,
            cell: Box::new(cell),
        }
    }

    /// Fix the column to `width` pixels.
    pub fn width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Let the column grow, but never shrink below `min` pixels.
    pub fn min_width(mut self, min: f32) -> Self {
        self.width = ColumnWidth::Grow { min: Some(min) };
        self
    }

    /// Let clicking the header sort by this column.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.cell)(row)
    }
}
