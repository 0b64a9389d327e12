//! DataTable Component
//!
//! A reusable data table with sortable columns and pagination.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::{Column, ColumnWidth, SortDirection};
pub use data_table::DataTable;
pub use pagination::Pagination;
