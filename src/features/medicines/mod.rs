//! Medicines Feature
//!
//! Catalog table, editor, details view and image search.

pub mod controller;
pub mod details_modal;
pub mod editor_modal;
pub mod image_search_modal;
pub mod page;
