//! Users Feature
//!
//! Account table, role filter and the account editor.

pub mod controller;
pub mod editor_modal;
pub mod page;
