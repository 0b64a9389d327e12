//! Domain - Pure Data Structures and Backend Record Types
//!
//! These types don't depend on GPUI and mirror the REST backend's JSON.

pub mod medicine;
pub mod query;
pub mod session;
pub mod settings;
pub mod user;
