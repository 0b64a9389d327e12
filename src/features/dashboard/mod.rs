//! Dashboard feature

pub mod controller;
pub mod page;
