//! Profile feature: account form and photo management.

pub mod controller;
pub mod page;
