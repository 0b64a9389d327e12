//! Login feature

pub mod controller;
pub mod page;
