//! Composite components built from primitives

pub mod data_table;
pub mod modal;
pub mod stat_card;
pub mod toast_stack;
