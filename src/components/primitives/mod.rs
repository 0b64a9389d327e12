//! Primitive Components
//!
//! Basic building blocks like buttons, inputs, etc.

pub mod badge;
pub mod button;
pub mod checkbox;
pub mod select;
pub mod spinner;
pub mod text_input;
