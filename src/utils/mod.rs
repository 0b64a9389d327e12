//! Utility Modules
//!
//! Formatting, settings persistence, and upload validation shared across
//! the application.

pub mod config_store;
pub mod format;
pub mod fs;
pub mod keymap;
pub mod secret;
pub mod upload;
