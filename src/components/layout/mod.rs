//! Layout Components
//!
//! Header, sidebar, and the activity log panel.

pub mod header;
pub mod log_panel;
pub mod sidebar;
