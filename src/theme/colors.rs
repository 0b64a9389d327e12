//! Colors - MediVision Theme Colors

use gpui::{Rgba, rgb};

/// MediVision color palette - All colors are accessed via associated functions
pub struct MediColors;

impl MediColors {
    // Primary colors
    /// Primary accent - Blue (buttons, active nav, links)
    pub fn accent() -> Rgba { rgb(0x2563eb) }
    /// Primary accent, hovered
    pub fn accent_hover() -> Rgba { rgb(0x1d4ed8) }
    /// Pale accent wash (active nav background, avatar rings)
    pub fn accent_soft() -> Rgba { rgb(0xeff6ff) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf9fafb) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }
    /// Header background
    pub fn header_bg() -> Rgba { rgb(0xffffff) }
    /// Activity log panel background - Dark slate
    pub fn log_panel_bg() -> Rgba { rgb(0x0f172a) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x111827) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark or accent backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x16a34a) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    /// Info - Sky
    pub fn info() -> Rgba { rgb(0x0ea5e9) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x2563eb) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x2563eb) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Danger button background
    pub fn button_danger_bg() -> Rgba { rgb(0xdc2626) }
    /// Danger button text
    pub fn button_danger_text() -> Rgba { rgb(0xffffff) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }

    // Badge tints (pale background with a dark label of the same hue)
    /// Blue badge background (admin role)
    pub fn badge_blue_bg() -> Rgba { rgb(0xdbeafe) }
    /// Blue badge text
    pub fn badge_blue_text() -> Rgba { rgb(0x1e40af) }
    /// Gray badge background (user role)
    pub fn badge_gray_bg() -> Rgba { rgb(0xf3f4f6) }
    /// Gray badge text
    pub fn badge_gray_text() -> Rgba { rgb(0x1f2937) }
    /// Green badge background (match confidence)
    pub fn badge_green_bg() -> Rgba { rgb(0xdcfce7) }
    /// Green badge text
    pub fn badge_green_text() -> Rgba { rgb(0x166534) }

    // Stat card tints
    /// Catalog counter tint
    pub fn stat_blue() -> Rgba { rgb(0x2563eb) }
    /// Accounts counter tint
    pub fn stat_green() -> Rgba { rgb(0x16a34a) }
    /// Active-accounts counter tint
    pub fn stat_purple() -> Rgba { rgb(0x9333ea) }
}
