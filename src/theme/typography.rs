//! Typography - Font Size Scale

/// Font sizes in px, tailwind-style naming.
pub struct Typography;

impl Typography {
    pub const TEXT_SM: f32 = 14.0;
    /// Dashboard stat counters.
    pub const TEXT_3XL: f32 = 30.0;
}
