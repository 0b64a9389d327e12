//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    /// Set the locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Toggle between English and Bangla
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::EnUS => Locale::BnBD,
            Locale::BnBD => Locale::EnUS,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        let mut state = I18nState::default();
        assert_eq!(state.locale, Locale::EnUS);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::BnBD);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EnUS);
    }
}
