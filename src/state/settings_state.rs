//! SettingsState - Application Settings State

use crate::domain::settings::AppSettings;

/// State for application settings
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Current settings
    pub settings: AppSettings,
    /// Whether settings have been loaded from disk
    pub loaded: bool,
}

impl SettingsState {
    /// Replace settings after loading from disk
    pub fn update_settings(&mut self, settings: AppSettings) {
        self.settings = settings;
        self.loaded = true;
    }

    /// Remember the login form values, or forget them
    pub fn set_remembered_login(&mut self, email: Option<String>, password: Option<String>) {
        match email {
            Some(email) => {
                self.settings.remember.enabled = true;
                self.settings.remember.email = email;
                self.settings.remember.password = password;
            }
            None => {
                self.settings.remember.enabled = false;
                self.settings.remember.email.clear();
                self.settings.remember.password = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_and_forget() {
        let mut state = SettingsState::default();
        state.set_remembered_login(
            Some("admin@medivision.example".to_string()),
            Some("secret".to_string()),
        );
        assert!(state.settings.remember.enabled);
        assert_eq!(state.settings.remember.email, "admin@medivision.example");

        state.set_remembered_login(None, None);
        assert!(!state.settings.remember.enabled);
        assert!(state.settings.remember.email.is_empty());
        assert!(state.settings.remember.password.is_none());
    }
}
