//! ProfileState - Signed-In Profile Form State

use crate::domain::user::{User, UserUpdate};
use crate::utils::format::to_ymd;

/// State for the profile page form and its image actions
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    /// Form fields
    pub name: String,
    pub phone: String,
    pub gender: String,
    pub date_of_birth: String,
    /// Typed path for a new avatar image
    pub avatar_path: String,
    /// Typed path for a new cover photo
    pub cover_path: String,
    /// Save request in flight
    pub saving: bool,
    /// Avatar or cover request in flight
    pub uploading: bool,
}

impl ProfileState {
    /// Populate the form from the signed-in profile
    pub fn load_from(&mut self, user: &User) {
        self.name = user.name.clone();
        self.phone = user.phone.clone().unwrap_or_default();
        self.gender = user.gender.clone().unwrap_or_default();
        self.date_of_birth = user
            .date_of_birth
            .as_deref()
            .and_then(to_ymd)
            .unwrap_or_default();
        self.avatar_path.clear();
        self.cover_path.clear();
        self.saving = false;
        self.uploading = false;
    }

    /// JSON body for the profile update call, blanks omitted
    pub fn update_payload(&self) -> UserUpdate {
        let field = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        UserUpdate {
            name: field(&self.name),
            phone: field(&self.phone),
            gender: field(&self.gender),
            date_of_birth: to_ymd(&self.date_of_birth),
            ..Default::default()
        }
    }

    pub fn save_started(&mut self) {
        self.saving = true;
    }

    pub fn save_finished(&mut self) {
        self.saving = false;
    }

    pub fn upload_started(&mut self) {
        self.uploading = true;
    }

    pub fn upload_finished(&mut self) {
        self.uploading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_normalizes_dob() {
        let user = User {
            name: "Farhana Akter".to_string(),
            phone: Some("+8801712345678".to_string()),
            date_of_birth: Some("1992-07-14T00:00:00.000Z".to_string()),
            ..Default::default()
        };
        let mut state = ProfileState::default();
        state.load_from(&user);
        assert_eq!(state.name, "Farhana Akter");
        assert_eq!(state.date_of_birth, "1992-07-14");
        assert_eq!(state.gender, "");
    }

    #[test]
    fn test_payload_keeps_email_and_role_untouched() {
        let state = ProfileState {
            name: "Farhana".to_string(),
            gender: "female".to_string(),
            ..Default::default()
        };
        let payload = state.update_payload();
        assert_eq!(payload.name.as_deref(), Some("Farhana"));
        assert_eq!(payload.gender.as_deref(), Some("female"));
        // The profile form never edits these.
        assert!(payload.email.is_none());
        assert!(payload.location.is_none());
        assert!(payload.bio.is_none());
    }

    #[test]
    fn test_reload_clears_pending_paths() {
        let mut state = ProfileState {
            avatar_path: "/tmp/me.png".to_string(),
            uploading: true,
            ..Default::default()
        };
        state.load_from(&User::default());
        assert!(state.avatar_path.is_empty());
        assert!(!state.uploading);
    }
}
