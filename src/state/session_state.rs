//! SessionState - Signed-In Admin Session

use crate::domain::user::User;

/// State for the admin session gating the dashboard
#[derive(Debug, Default)]
pub struct SessionState {
    /// The signed-in admin, `None` while logged out
    pub user: Option<User>,
    /// Startup profile check in flight
    pub checking: bool,
    /// Login request in flight
    pub logging_in: bool,
    /// Inline error for the login form
    pub login_error: Option<String>,
}

impl SessionState {
    /// Fresh state waiting on the startup session check
    pub fn checking() -> Self {
        Self {
            checking: true,
            ..Default::default()
        }
    }

    /// Whether the dashboard is open
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Startup check finished
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.checking = false;
    }

    /// Login button pressed
    pub fn login_started(&mut self) {
        self.logging_in = true;
        self.login_error = None;
    }

    /// Login accepted
    pub fn login_succeeded(&mut self, user: User) {
        self.user = Some(user);
        self.logging_in = false;
        self.login_error = None;
    }

    /// Login rejected; keep the form open with the reason
    pub fn login_failed(&mut self, message: impl Into<String>) {
        self.user = None;
        self.logging_in = false;
        self.login_error = Some(message.into());
    }

    /// Session closed
    pub fn logged_out(&mut self) {
        self.user = None;
        self.logging_in = false;
        self.login_error = None;
    }

    /// Profile changed while signed in
    pub fn update_profile(&mut self, user: User) {
        self.user = Some(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::ROLE_ADMIN;

    fn admin() -> User {
        User {
            id: "usr-1".to_string(),
            name: "Admin".to_string(),
            email: "admin@medivision.example".to_string(),
            role: ROLE_ADMIN.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_startup_check_flow() {
        let mut state = SessionState::checking();
        assert!(state.checking);
        assert!(!state.is_authenticated());

        state.resolve(Some(admin()));
        assert!(!state.checking);
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_failed_login_keeps_form_error() {
        let mut state = SessionState::default();
        state.login_started();
        assert!(state.logging_in);

        state.login_failed("Access denied. Admin privileges required.");
        assert!(!state.logging_in);
        assert!(!state.is_authenticated());
        assert_eq!(
            state.login_error.as_deref(),
            Some("Access denied. Admin privileges required.")
        );

        // The next attempt clears the stale error.
        state.login_started();
        assert!(state.login_error.is_none());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut state = SessionState::default();
        state.login_succeeded(admin());
        assert!(state.is_authenticated());

        state.logged_out();
        assert!(!state.is_authenticated());
    }
}
