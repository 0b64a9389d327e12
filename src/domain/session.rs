//! Session - Login Request and Admin Session

use serde::{Deserialize, Serialize};

use crate::domain::user::User;
use crate::error::{Error, Result};

/// Credentials for `POST /auth/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are required before a request goes out
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(Error::Invalid {
                message: "Email and password are required".to_string(),
            });
        }
        Ok(())
    }
}

/// Body of a successful `POST /auth/login` response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// The account the credentials belong to
    pub user: User,
}

/// An authenticated admin session.
///
/// The cookie itself lives in the HTTP client's jar; this is the profile the
/// backend returned for it.
#[derive(Debug, Clone)]
pub struct Session {
    /// The signed-in admin's profile
    pub profile: User,
}

impl Session {
    /// Accept only admin accounts, mirroring the dashboard's access rule
    pub fn for_admin(profile: User) -> Result<Self> {
        if !profile.is_admin() {
            return Err(Error::Invalid {
                message: "Access denied. Admin privileges required.".to_string(),
            });
        }
        Ok(Self { profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::ROLE_ADMIN;

    #[test]
    fn test_login_request_validation() {
        assert!(LoginRequest::default().validate().is_err());
        assert!(LoginRequest::new("admin@example.com", "").validate().is_err());
        assert!(LoginRequest::new("  ", "secret").validate().is_err());
        assert!(
            LoginRequest::new("admin@example.com", "secret")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_session_rejects_non_admin() {
        let user = User::default();
        assert!(Session::for_admin(user).is_err());

        let admin = User {
            role: ROLE_ADMIN.to_string(),
            ..Default::default()
        };
        assert!(Session::for_admin(admin).is_ok());
    }

    #[test]
    fn test_login_request_serializes_plain_fields() {
        let request = LoginRequest::new("admin@example.com", "secret");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "admin@example.com");
        assert_eq!(value["password"], "secret");
    }

    #[test]
    fn test_login_response_unwraps_user_envelope() {
        let response: LoginResponse = serde_json::from_value(serde_json::json!({
            "user": {
                "id": "usr-001",
                "name": "Farhana Akter",
                "email": "farhana@example.com",
                "role": "admin"
            }
        }))
        .unwrap();
        assert_eq!(response.user.email, "farhana@example.com");
        assert!(response.user.is_admin());
    }
}
