//! User - Account Record Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Role strings the backend understands
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// A user account as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Email address (login identity)
    pub email: String,
    /// Account role, `admin` or `user`
    pub role: String,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Gender (`male`, `female`, `other`)
    #[serde(default)]
    pub gender: Option<String>,
    /// Date of birth, ISO date or datetime string
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Avatar image filename (served under `/uploads/...`)
    #[serde(default)]
    pub image: Option<String>,
    /// Cover photo filename
    #[serde(default)]
    pub cover_photo: Option<String>,
    /// Free-form location
    #[serde(default)]
    pub location: Option<String>,
    /// Short bio
    #[serde(default)]
    pub bio: Option<String>,
    /// Created timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            role: ROLE_USER.to_string(),
            phone: None,
            gender: None,
            date_of_birth: None,
            image: None,
            cover_photo: None,
            location: None,
            bio: None,
            created_at: None,
        }
    }
}

impl User {
    /// Whether this account may use the admin dashboard
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Uppercase first letter of the name, for avatar placeholders
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Editable account fields, the JSON body for user and profile updates.
///
/// `None` fields are omitted so the backend keeps their current values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl UserUpdate {
    /// Require the fields the users editor requires
    pub fn validate(&self) -> Result<()> {
        if self.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            return Err(Error::Invalid {
                message: "Name is required".to_string(),
            });
        }
        if self.email.as_deref().is_none_or(|e| e.trim().is_empty()) {
            return Err(Error::Invalid {
                message: "Email is required".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_backend_shape() {
        let user: User = serde_json::from_value(json!({
            "id": "usr-042",
            "name": "Farhana Akter",
            "email": "farhana@example.com",
            "role": "admin",
            "phone": "+8801712345678",
            "dateOfBirth": "1992-07-14T00:00:00.000Z",
            "coverPhoto": "cover-42.jpg",
            "createdAt": "2023-11-02T12:00:00.000Z"
        }))
        .unwrap();
        assert!(user.is_admin());
        assert_eq!(user.initial(), "F");
        assert_eq!(user.cover_photo.as_deref(), Some("cover-42.jpg"));
        assert!(user.bio.is_none());
    }

    #[test]
    fn test_unknown_role_is_not_admin() {
        let user: User = serde_json::from_value(json!({
            "id": "usr-001",
            "name": "x",
            "email": "x@example.com",
            "role": "moderator"
        }))
        .unwrap();
        assert!(!user.is_admin());
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = UserUpdate {
            name: Some("Farhana Akter".to_string()),
            email: Some("farhana@example.com".to_string()),
            date_of_birth: Some("1992-07-14".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["name"], "Farhana Akter");
        assert_eq!(value["dateOfBirth"], "1992-07-14");
        assert!(value.get("phone").is_none());
        assert!(value.get("bio").is_none());
    }

    #[test]
    fn test_update_validation_requires_name_and_email() {
        let mut update = UserUpdate::default();
        assert!(update.validate().is_err());

        update.name = Some("Farhana".to_string());
        assert!(update.validate().is_err());

        update.email = Some("farhana@example.com".to_string());
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_empty_name_initial() {
        let user = User::default();
        assert_eq!(user.initial(), "?");
    }
}
