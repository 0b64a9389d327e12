//! Settings - Application Configuration

use serde::{Deserialize, Serialize};

/// Default backend base URL, overridable via `MEDIVISION_API_URL`
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Main application settings, persisted as `settings.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Backend connection settings
    pub api: ApiSettings,
    /// UI settings
    pub ui: UiSettings,
    /// Remembered login form values
    pub remember: RememberSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// REST backend base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Interface language code ("en" or "bn")
    pub locale: String,
    /// Whether the activity log panel starts expanded
    pub log_panel_expanded: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            log_panel_expanded: false,
        }
    }
}

/// Remembered login form values
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RememberSettings {
    /// Whether to pre-fill the login form
    pub enabled: bool,
    /// Remembered email
    pub email: String,
    /// Remembered password (encrypted at rest)
    pub password: Option<String>,
}

impl AppSettings {
    /// Effective base URL, letting the environment override the stored one
    pub fn effective_base_url(&self) -> String {
        std::env::var("MEDIVISION_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.api.base_url.clone())
            .trim_end_matches('/')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.api.base_url, "http://localhost:3000");
        assert_eq!(settings.api.timeout_secs, 30);
        assert_eq!(settings.ui.locale, "en");
        assert!(!settings.remember.enabled);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut settings = AppSettings::default();
        settings.api.base_url = "https://api.medivision.example".to_string();
        settings.remember.enabled = true;
        settings.remember.email = "admin@medivision.example".to_string();

        let text = toml::to_string_pretty(&settings).unwrap();
        let back: AppSettings = toml::from_str(&text).unwrap();
        assert_eq!(back.api.base_url, "https://api.medivision.example");
        assert!(back.remember.enabled);
        assert_eq!(back.remember.email, "admin@medivision.example");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let settings = AppSettings {
            api: ApiSettings {
                base_url: "http://localhost:3000/".to_string(),
                timeout_secs: 30,
            },
            ..Default::default()
        };
        // Only meaningful when the env override is unset, which is the
        // normal case under test.
        if std::env::var("MEDIVISION_API_URL").is_err() {
            assert_eq!(settings.effective_base_url(), "http://localhost:3000");
        }
    }
}
