//! Settings Store - Local Settings Persistence
//!
//! Loads and saves `settings.toml` in the platform config directory. The
//! remembered login password is encrypted before it touches disk.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::domain::settings::AppSettings;
use crate::error::Result;
use crate::utils::fs::get_or_create_config_dir;
use crate::utils::secret::{decrypt, encrypt};

const SETTINGS_FILE: &str = "settings.toml";

fn settings_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(SETTINGS_FILE);

    #[cfg(debug_assertions)]
    info!("Settings file: {}", path.display());

    Ok(path)
}

/// Encrypt the remembered password for storage
fn seal_remembered(mut settings: AppSettings) -> Result<AppSettings> {
    if let Some(password) = &settings.remember.password {
        if !password.is_empty() {
            settings.remember.password = Some(encrypt(password)?);
        }
    }
    Ok(settings)
}

/// Decrypt the remembered password after loading.
///
/// A value that fails to decrypt is dropped rather than handed to the login
/// form as ciphertext.
fn open_remembered(mut settings: AppSettings) -> AppSettings {
    if let Some(password) = &settings.remember.password {
        settings.remember.password = decrypt(password).ok();
    }
    settings
}

/// Load settings from disk, falling back to defaults for a missing file
pub fn load_settings() -> Result<AppSettings> {
    let path = settings_path()?;

    if !path.exists() {
        return Ok(AppSettings::default());
    }

    let value = fs::read_to_string(&path)?;
    if value.trim().is_empty() {
        return Ok(AppSettings::default());
    }

    let settings: AppSettings = toml::from_str(&value)?;
    Ok(open_remembered(settings))
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    let sealed = seal_remembered(settings.clone())?;
    let path = settings_path()?;
    let content = toml::to_string_pretty(&sealed)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_then_open_round_trips_password() {
        let mut settings = AppSettings::default();
        settings.remember.enabled = true;
        settings.remember.password = Some("secret123".to_string());

        let sealed = seal_remembered(settings).unwrap();
        assert_ne!(sealed.remember.password.as_deref(), Some("secret123"));

        let opened = open_remembered(sealed);
        assert_eq!(opened.remember.password.as_deref(), Some("secret123"));
    }

    #[test]
    fn test_open_drops_undecryptable_password() {
        let mut settings = AppSettings::default();
        settings.remember.password = Some("plainly not ciphertext".to_string());

        let opened = open_remembered(settings);
        assert!(opened.remember.password.is_none());
    }

    #[test]
    fn test_seal_keeps_empty_password() {
        let mut settings = AppSettings::default();
        settings.remember.password = Some(String::new());

        let sealed = seal_remembered(settings).unwrap();
        assert_eq!(sealed.remember.password.as_deref(), Some(""));
    }
}
