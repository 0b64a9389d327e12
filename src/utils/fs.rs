//! File System Utilities
//!
//! Platform directory management for settings and log files.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "medivision", "medivision-admin").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/medivision-admin/` or `$XDG_CONFIG_HOME/medivision-admin/`
/// - **macOS**: `~/Library/Application Support/com.medivision.medivision-admin/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\medivision\medivision-admin\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the directory rotated log files are written to
///
/// Lives under the platform data dir, e.g. `~/.local/share/medivision-admin/logs/`
/// on Linux.
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let log_dir = project_dirs.data_dir().join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
