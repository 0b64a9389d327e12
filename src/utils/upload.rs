//! Upload - Local Image File Validation
//!
//! Checks applied to a picked file before any bytes leave the machine,
//! matching the backend's upload limits.

use std::path::Path;

use crate::error::{Error, Result};

/// Upload size cap enforced by the backend
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Accepted image file extensions
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "jfif"];

/// Whether the path carries an accepted image extension
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Reject files over the upload cap
pub fn validate_size(bytes: u64) -> Result<()> {
    if bytes > MAX_IMAGE_BYTES {
        return Err(Error::Invalid {
            message: "Image must be less than 5MB".to_string(),
        });
    }
    Ok(())
}

/// Full pre-upload check: the file exists, looks like an image, and fits
/// the size cap.
pub fn validate_image(path: &Path) -> Result<()> {
    if !has_image_extension(path) {
        return Err(Error::Invalid {
            message: "Please select an image file (JPG, PNG, GIF, WEBP)".to_string(),
        });
    }

    let metadata = std::fs::metadata(path).map_err(|_| Error::Invalid {
        message: format!("File not found: {}", path.display()),
    })?;

    if !metadata.is_file() {
        return Err(Error::Invalid {
            message: format!("Not a file: {}", path.display()),
        });
    }

    validate_size(metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_allowlist() {
        assert!(has_image_extension(Path::new("napa.jpg")));
        assert!(has_image_extension(Path::new("/tmp/photo.JPEG")));
        assert!(has_image_extension(Path::new("scan.webp")));
        assert!(has_image_extension(Path::new("old.jfif")));
        assert!(!has_image_extension(Path::new("report.pdf")));
        assert!(!has_image_extension(Path::new("noextension")));
    }

    #[test]
    fn test_size_cap() {
        assert!(validate_size(0).is_ok());
        assert!(validate_size(MAX_IMAGE_BYTES).is_ok());
        let err = validate_size(MAX_IMAGE_BYTES + 1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid: Image must be less than 5MB");
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/definitely/not/here.png");
        let err = validate_image(&path).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_wrong_extension_rejected_before_fs_lookup() {
        let err = validate_image(Path::new("/also/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("select an image file"));
    }

    #[test]
    fn test_real_file_passes() {
        let path = std::env::temp_dir().join(format!("mv-admin-test-{}.png", uuid::Uuid::new_v4()));
        std::fs::write(&path, b"not really a png, size is what matters").unwrap();
        assert!(validate_image(&path).is_ok());
        let _ = std::fs::remove_file(&path);
    }
}
