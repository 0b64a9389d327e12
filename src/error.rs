//! Error types for MediVision Admin
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// HTTP transport error (connection refused, timeout, bad TLS, etc.)
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Backend rejected the request with an error response
    #[snafu(display("API error ({status}): {message}"))]
    Api { status: u16, message: String },

    /// Channel send error
    #[snafu(display("Channel send error: {message}"))]
    ChannelSend { message: String },
}

impl Error {
    /// Message suitable for a toast, mirroring the backend's own wording
    /// when it provided one.
    pub fn toast_message(&self) -> String {
        match self {
            Error::Api { message, .. } if !message.is_empty() => message.clone(),
            Error::Invalid { message } => message.clone(),
            Error::Http { source } => format!("Network error: {source}"),
            _ => "Operation failed".to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_toast_uses_backend_message() {
        let err = Error::Api {
            status: 409,
            message: "Email already in use".to_string(),
        };
        assert_eq!(err.toast_message(), "Email already in use");
    }

    #[test]
    fn test_api_error_toast_falls_back_when_empty() {
        let err = Error::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.toast_message(), "Operation failed");
    }

    #[test]
    fn test_invalid_error_display() {
        let err = Error::Invalid {
            message: "Name is required".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid: Name is required");
        assert_eq!(err.toast_message(), "Name is required");
    }
}
