//! Core error types for localtime-rs.
//!
//! The synthesis pass itself never fails: a field name missing from the schema
//! is a normal outcome, not an error. [`AdminError`] covers the surrounding
//! machinery instead: settings loading, admin registration, and serialization.

use thiserror::Error;

/// The primary error type for localtime-rs.
#[derive(Error, Debug)]
pub enum AdminError {
    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The admin layer is improperly configured.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Registration ─────────────────────────────────────────────────

    /// A record type was registered twice under the same model key.
    #[error("The model {0} is already registered")]
    AlreadyRegistered(String),

    /// A lookup referenced a model key that was never registered.
    #[error("The model {0} is not registered")]
    NotRegistered(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AdminError {
    /// Returns `true` for errors caused by configuration rather than runtime state.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError(_) | Self::ImproperlyConfigured(_)
        )
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, AdminError>`.
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_error_display() {
        let err = AdminError::AlreadyRegistered("example.amodel1".into());
        assert_eq!(
            err.to_string(),
            "The model example.amodel1 is already registered"
        );

        let err = AdminError::NotRegistered("blog.post".into());
        assert_eq!(err.to_string(), "The model blog.post is not registered");
    }

    #[test]
    fn test_is_configuration() {
        assert!(AdminError::ConfigurationError("x".into()).is_configuration());
        assert!(AdminError::ImproperlyConfigured("x".into()).is_configuration());
        assert!(!AdminError::NotRegistered("x".into()).is_configuration());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AdminError = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: AdminError = json_err.into();
        assert!(matches!(err, AdminError::SerializationError(_)));
    }
}
