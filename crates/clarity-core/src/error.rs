//! Error types for the Clarity application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback shown to the user when a service failure carries no message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// A shared error type for the entire Clarity application.
///
/// Variants follow the failure taxonomy of the analyzer: input validation,
/// service failures and local storage/configuration problems. Storage
/// corruption never reaches this type; state cells discard it and fall back
/// to their defaults.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ClarityError {
    /// Input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// An analysis request is already outstanding
    #[error("An analysis is already in progress")]
    Busy,

    /// Upstream analysis failure (HTTP error, rate limit, quota, malformed reply)
    #[error("Analysis service error: {message}")]
    Service {
        status: Option<u16>,
        message: String,
    },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClarityError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Service error without an HTTP status
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a Service error carrying the upstream HTTP status
    pub fn service_with_status(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Message suitable for a dismissible user notification.
    ///
    /// Validation and service errors carry their message verbatim; a service
    /// error without a message falls back to [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Service { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Service { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            Self::Busy => "Please wait for the current analysis to finish.".to_string(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ClarityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ClarityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ClarityError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ClarityError>`.
pub type Result<T> = std::result::Result<T, ClarityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_passes_service_message_through() {
        let err = ClarityError::service_with_status(429, "Rate limit exceeded.");
        assert_eq!(err.user_message(), "Rate limit exceeded.");
    }

    #[test]
    fn test_user_message_falls_back_for_empty_service_message() {
        let err = ClarityError::service("  ");
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ClarityError = io.into();
        assert!(matches!(err, ClarityError::Io { .. }));
    }
}
