//! Authentication error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication errors
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthError {
    /// Invalid credentials provided
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token-related errors
    #[error("Token error: {message}")]
    TokenError { message: String },

    /// Session-related errors
    #[error("Session error: {message}")]
    SessionError { message: String },

    /// No credential provider registered under the requested id
    #[error("Unknown credential provider: {provider}")]
    ProviderNotFound { provider: String },

    /// Configuration errors
    #[error("Authentication configuration error: {message}")]
    ConfigurationError { message: String },

    /// Generic authentication error
    #[error("Authentication error: {message}")]
    Generic { message: String },
}

impl AuthError {
    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::TokenError { .. } => "TOKEN_ERROR",
            AuthError::SessionError { .. } => "SESSION_ERROR",
            AuthError::ProviderNotFound { .. } => "PROVIDER_NOT_FOUND",
            AuthError::ConfigurationError { .. } => "CONFIGURATION_ERROR",
            AuthError::Generic { .. } => "AUTHENTICATION_ERROR",
        }
    }

    /// Get HTTP status code for the error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 401,
            AuthError::TokenError { .. } => 401,
            AuthError::SessionError { .. } => 401,
            AuthError::ProviderNotFound { .. } => 400,
            AuthError::ConfigurationError { .. } => 500,
            AuthError::Generic { .. } => 500,
        }
    }

    /// Create a token error
    pub fn token_error(message: impl Into<String>) -> Self {
        Self::TokenError {
            message: message.into(),
        }
    }

    /// Create a session error
    pub fn session_error(message: impl Into<String>) -> Self {
        Self::SessionError {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn generic_error(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.error_code(),
            "INVALID_CREDENTIALS"
        );
        assert_eq!(AuthError::token_error("test").error_code(), "TOKEN_ERROR");
        assert_eq!(
            AuthError::ProviderNotFound {
                provider: "github".to_string()
            }
            .error_code(),
            "PROVIDER_NOT_FOUND"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::session_error("test").status_code(), 401);
        assert_eq!(
            AuthError::ProviderNotFound {
                provider: "github".to_string()
            }
            .status_code(),
            400
        );
        assert_eq!(AuthError::config_error("test").status_code(), 500);
    }

    #[test]
    fn test_error_creation_helpers() {
        let token_err = AuthError::token_error("Invalid token");
        assert_eq!(
            token_err,
            AuthError::TokenError {
                message: "Invalid token".to_string()
            }
        );

        let session_err = AuthError::session_error("Session expired");
        assert_eq!(
            session_err,
            AuthError::SessionError {
                message: "Session expired".to_string()
            }
        );
    }

    #[test]
    fn test_error_display() {
        let err = AuthError::token_error("token expired");
        assert_eq!(err.to_string(), "Token error: token expired");

        let err = AuthError::ProviderNotFound {
            provider: "username-signin".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown credential provider: username-signin"
        );
    }
}
