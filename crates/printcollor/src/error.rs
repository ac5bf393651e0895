//! Error types for the printcollor client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, API, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for printcollor operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (invalid credentials, terminated session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// API errors (non-success responses from the backend).
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid base URL, bad query value).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The session could not be recovered; stored credentials were cleared.
    ///
    /// Carries the authorization failure that triggered termination, so
    /// callers still see the original error.
    #[error("session terminated: {0}")]
    SessionTerminated(#[source] ApiError),

    /// No refresh token is stored, so an expired session cannot be recovered.
    #[error("refresh token missing")]
    RefreshTokenMissing,
}

/// An error response from the backend.
///
/// Django REST Framework reports errors as `{"detail": ...}` (or
/// `{"error": ...}` on some custom views); both are captured here along
/// with the HTTP status.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, if one could be parsed.
    pub detail: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }

    /// Check if this is an authorization failure.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid backend base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_with_detail() {
        let err = ApiError::new(400, Some("Senha atual incorreta".to_string()));
        assert_eq!(err.to_string(), "HTTP 400: Senha atual incorreta");
    }

    #[test]
    fn api_error_display_bare_status() {
        let err = ApiError::new(503, None);
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn only_401_is_auth_error() {
        assert!(ApiError::new(401, None).is_auth_error());
        assert!(!ApiError::new(403, None).is_auth_error());
        assert!(!ApiError::new(400, None).is_auth_error());
    }
}
