//! Error types for the tasty client.
//!
//! Every fallible operation returns [`Error`]. The variants separate failures
//! that never reached the API (transport), failures the API reported
//! (client/server status), payloads that could not be decoded, rejected
//! logins, and inputs rejected before any request was sent.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// The unified error type for tasty operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response (connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with a 4xx status.
    #[error("client error: {0}")]
    Client(ApiError),

    /// The API answered with a 5xx status.
    #[error("server error: {0}")]
    Server(ApiError),

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The login handshake was refused.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input rejected before a request was made.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// HTTP status attached to this error, if the API produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Client(err) | Error::Server(err) => Some(err.status),
            Error::Auth(AuthError::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Whether re-authenticating could fix this error.
    ///
    /// True for rejected logins and for 401/403 responses, which is how an
    /// expired session token surfaces.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Auth(_) => true,
            Error::Client(err) => err.is_auth_error(),
            _ => false,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl TransportError {
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
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

/// An error status returned by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code from the body, if any.
    pub code: Option<String>,
    /// Human-readable message from the body, if any.
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Build from a raw error body, keeping only the status when the body is
    /// not the API's `{"error": {"code", "message"}}` document.
    pub(crate) fn from_body(status: u16, body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct ErrorDocument {
            error: ErrorDetail,
        }

        #[derive(Deserialize)]
        struct ErrorDetail {
            #[serde(default)]
            code: Option<String>,
            #[serde(default)]
            message: Option<String>,
        }

        match serde_json::from_slice::<ErrorDocument>(body) {
            Ok(doc) => Self::new(status, doc.error.code, doc.error.message),
            Err(_) => Self::new(status, None, None),
        }
    }

    /// Check if this status indicates a missing or expired session.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// A response body that could not be decoded into the requested type.
#[derive(Debug, Error)]
#[error("cannot decode response as {target}: {source}")]
pub struct DecodeError {
    /// Name of the Rust type the body was decoded into.
    pub target: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new<T>(source: serde_json::Error) -> Self {
        Self {
            target: std::any::type_name::<T>(),
            source,
        }
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The sessions endpoint answered with something other than 200 or 201.
    #[error("login rejected with HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The login succeeded but no session token came back.
    #[error("login response did not include a session token")]
    MissingToken,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid account number.
    #[error("invalid account number '{value}': {reason}")]
    AccountNumber { value: String, reason: String },

    /// The session token cannot be carried in an HTTP header.
    #[error("invalid session token: {reason}")]
    SessionToken { reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_parses_error_document() {
        let body = br#"{"error":{"code":"not_found","message":"Account not found"}}"#;
        let err = ApiError::from_body(404, body);
        assert_eq!(err.code.as_deref(), Some("not_found"));
        assert_eq!(err.to_string(), "HTTP 404 [not_found]: Account not found");
    }

    #[test]
    fn api_error_tolerates_non_json_body() {
        let err = ApiError::from_body(502, b"<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::new(502, None, None));
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn auth_errors_are_recognized() {
        assert!(Error::Client(ApiError::new(401, None, None)).is_auth_error());
        assert!(Error::Client(ApiError::new(403, None, None)).is_auth_error());
        assert!(!Error::Client(ApiError::new(404, None, None)).is_auth_error());
        assert!(!Error::Server(ApiError::new(500, None, None)).is_auth_error());
        assert!(
            Error::Auth(AuthError::Rejected {
                status: 500,
                message: None
            })
            .is_auth_error()
        );
    }

    #[test]
    fn status_is_exposed() {
        assert_eq!(Error::Server(ApiError::new(503, None, None)).status(), Some(503));
        assert_eq!(
            Error::Transport(TransportError::Timeout { duration_ms: 10 }).status(),
            None
        );
    }

    #[test]
    fn rejected_display_includes_message() {
        let err = AuthError::Rejected {
            status: 401,
            message: Some("Invalid login".into()),
        };
        assert_eq!(err.to_string(), "login rejected with HTTP 401: Invalid login");
    }
}
