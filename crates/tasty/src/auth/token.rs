//! Session token type.

use std::fmt;

use reqwest::header::HeaderValue;

use crate::error::{Error, InvalidInputError};

/// The opaque token issued by the sessions endpoint.
///
/// Sent verbatim as the `Authorization` header value. Never printed by
/// `Debug`; there is no expiry tracking, an expired token shows up as a
/// 401 from the next request.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a token obtained elsewhere, e.g. restored from disk.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Header value for the `Authorization` header, marked sensitive so
    /// reqwest and hyper keep it out of their own debug output.
    pub(crate) fn header_value(&self) -> Result<HeaderValue, Error> {
        let mut value =
            HeaderValue::from_str(&self.0).map_err(|e| InvalidInputError::SessionToken {
                reason: e.to_string(),
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_hides_value_in_debug() {
        let token = SessionToken::new("abc123+session/token");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("abc123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn header_value_is_raw_token() {
        let token = SessionToken::new("abc123");
        let value = token.header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), "abc123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn header_value_rejects_newlines() {
        let token = SessionToken::new("abc\n123");
        assert!(token.header_value().is_err());
    }
}
