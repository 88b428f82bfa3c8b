//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Production API host.
pub const PRODUCTION_URL: &str = "https://api.tastytrade.com";

/// Certification (sandbox) API host.
pub const SANDBOX_URL: &str = "https://api.cert.tastyworks.com";

/// A validated API base URL.
///
/// The URL must be absolute and use HTTPS; plain HTTP is accepted only for
/// loopback hosts so tests can point the client at a local stub server.
///
/// # Example
///
/// ```
/// use tasty::ApiUrl;
///
/// let api = ApiUrl::production();
/// assert_eq!(
///     api.endpoint(["accounts", "5WT00001", "balances"]).as_str(),
///     "https://api.tastytrade.com/accounts/5WT00001/balances"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let mut url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ApiUrl {
                value: s.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        let trimmed = url.path().trim_end_matches('/').to_string();
        url.set_path(&trimmed);

        Ok(Self(url))
    }

    /// The production endpoint.
    pub fn production() -> Self {
        Self(Url::parse(PRODUCTION_URL).expect("production URL is valid"))
    }

    /// The certification sandbox endpoint.
    pub fn sandbox() -> Self {
        Self(Url::parse(SANDBOX_URL).expect("sandbox URL is valid"))
    }

    /// Build a request URL by appending path segments.
    ///
    /// Each segment is percent-encoded on its own, so symbols containing `/`
    /// or spaces (futures and OCC option symbols) stay a single segment.
    pub fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_loopback = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_loopback) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self::production()
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str().trim_end_matches('/'))
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://api.tastytrade.com").unwrap();
        assert_eq!(api.host(), Some("api.tastytrade.com"));
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(api.host(), Some("127.0.0.1"));
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://api.tastytrade.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/sessions").is_err());
    }

    #[test]
    fn rejects_query_string() {
        assert!(ApiUrl::new("https://api.tastytrade.com?x=1").is_err());
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let api = ApiUrl::new("https://api.tastytrade.com/").unwrap();
        assert_eq!(
            api.endpoint(["sessions"]).as_str(),
            "https://api.tastytrade.com/sessions"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let api = ApiUrl::new("http://localhost:9000/proxy/").unwrap();
        assert_eq!(
            api.endpoint(["customers", "me"]).as_str(),
            "http://localhost:9000/proxy/customers/me"
        );
    }

    #[test]
    fn endpoint_escapes_symbol_segments() {
        let api = ApiUrl::production();
        assert_eq!(
            api.endpoint(["instruments", "futures", "/ESZ4"]).as_str(),
            "https://api.tastytrade.com/instruments/futures/%2FESZ4"
        );
        assert_eq!(
            api.endpoint(["instruments", "equity-options", "SPY   250117C00500000"])
                .path(),
            "/instruments/equity-options/SPY%20%20%20250117C00500000"
        );
    }

    #[test]
    fn display_has_no_trailing_slash() {
        assert_eq!(ApiUrl::sandbox().to_string(), SANDBOX_URL);
    }
}
