//! HTTP transport core.
//!
//! Every accessor funnels through [`Client::request`]: build the URL, attach
//! the session token and the optional `Accept-Version` header, send, classify
//! the status, hand back the body. Nothing is retried.

mod query;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, instrument, trace};
use url::Url;

use crate::auth::SessionToken;
use crate::envelope::{self, ItemList};
use crate::error::{ApiError, Error, InvalidInputError, TransportError};
use crate::types::ApiUrl;

pub use query::QueryParams;

/// Timeout applied to every request unless overridden on the builder.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ACCEPT_VERSION: HeaderName = HeaderName::from_static("accept-version");
const USER_AGENT: &str = concat!("tasty/", env!("CARGO_PKG_VERSION"));

/// Handle to the brokerage API.
///
/// Holds the base URL, the HTTP connection pool, the optional API version
/// and the session token. Cheap to clone; clones share the token, so a login
/// through one clone authenticates them all.
///
/// # Example
///
/// ```no_run
/// use tasty::{AccountNumber, Client, Credentials};
///
/// # async fn example() -> Result<(), tasty::Error> {
/// let client = Client::builder().api_version("20250715").build()?;
/// client
///     .authenticate(Credentials::new("trader@example.com", "password"))
///     .await?;
///
/// let account = AccountNumber::new("5WT00001")?;
/// let balances = client.balances(&account).await?;
/// println!("net liq: {}", balances.data.net_liquidating_value);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base: ApiUrl,
    api_version: Option<String>,
    timeout: Duration,
    token: RwLock<Option<SessionToken>>,
}

/// Builder for [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    base: ApiUrl,
    api_version: Option<String>,
    timeout: Duration,
    token: Option<SessionToken>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base: ApiUrl::production(),
            api_version: None,
            timeout: DEFAULT_TIMEOUT,
            token: None,
        }
    }
}

impl ClientBuilder {
    /// Point the client at a different API host.
    pub fn base_url(mut self, base: ApiUrl) -> Self {
        self.base = base;
        self
    }

    /// Point the client at the certification sandbox.
    pub fn sandbox(self) -> Self {
        self.base_url(ApiUrl::sandbox())
    }

    /// API version sent as `Accept-Version` on instrument endpoints.
    /// An empty string means no header.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        let version = version.trim();
        self.api_version = (!version.is_empty()).then(|| version.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start out authenticated with a previously issued token.
    pub fn session_token(mut self, token: SessionToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        if let Some(version) = &self.api_version {
            HeaderValue::from_str(version).map_err(|e| InvalidInputError::Other {
                message: format!("API version '{version}' is not a valid header value: {e}"),
            })?;
        }
        if let Some(token) = &self.token {
            token.header_value()?;
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(|e| TransportError::Http {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http,
                base: self.base,
                api_version: self.api_version,
                timeout: self.timeout,
                token: RwLock::new(self.token),
            }),
        })
    }
}

/// A single API call, before it is sent.
#[derive(Clone)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    body: Option<serde_json::Value>,
    versioned: bool,
    authenticated: bool,
}

impl ApiRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
            versioned: false,
            authenticated: true,
        }
    }

    pub fn post<B: Serialize>(url: Url, body: &B) -> Result<Self, Error> {
        let body = serde_json::to_value(body).map_err(|e| InvalidInputError::Other {
            message: format!("cannot serialize request body: {e}"),
        })?;
        Ok(Self {
            method: Method::POST,
            url,
            body: Some(body),
            versioned: false,
            authenticated: true,
        })
    }

    /// Mark as an instrument endpoint so `Accept-Version` is attached.
    pub fn versioned(mut self) -> Self {
        self.versioned = true;
        self
    }

    /// Never attach the session token, even if one is installed.
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

// Bodies can hold credentials; keep them out of debug output.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("has_body", &self.body.is_some())
            .field("versioned", &self.versioned)
            .field("authenticated", &self.authenticated)
            .finish()
    }
}

/// Status and body of a completed call.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Decode the body directly into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(envelope::decode_into(&self.body)?)
    }

    /// Decode the body as a list of uncertain shape.
    pub fn decode_items<T: DeserializeOwned>(&self) -> Result<ItemList<T>, Error> {
        Ok(envelope::decode_items(&self.body)?)
    }
}

impl Client {
    /// A client for the production API with default settings.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &ApiUrl {
        &self.inner.base
    }

    pub fn api_version(&self) -> Option<&str> {
        self.inner.api_version.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Absolute URL for the given path segments under the base URL.
    pub fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.inner.base.endpoint(segments)
    }

    pub(crate) fn token_slot(&self) -> &RwLock<Option<SessionToken>> {
        &self.inner.token
    }

    /// Send a request and classify the response status.
    ///
    /// # Errors
    ///
    /// * [`Error::Transport`] if no response arrived within the timeout
    /// * [`Error::Client`] for 4xx, [`Error::Server`] for 5xx
    pub async fn request(&self, request: ApiRequest) -> Result<RawResponse, Error> {
        let response = self.execute(request).await?;
        match response.status {
            400..=499 => Err(Error::Client(ApiError::from_body(
                response.status,
                &response.body,
            ))),
            500.. => Err(Error::Server(ApiError::from_body(
                response.status,
                &response.body,
            ))),
            _ => Ok(response),
        }
    }

    /// Send a request and return whatever came back, without looking at the
    /// status.
    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(method = %request.method, path = %request.url.path())
    )]
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error> {
        let ApiRequest {
            method,
            url,
            body,
            versioned,
            authenticated,
        } = request;

        let mut builder = self.inner.http.request(method, url);

        if authenticated && let Some(token) = self.inner.token.read().await.as_ref() {
            builder = builder.header(AUTHORIZATION, token.header_value()?);
        }

        if versioned && let Some(version) = &self.inner.api_version {
            let value = HeaderValue::from_str(version).map_err(|e| InvalidInputError::Other {
                message: format!("API version is not a valid header value: {e}"),
            })?;
            builder = builder.header(ACCEPT_VERSION, value);
        }

        if let Some(body) = &body {
            builder = builder.json(body);
        }

        debug!(versioned, "sending request");

        let timeout = self.inner.timeout;
        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, timeout))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(e, timeout))?;

        trace!(status, bytes = body.len(), "response received");

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, url: Url) -> Result<R, Error> {
        self.request(ApiRequest::get(url)).await?.decode()
    }

    pub(crate) async fn get_versioned<R: DeserializeOwned>(&self, url: Url) -> Result<R, Error> {
        self.request(ApiRequest::get(url).versioned())
            .await?
            .decode()
    }

    pub(crate) async fn get_items<T: DeserializeOwned>(
        &self,
        url: Url,
        versioned: bool,
    ) -> Result<ItemList<T>, Error> {
        let mut request = ApiRequest::get(url);
        if versioned {
            request = request.versioned();
        }
        self.request(request).await?.decode_items()
    }

    pub(crate) async fn post<B, R>(&self, url: Url, body: &B) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.request(ApiRequest::post(url, body)?).await?.decode()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base", &self.inner.base.as_str())
            .field("api_version", &self.inner.api_version)
            .field("timeout", &self.inner.timeout)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_production() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url(), &ApiUrl::production());
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
        assert!(client.api_version().is_none());
    }

    #[test]
    fn blank_api_version_means_none() {
        let client = Client::builder().api_version("  ").build().unwrap();
        assert!(client.api_version().is_none());

        let client = Client::builder().api_version("20250715").build().unwrap();
        assert_eq!(client.api_version(), Some("20250715"));
    }

    #[test]
    fn builder_rejects_header_unsafe_token() {
        let result = Client::builder()
            .session_token(SessionToken::new("bad\ntoken"))
            .build();
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn debug_never_prints_request_body() {
        let url = ApiUrl::production().endpoint(["sessions"]);
        let request =
            ApiRequest::post(url, &serde_json::json!({"password": "hunter2"})).unwrap();
        let debug = format!("{request:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("has_body: true"));
    }

    #[test]
    fn raw_response_decodes_body() {
        let raw = RawResponse {
            status: 200,
            body: br#"{"data":{"items":[1,2,3]}}"#.to_vec(),
        };
        let list: ItemList<u32> = raw.decode_items().unwrap();
        assert_eq!(list.items, vec![1, 2, 3]);
        assert!(matches!(raw.decode::<Vec<u32>>(), Err(Error::Decode(_))));
    }
}
