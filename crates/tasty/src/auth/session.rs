//! Login handshake and session token management.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::client::{ApiRequest, Client};
use crate::envelope::{Envelope, decode_into};
use crate::error::{ApiError, AuthError, Error};

use super::credentials::Credentials;
use super::token::SessionToken;

const SESSIONS: &str = "sessions";

#[derive(Serialize)]
struct SessionRequest<'a> {
    login: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SessionData {
    session_token: String,
    #[serde(default)]
    user: User,
}

/// The customer a session belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct User {
    pub email: String,
    pub username: String,
    pub external_id: String,
    pub is_confirmed: bool,
}

impl Client {
    /// Log in and install the issued session token.
    ///
    /// Sends `POST /sessions` without an `Authorization` header. Only 200 and
    /// 201 count as success; on any failure the previously installed token,
    /// if any, stays in place.
    ///
    /// # Errors
    ///
    /// * [`Error::Auth`] if the API refuses the login or returns no token
    /// * [`Error::Transport`] if the API is unreachable
    /// * [`Error::Decode`] if the success body is malformed
    #[instrument(skip(self, credentials), fields(login = %credentials.login()))]
    pub async fn authenticate(&self, credentials: Credentials) -> Result<User, Error> {
        info!("Creating new session");

        let body = SessionRequest {
            login: credentials.login(),
            password: credentials.password(),
        };
        let request = ApiRequest::post(self.endpoint([SESSIONS]), &body)?.unauthenticated();
        let response = self.execute(request).await?;

        if !matches!(response.status, 200 | 201) {
            let detail = ApiError::from_body(response.status, &response.body);
            warn!(status = response.status, "login rejected");
            return Err(AuthError::Rejected {
                status: response.status,
                message: detail.message,
            }
            .into());
        }

        let envelope: Envelope<SessionData> = decode_into(&response.body)?;
        let token = SessionToken::new(envelope.data.session_token);
        if token.is_empty() {
            return Err(AuthError::MissingToken.into());
        }
        token.header_value()?;

        *self.token_slot().write().await = Some(token);
        debug!(user = %envelope.data.user.username, "Session created successfully");

        Ok(envelope.data.user)
    }

    /// Install a token obtained earlier, replacing any current one.
    pub async fn set_session_token(&self, token: SessionToken) -> Result<(), Error> {
        token.header_value()?;
        *self.token_slot().write().await = Some(token);
        Ok(())
    }

    /// Whether a session token is installed.
    pub async fn is_authenticated(&self) -> bool {
        self.token_slot().read().await.is_some()
    }

    /// The raw session token, for persisting a session between runs.
    ///
    /// # Security
    ///
    /// The returned string grants account access. Store it with restrictive
    /// permissions and never log it.
    pub async fn export_session_token(&self) -> Option<String> {
        self.token_slot()
            .read()
            .await
            .as_ref()
            .map(|t| t.as_str().to_string())
    }
}
