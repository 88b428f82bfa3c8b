//! Session storage for persisting login state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use tasty::{ApiUrl, Client, SessionToken, User};

use super::CliSession;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_version: Option<String>,
    session_token: String,
    username: String,
    email: String,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "tasty").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save the client's session to disk.
pub async fn save_session(client: &Client, user: &User) -> Result<()> {
    let session_token = client
        .export_session_token()
        .await
        .context("Client has no session token")?;

    let stored = StoredSession {
        base_url: client.base_url().to_string(),
        api_version: client.api_version().map(str::to_string),
        session_token,
        username: user.username.clone(),
        email: user.email.clone(),
    };

    let path = session_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write session file")?;

    // The file holds a live token
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load a session from disk.
pub async fn load_session() -> Result<Option<CliSession>> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    let base_url = ApiUrl::new(&stored.base_url).context("Invalid API URL in session")?;

    let mut builder = Client::builder()
        .base_url(base_url)
        .session_token(SessionToken::new(stored.session_token));
    if let Some(version) = stored.api_version {
        builder = builder.api_version(version);
    }
    let client = builder.build().context("Invalid session file")?;

    Ok(Some(CliSession {
        client,
        username: stored.username,
        email: stored.email,
    }))
}

/// Clear the stored session. Returns whether there was one.
pub async fn clear_session() -> Result<bool> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove session file")?;
    Ok(true)
}
