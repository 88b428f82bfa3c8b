//! Persisted login state.

pub mod storage;

use anyhow::{Context, Result};
use tasty::{AccountNumber, Client};

/// A restored session: an authenticated client plus who it belongs to.
#[derive(Debug)]
pub struct CliSession {
    pub client: Client,
    pub username: String,
    pub email: String,
}

/// Load the stored session or explain how to create one.
pub async fn require() -> Result<CliSession> {
    storage::load_session()
        .await
        .context("Failed to load session")?
        .context("No active session. Run 'tasty login' first.")
}

/// Parse an account number given on the command line.
pub fn account(raw: &str) -> Result<AccountNumber> {
    AccountNumber::new(raw).with_context(|| format!("Invalid account number '{raw}'"))
}
