//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

/// Only the local session file is removed; the token itself expires on the
/// server's schedule.
pub async fn run(_args: LogoutArgs) -> Result<()> {
    if storage::clear_session()
        .await
        .context("Failed to clear session")?
    {
        output::success("Logged out");
    } else {
        output::note("No active session.");
    }
    Ok(())
}
