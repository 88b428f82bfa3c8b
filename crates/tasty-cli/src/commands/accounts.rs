//! Accounts command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct AccountsArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: AccountsArgs) -> Result<()> {
    let session = session::require().await?;

    let accounts = session
        .client
        .accounts()
        .await
        .context("Failed to list accounts")?;

    if accounts.data.items.is_empty() {
        output::note("No accounts found.");
        return Ok(());
    }

    output::json_lines(&accounts.data.items, args.pretty)?;
    Ok(())
}
