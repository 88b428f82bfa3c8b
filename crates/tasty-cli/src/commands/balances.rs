//! Balances command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct BalancesArgs {
    /// Account number, e.g. 5WT00001
    #[arg(long)]
    pub account: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: BalancesArgs) -> Result<()> {
    let account = session::account(&args.account)?;
    let session = session::require().await?;

    let balances = session
        .client
        .balances(&account)
        .await
        .with_context(|| format!("Failed to fetch balances for {account}"))?;

    if args.pretty {
        output::json_pretty(&balances.data)
    } else {
        output::json(&balances.data)
    }
}
