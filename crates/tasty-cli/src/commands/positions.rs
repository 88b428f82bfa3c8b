//! Positions command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct PositionsArgs {
    /// Account number, e.g. 5WT00001
    #[arg(long)]
    pub account: String,

    /// Only show one instrument type, e.g. "Future Option"
    #[arg(long)]
    pub instrument_type: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: PositionsArgs) -> Result<()> {
    let account = session::account(&args.account)?;
    let session = session::require().await?;

    let positions = session
        .client
        .positions(&account)
        .await
        .with_context(|| format!("Failed to fetch positions for {account}"))?;

    let shown: Vec<_> = positions
        .data
        .items
        .iter()
        .filter(|p| match &args.instrument_type {
            Some(wanted) => p.instrument_type.as_str().eq_ignore_ascii_case(wanted),
            None => true,
        })
        .collect();

    if shown.is_empty() {
        output::note("No positions found.");
        return Ok(());
    }

    output::json_lines(shown, args.pretty)?;
    Ok(())
}
