//! Quotes command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use tasty::QuoteQuery;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct QuotesArgs {
    /// Equity symbols, comma-separated or repeated
    #[arg(long, value_delimiter = ',')]
    pub equity: Vec<String>,

    /// Equity option OCC symbols
    #[arg(long, value_delimiter = ',')]
    pub equity_option: Vec<String>,

    /// Index symbols, e.g. SPX
    #[arg(long, value_delimiter = ',')]
    pub index: Vec<String>,

    /// Futures symbols, e.g. /ESZ4
    #[arg(long, value_delimiter = ',')]
    pub future: Vec<String>,

    /// Futures option symbols
    #[arg(long, value_delimiter = ',')]
    pub future_option: Vec<String>,

    /// Cryptocurrency symbols, e.g. BTC/USD
    #[arg(long, value_delimiter = ',')]
    pub cryptocurrency: Vec<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl QuotesArgs {
    fn query(&self) -> QuoteQuery {
        QuoteQuery {
            cryptocurrencies: self.cryptocurrency.clone(),
            equities: self.equity.clone(),
            equity_options: self.equity_option.clone(),
            indices: self.index.clone(),
            futures: self.future.clone(),
            future_options: self.future_option.clone(),
        }
    }
}

pub async fn run(args: QuotesArgs) -> Result<()> {
    let query = args.query();
    if query.is_empty() {
        bail!("No symbols given. Pass at least one of --equity, --equity-option, --index, --future, --future-option or --cryptocurrency.");
    }

    let session = session::require().await?;

    let quotes = session
        .client
        .quotes(&query)
        .await
        .context("Failed to fetch quotes")?;

    let count = output::json_lines(&quotes.data.items, args.pretty)?;
    if count == 0 {
        output::note("No quotes returned.");
    }
    Ok(())
}
