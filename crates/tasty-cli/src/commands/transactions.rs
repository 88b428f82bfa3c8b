//! Transactions command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use tasty::TransactionQuery;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct TransactionsArgs {
    /// Account number, e.g. 5WT00001
    #[arg(long)]
    pub account: String,

    /// Earliest transaction date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Latest transaction date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Only transactions in this symbol
    #[arg(long)]
    pub symbol: Option<String>,

    /// Only transactions of this type, e.g. Trade
    #[arg(long = "type")]
    pub transaction_type: Option<String>,

    /// Sort order by execution time: Asc or Desc
    #[arg(long)]
    pub sort: Option<String>,

    /// Records per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Page to fetch, starting at 0
    #[arg(long)]
    pub page_offset: Option<u32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl TransactionsArgs {
    fn query(&self) -> TransactionQuery {
        TransactionQuery {
            start_date: self.start_date,
            end_date: self.end_date,
            symbol: self.symbol.clone(),
            transaction_type: self.transaction_type.clone(),
            sort: self.sort.clone(),
            per_page: self.per_page,
            page_offset: self.page_offset,
            ..Default::default()
        }
    }
}

pub async fn run(args: TransactionsArgs) -> Result<()> {
    let account = session::account(&args.account)?;
    let session = session::require().await?;

    let page = session
        .client
        .transactions(&account, &args.query())
        .await
        .with_context(|| format!("Failed to fetch transactions for {account}"))?;

    let count = output::json_lines(&page.data.items, args.pretty)?;
    if count == 0 {
        output::note("No transactions found.");
    }

    if let Some(pagination) = &page.pagination {
        eprintln!();
        eprintln!(
            "{}: {} of {} (page {} of {})",
            "Showing".dimmed(),
            count,
            pagination.total_items,
            pagination.page_offset.saturating_add(1),
            pagination.total_pages.max(1),
        );
        if pagination.has_next() {
            eprintln!(
                "{}: --page-offset {}",
                "Next page".dimmed(),
                pagination.page_offset.saturating_add(1)
            );
        }
    }

    Ok(())
}
