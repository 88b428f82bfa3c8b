//! Option chain dump command implementation.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use tracing::{debug, warn};

use tasty::models::{EquityOption, Quote};
use tasty::{Client, QuoteQuery};

use crate::output;
use crate::session;

/// Most symbols the quote endpoint takes in one request.
pub const MAX_BATCH_SIZE: usize = 100;

#[derive(Args, Debug)]
pub struct OptionChainArgs {
    /// Underlying symbol, e.g. SPX
    #[arg(long)]
    pub symbol: String,

    /// Earliest expiration to include (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Latest expiration to include (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Symbols per quote request, at most 100
    #[arg(long, default_value_t = MAX_BATCH_SIZE)]
    pub batch_size: usize,

    /// Pause between quote requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,
}

/// One contract of the chain with its quote, if one came back.
#[derive(Debug, Serialize)]
pub struct ChainRow {
    #[serde(flatten)]
    pub option: EquityOption,
    pub quote: Option<Quote>,
}

/// Keep contracts expiring within `start..=end`. Contracts with no
/// expiration date are dropped once either bound is set.
pub fn within_expirations(
    options: Vec<EquityOption>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<EquityOption> {
    if start.is_none() && end.is_none() {
        return options;
    }
    options
        .into_iter()
        .filter(|o| match o.expiration_date {
            Some(date) => start.is_none_or(|s| date >= s) && end.is_none_or(|e| date <= e),
            None => false,
        })
        .collect()
}

/// Order by expiration, then strike, then call before put.
pub fn sort_rows(rows: &mut [ChainRow]) {
    rows.sort_by(|a, b| {
        a.option
            .expiration_date
            .cmp(&b.option.expiration_date)
            .then_with(|| a.option.strike_price.cmp(&b.option.strike_price))
            .then_with(|| a.option.option_type.as_str().cmp(b.option.option_type.as_str()))
    });
}

/// Clamp the requested batch size to what the API accepts.
fn effective_batch_size(requested: usize) -> Result<usize> {
    if requested == 0 {
        bail!("Batch size must be at least 1");
    }
    if requested > MAX_BATCH_SIZE {
        output::warning(&format!(
            "Batch size capped at {MAX_BATCH_SIZE} (requested {requested})"
        ));
        return Ok(MAX_BATCH_SIZE);
    }
    Ok(requested)
}

/// Quote `symbols` in batches, pausing between requests. A failed batch is
/// logged and skipped.
async fn fetch_quotes(
    client: &Client,
    symbols: &[String],
    batch_size: usize,
    delay: Duration,
) -> HashMap<String, Quote> {
    let mut quotes = HashMap::with_capacity(symbols.len());
    let batches = symbols.len().div_ceil(batch_size);

    for (index, batch) in symbols.chunks(batch_size).enumerate() {
        let query = QuoteQuery {
            equity_options: batch.to_vec(),
            ..Default::default()
        };

        match client.quotes(&query).await {
            Ok(response) => {
                debug!(batch = index + 1, of = batches, quotes = response.data.items.len(), "batch quoted");
                quotes.extend(response.data.items.into_iter().map(|q| (q.symbol.clone(), q)));
            }
            Err(e) => {
                warn!(batch = index + 1, of = batches, error = %e, "quote batch failed, skipping");
            }
        }

        if index + 1 < batches {
            tokio::time::sleep(delay).await;
        }
    }

    quotes
}

pub async fn run(args: OptionChainArgs) -> Result<()> {
    let symbol = args.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        bail!("Symbol cannot be empty");
    }
    if let (Some(start), Some(end)) = (args.start_date, args.end_date)
        && start > end
    {
        bail!("--start-date must not be after --end-date");
    }
    let batch_size = effective_batch_size(args.batch_size)?;

    let session = session::require().await?;

    output::note(&format!("Fetching {symbol} option chain..."));
    let chain = session
        .client
        .option_chain(&symbol)
        .await
        .with_context(|| format!("Failed to fetch option chain for {symbol}"))?;
    let total = chain.data.items.len();

    let options = within_expirations(chain.data.items, args.start_date, args.end_date);
    output::note(&format!(
        "{} of {total} contracts within the date range",
        options.len()
    ));

    let symbols: Vec<String> = options.iter().map(|o| o.symbol.clone()).collect();
    let mut quotes = fetch_quotes(
        &session.client,
        &symbols,
        batch_size,
        Duration::from_millis(args.delay_ms),
    )
    .await;
    output::note(&format!("Quoted {} of {} contracts", quotes.len(), symbols.len()));

    let mut rows: Vec<ChainRow> = options
        .into_iter()
        .map(|option| {
            let quote = quotes.remove(&option.symbol);
            ChainRow { option, quote }
        })
        .collect();
    sort_rows(&mut rows);

    output::json_lines(&rows, false)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tasty::models::OptionType;

    fn option(symbol: &str, expiration: Option<&str>, strike: i64, option_type: OptionType) -> EquityOption {
        EquityOption {
            symbol: symbol.into(),
            expiration_date: expiration.map(|d| d.parse().unwrap()),
            strike_price: Some(Decimal::from(strike)),
            option_type,
            ..Default::default()
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn no_bounds_keeps_everything() {
        let options = vec![
            option("A", Some("2025-01-17"), 100, OptionType::Call),
            option("B", None, 100, OptionType::Call),
        ];
        assert_eq!(within_expirations(options, None, None).len(), 2);
    }

    #[test]
    fn bounds_are_inclusive() {
        let options = vec![
            option("BEFORE", Some("2025-01-16"), 100, OptionType::Call),
            option("START", Some("2025-01-17"), 100, OptionType::Call),
            option("END", Some("2025-02-21"), 100, OptionType::Call),
            option("AFTER", Some("2025-02-22"), 100, OptionType::Call),
            option("UNDATED", None, 100, OptionType::Call),
        ];

        let kept = within_expirations(options, Some(date("2025-01-17")), Some(date("2025-02-21")));
        let symbols: Vec<_> = kept.iter().map(|o| o.symbol.as_str()).collect();
        assert_eq!(symbols, ["START", "END"]);
    }

    #[test]
    fn open_ended_range() {
        let options = vec![
            option("OLD", Some("2024-12-20"), 100, OptionType::Call),
            option("NEW", Some("2025-12-19"), 100, OptionType::Call),
        ];
        let kept = within_expirations(options, Some(date("2025-01-01")), None);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].symbol, "NEW");
    }

    #[test]
    fn rows_sort_by_expiration_then_strike() {
        let mut rows: Vec<ChainRow> = [
            option("FEB-100-P", Some("2025-02-21"), 100, OptionType::Put),
            option("JAN-110-C", Some("2025-01-17"), 110, OptionType::Call),
            option("FEB-100-C", Some("2025-02-21"), 100, OptionType::Call),
            option("JAN-90-P", Some("2025-01-17"), 90, OptionType::Put),
        ]
        .into_iter()
        .map(|option| ChainRow { option, quote: None })
        .collect();

        sort_rows(&mut rows);

        let order: Vec<_> = rows.iter().map(|r| r.option.symbol.as_str()).collect();
        assert_eq!(order, ["JAN-90-P", "JAN-110-C", "FEB-100-C", "FEB-100-P"]);
    }

    #[test]
    fn batch_size_is_clamped() {
        assert_eq!(effective_batch_size(250).unwrap(), MAX_BATCH_SIZE);
        assert_eq!(effective_batch_size(25).unwrap(), 25);
        assert!(effective_batch_size(0).is_err());
    }
}
