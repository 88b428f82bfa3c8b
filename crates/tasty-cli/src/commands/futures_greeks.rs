//! Futures greeks command implementation.

use std::collections::HashMap;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use rust_decimal::Decimal;
use tracing::warn;

use tasty::QuoteQuery;
use tasty::models::{InstrumentType, Position, Quote};

use crate::output;
use crate::session;

const RULE_WIDTH: usize = 118;

#[derive(Args, Debug)]
pub struct FuturesGreeksArgs {
    /// Account number, e.g. 5WT00001
    #[arg(long)]
    pub account: String,
}

/// A position's exposure. `None` when no quote or greek was available.
#[derive(Debug)]
pub struct GreekRow<'a> {
    pub position: &'a Position,
    pub delta: Option<Decimal>,
    pub theta: Option<Decimal>,
}

#[derive(Debug)]
pub struct GreekSummary<'a> {
    pub rows: Vec<GreekRow<'a>>,
    pub net_delta: Decimal,
    pub net_theta: Decimal,
}

/// Scale a per-contract greek to the whole position:
/// `greek × quantity × multiplier × direction`. `None` if the product
/// overflows.
pub fn position_greek(position: &Position, greek: Decimal) -> Option<Decimal> {
    greek
        .checked_mul(position.signed_quantity())?
        .checked_mul(position.multiplier_or_one())
}

/// Join positions with their quotes and total the exposures.
pub fn summarize<'a>(positions: &[&'a Position], quotes: &HashMap<String, Quote>) -> GreekSummary<'a> {
    let mut net_delta = Decimal::ZERO;
    let mut net_theta = Decimal::ZERO;

    let rows = positions
        .iter()
        .map(|&position| {
            let quote = quotes.get(&position.symbol);
            let delta = quote
                .and_then(|q| q.delta)
                .and_then(|g| position_greek(position, g));
            let theta = quote
                .and_then(|q| q.theta)
                .and_then(|g| position_greek(position, g));

            let delta = accumulate(&mut net_delta, delta);
            let theta = accumulate(&mut net_theta, theta);

            GreekRow {
                position,
                delta,
                theta,
            }
        })
        .collect();

    GreekSummary {
        rows,
        net_delta,
        net_theta,
    }
}

/// Add `value` to `total`. A value that would overflow the total is dropped
/// and reported as unavailable.
fn accumulate(total: &mut Decimal, value: Option<Decimal>) -> Option<Decimal> {
    let value = value?;
    *total = total.checked_add(value)?;
    Some(value)
}

pub async fn run(args: FuturesGreeksArgs) -> Result<()> {
    let account = session::account(&args.account)?;
    let session = session::require().await?;

    output::note(&format!("Fetching positions for {account}..."));
    let positions = session
        .client
        .positions(&account)
        .await
        .with_context(|| format!("Failed to fetch positions for {account}"))?;

    let futures_options: Vec<&Position> = positions
        .data
        .items
        .iter()
        .filter(|p| p.instrument_type == InstrumentType::FutureOption)
        .collect();

    if futures_options.is_empty() {
        output::note("No futures option positions found.");
        return Ok(());
    }

    let query = QuoteQuery {
        future_options: futures_options.iter().map(|p| p.symbol.clone()).collect(),
        ..Default::default()
    };

    output::note(&format!(
        "Fetching quotes for {} futures option positions...",
        futures_options.len()
    ));
    let quotes: HashMap<String, Quote> = match session.client.quotes(&query).await {
        Ok(quotes) => quotes
            .data
            .items
            .into_iter()
            .map(|q| (q.symbol.clone(), q))
            .collect(),
        Err(e) => {
            warn!(error = %e, "quote fetch failed");
            output::warning(&format!("Failed to fetch quotes, continuing without greeks: {e}"));
            HashMap::new()
        }
    };

    let summary = summarize(&futures_options, &quotes);
    print_table(&summary);

    Ok(())
}

fn print_table(summary: &GreekSummary<'_>) {
    println!("Futures Option Positions ({}):", summary.rows.len());
    println!("{}", "-".repeat(RULE_WIDTH));
    println!(
        "{}",
        format!(
            "{:<28} {:<12} {:>8} {:<9} {:>6} {:>12} {:>12} {:>12} {:>12}",
            "Symbol",
            "Underlying",
            "Quantity",
            "Direction",
            "Mult",
            "Pos Delta",
            "Pos Theta",
            "Avg Open",
            "Close",
        )
        .bold()
    );
    println!("{}", "-".repeat(RULE_WIDTH));

    for row in &summary.rows {
        let p = row.position;
        println!(
            "{:<28} {:<12} {:>8} {:<9} {:>6} {:>12} {:>12} {:>12} {:>12}",
            p.symbol,
            p.underlying_symbol.as_deref().unwrap_or("-"),
            p.quantity.normalize(),
            format!("{:?}", p.quantity_direction),
            p.multiplier_or_one().normalize(),
            fixed(row.delta, 2),
            fixed(row.theta, 2),
            fixed(p.average_open_price, 2),
            fixed(p.close_price, 2),
        );
    }

    println!("{}", "-".repeat(RULE_WIDTH));
    println!();
    println!("{}", "Net Greeks".bold());
    output::field("Net Delta", &format!("{:.4}", summary.net_delta));
    output::field("Net Theta", &format!("{:.4}", summary.net_theta));
}

fn fixed(value: Option<Decimal>, places: usize) -> String {
    match value {
        Some(v) => format!("{v:.places$}"),
        None => "N/A".to_string(),
    }
}
