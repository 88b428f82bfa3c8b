//! Quotes, volatility metrics and corporate events.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::InstrumentType;
use super::de;

/// A market data snapshot for one symbol.
///
/// Greeks are only populated for options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Quote {
    pub symbol: String,
    pub instrument_type: InstrumentType,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub bid: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub bid_size: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub ask: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub ask_size: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub mid: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub mark: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub last: Option<Decimal>,
    pub last_mkt: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub beta: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub dividend_amount: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub dividend_frequency: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub open: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub day_high_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub day_low_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub close: Option<Decimal>,
    pub close_price_type: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub prev_close: Option<Decimal>,
    pub prev_close_price_type: Option<String>,
    #[serde(deserialize_with = "de::opt_date")]
    pub summary_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_date")]
    pub prev_close_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub low_limit_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub high_limit_price: Option<Decimal>,
    pub is_trading_halted: bool,
    /// Epoch milliseconds; `-1` when not halted.
    pub halt_start_time: Option<i64>,
    pub halt_end_time: Option<i64>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub year_low_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub year_high_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub volume: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub open_interest: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub volatility: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub delta: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub gamma: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub theta: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub rho: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub vega: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub theo_price: Option<Decimal>,
}

/// Implied volatility of one option expiration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExpirationImpliedVolatility {
    #[serde(deserialize_with = "de::opt_date")]
    pub expiration_date: Option<NaiveDate>,
    pub settlement_type: Option<String>,
    pub option_chain_type: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub implied_volatility: Option<Decimal>,
}

/// Volatility and liquidity statistics for an underlying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MarketMetric {
    pub symbol: String,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub implied_volatility_index: Option<Decimal>,
    #[serde(
        rename = "implied-volatility-index-5-day-change",
        deserialize_with = "de::opt_decimal"
    )]
    pub implied_volatility_index_5_day_change: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub implied_volatility_rank: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub implied_volatility_percentile: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub liquidity: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub liquidity_rank: Option<Decimal>,
    pub liquidity_rating: Option<i32>,
    pub option_expiration_implied_volatilities: Vec<ExpirationImpliedVolatility>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Dividend {
    #[serde(deserialize_with = "de::opt_date")]
    pub occurred_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EarningsReport {
    #[serde(deserialize_with = "de::opt_date")]
    pub occurred_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub eps: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_with_greeks() {
        let raw = r#"{
            "symbol": "./ESZ4 EW4X4 241129P5900",
            "instrument-type": "Future Option",
            "bid": "12.25",
            "ask": "12.75",
            "delta": "-0.31",
            "theta": -1.2,
            "is-trading-halted": false,
            "halt-start-time": -1
        }"#;
        let quote: Quote = serde_json::from_str(raw).unwrap();
        assert_eq!(quote.delta, Some(Decimal::new(-31, 2)));
        assert_eq!(quote.theta, Some(Decimal::new(-12, 1)));
        assert_eq!(quote.halt_start_time, Some(-1));
        assert!(quote.gamma.is_none());
    }

    #[test]
    fn metric_five_day_change_key() {
        let raw = r#"{"symbol":"SPY","implied-volatility-index-5-day-change":"0.012"}"#;
        let metric: MarketMetric = serde_json::from_str(raw).unwrap();
        assert_eq!(
            metric.implied_volatility_index_5_day_change,
            Some(Decimal::new(12, 3))
        );
    }
}
