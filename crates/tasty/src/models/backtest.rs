//! Strategy backtests.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::InstrumentType;
use super::de;

/// One leg of a backtested strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BacktestLeg {
    pub instrument_type: InstrumentType,
    pub symbol: String,
    pub action: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
}

/// Inclusive bounds; an absent side is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EntryConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_price: Option<Bounds<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_expiration: Option<Bounds<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implied_volatility: Option<Bounds<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExitConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_expiration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_based: Option<bool>,
}

/// Body of `POST /backtesting`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BacktestRequest {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub legs: Vec<BacktestLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_conditions: Option<EntryConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_conditions: Option<ExitConditions>,
}

impl BacktestRequest {
    pub fn new(symbol: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            start_date,
            end_date,
            legs: Vec::new(),
            entry_conditions: None,
            exit_conditions: None,
        }
    }

    pub fn leg(mut self, leg: BacktestLeg) -> Self {
        self.legs.push(leg);
        self
    }

    pub fn entry(mut self, conditions: EntryConditions) -> Self {
        self.entry_conditions = Some(conditions);
        self
    }

    pub fn exit(mut self, conditions: ExitConditions) -> Self {
        self.exit_conditions = Some(conditions);
        self
    }
}

/// A submitted backtest and, once finished, its results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Backtest {
    pub id: String,
    pub symbol: String,
    #[serde(deserialize_with = "de::opt_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_date")]
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub total_trades: u32,
    pub winning_trades: u32,
    pub losing_trades: u32,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub total_profit_loss: Option<Decimal>,
    #[serde(rename = "avg-profit-loss", deserialize_with = "de::opt_decimal")]
    pub average_profit_loss: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub max_profit: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub max_loss: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub win_rate: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_in_wire_format() {
        let request = BacktestRequest::new(
            "SPY",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
        )
        .leg(BacktestLeg {
            instrument_type: InstrumentType::EquityOption,
            symbol: "SPY".into(),
            action: "Sell to Open".into(),
            quantity: Decimal::ONE,
        })
        .exit(ExitConditions {
            profit_target: Some(50.0),
            ..Default::default()
        });

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["start-date"], "2024-01-02");
        assert_eq!(json["legs"][0]["instrument-type"], "Equity Option");
        assert_eq!(json["legs"][0]["quantity"], 1.0);
        assert_eq!(json["exit-conditions"]["profit-target"], 50.0);
        assert!(json.get("entry-conditions").is_none());
    }
}
