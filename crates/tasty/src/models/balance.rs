//! Account balances.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::PriceEffect;
use super::de;

/// Current balances of an account (`GET /accounts/{n}/balances`).
///
/// Amounts arrive as decimal strings; missing amounts read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Balance {
    pub account_number: String,
    #[serde(deserialize_with = "de::decimal")]
    pub cash_balance: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub long_equity_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub short_equity_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub long_derivative_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub short_derivative_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub long_futures_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub short_futures_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub long_futures_derivative_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub short_futures_derivative_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub long_margineable_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub short_margineable_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub margin_equity: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub equity_buying_power: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub derivative_buying_power: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub day_trading_buying_power: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub futures_margin_requirement: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub available_trading_funds: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub maintenance_requirement: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub maintenance_call_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub reg_t_call_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub day_trading_call_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub day_equity_call_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub net_liquidating_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub cash_available_to_withdraw: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub day_trade_excess: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub pending_cash: Decimal,
    pub pending_cash_effect: PriceEffect,
    #[serde(deserialize_with = "de::decimal")]
    pub long_cryptocurrency_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub short_cryptocurrency_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub cryptocurrency_margin_requirement: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub unsettled_cryptocurrency_fiat_amount: Decimal,
    pub unsettled_cryptocurrency_fiat_effect: PriceEffect,
    #[serde(deserialize_with = "de::decimal")]
    pub closed_loop_available_balance: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub equity_offering_margin_requirement: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub long_bond_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub bond_margin_requirement: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub used_derivative_buying_power: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub reg_t_margin_requirement: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub futures_overnight_margin_requirement: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub futures_intraday_margin_requirement: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub maintenance_excess: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub pending_margin_interest: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub effective_cryptocurrency_buying_power: Decimal,
    #[serde(deserialize_with = "de::opt_date")]
    pub snapshot_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Beginning or end of the trading day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeOfDay {
    Bod,
    #[default]
    Eod,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Bod => "BOD",
            TimeOfDay::Eod => "EOD",
        }
    }
}

/// Balances captured at the start or end of a past trading day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BalanceSnapshot {
    pub account_number: String,
    #[serde(deserialize_with = "de::decimal")]
    pub cash_balance: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub long_equity_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub short_equity_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub long_derivative_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub short_derivative_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub long_futures_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub short_futures_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub long_margineable_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub short_margineable_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub margin_equity: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub equity_buying_power: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub derivative_buying_power: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub day_trading_buying_power: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub futures_margin_requirement: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub available_trading_funds: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub maintenance_requirement: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub maintenance_call_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub reg_t_call_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub day_trading_call_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub day_equity_call_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub net_liquidating_value: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub day_trade_excess: Decimal,
    #[serde(deserialize_with = "de::decimal")]
    pub pending_cash: Decimal,
    pub pending_cash_effect: PriceEffect,
    #[serde(deserialize_with = "de::opt_date")]
    pub snapshot_date: Option<NaiveDate>,
    pub time_of_day: Option<TimeOfDay>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{Envelope, decode_into};

    #[test]
    fn partial_balance_decodes() {
        let raw = br#"{"data": {"account-number": "123", "cash-balance": "1000"}, "context": "test"}"#;
        let env: Envelope<Balance> = decode_into(raw).unwrap();
        assert_eq!(env.data.account_number, "123");
        assert_eq!(env.data.cash_balance, Decimal::new(1000, 0));
        assert_eq!(env.data.net_liquidating_value, Decimal::ZERO);
        assert_eq!(env.context.as_deref(), Some("test"));
    }

    #[test]
    fn numeric_amounts_are_accepted() {
        let raw = br#"{"account-number":"5WT00001","cash-balance":1000.5,"pending-cash-effect":"Debit"}"#;
        let balance: Balance = decode_into(raw).unwrap();
        assert_eq!(balance.cash_balance, Decimal::new(10005, 1));
        assert_eq!(balance.pending_cash_effect, PriceEffect::Debit);
    }

    #[test]
    fn snapshot_time_of_day() {
        let raw = br#"{"account-number":"5WT00001","snapshot-date":"2025-03-03","time-of-day":"BOD"}"#;
        let snapshot: BalanceSnapshot = decode_into(raw).unwrap();
        assert_eq!(snapshot.time_of_day, Some(TimeOfDay::Bod));
        assert_eq!(snapshot.snapshot_date, NaiveDate::from_ymd_opt(2025, 3, 3));
    }
}
