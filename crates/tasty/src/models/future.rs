//! Futures, futures products and futures options.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{OptionType, TickSize};
use super::de;
use super::option::Strike;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Roll {
    pub name: Option<String>,
    pub active_count: Option<u32>,
    pub cash_settled: bool,
    pub business_days_offset: Option<i32>,
    pub first_notice: bool,
}

/// A futures product such as `/ES`, independent of contract month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FutureProduct {
    pub root_symbol: String,
    pub code: String,
    pub description: Option<String>,
    pub clearing_code: Option<String>,
    pub clearing_exchange_code: Option<String>,
    pub clearport_code: Option<String>,
    pub legacy_code: Option<String>,
    pub exchange: Option<String>,
    pub legacy_exchange_code: Option<String>,
    pub product_type: Option<String>,
    pub listed_months: Vec<String>,
    pub active_months: Vec<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub notional_multiplier: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub tick_size: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub display_factor: Option<Decimal>,
    pub streamer_exchange_code: Option<String>,
    pub small_notional: bool,
    pub back_month_first_calendar_symbol: bool,
    pub first_notice: bool,
    pub cash_settled: bool,
    pub security_group: Option<String>,
    pub market_sector: Option<String>,
    pub roll: Option<Roll>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EtfEquivalent {
    pub symbol: Option<String>,
    pub share_quantity: Option<i64>,
}

/// A futures contract for one delivery month, e.g. `/ESZ4`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Future {
    pub symbol: String,
    pub product_code: String,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub contract_size: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub tick_size: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub notional_multiplier: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub main_fraction: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub sub_fraction: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub display_factor: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_date")]
    pub last_trade_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_date")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_date")]
    pub closing_only_date: Option<NaiveDate>,
    pub active: bool,
    pub active_month: bool,
    pub next_active_month: bool,
    pub is_closing_only: bool,
    pub is_tradeable: bool,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub stops_trading_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub expires_at: Option<DateTime<Utc>>,
    pub product_group: Option<String>,
    pub exchange: Option<String>,
    pub roll_target_symbol: Option<String>,
    pub streamer_exchange_code: Option<String>,
    pub streamer_symbol: Option<String>,
    pub back_month_first_calendar_symbol: bool,
    pub future_etf_equivalent: Option<EtfEquivalent>,
    pub future_product: Option<FutureProduct>,
    pub tick_sizes: Vec<TickSize>,
    pub option_tick_sizes: Vec<TickSize>,
    pub spread_tick_sizes: Vec<TickSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FutureOptionProduct {
    pub root_symbol: String,
    pub code: Option<String>,
    pub cash_settled: bool,
    pub legacy_code: Option<String>,
    pub clearport_code: Option<String>,
    pub clearing_code: Option<String>,
    pub clearing_exchange_code: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub clearing_price_multiplier: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub display_factor: Option<Decimal>,
    pub exchange: Option<String>,
    pub product_type: Option<String>,
    pub expiration_type: Option<String>,
    pub settlement_delay_days: Option<i32>,
    pub is_rollover: bool,
    pub market_sector: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FutureOption {
    pub symbol: String,
    pub underlying_symbol: Option<String>,
    pub product_code: Option<String>,
    #[serde(deserialize_with = "de::opt_date")]
    pub expiration_date: Option<NaiveDate>,
    pub root_symbol: Option<String>,
    pub option_root_symbol: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub strike_price: Option<Decimal>,
    pub exchange: Option<String>,
    pub exchange_symbol: Option<String>,
    pub streamer_symbol: Option<String>,
    pub option_type: OptionType,
    pub exercise_style: Option<String>,
    pub is_vanilla: bool,
    pub is_primary_deliverable: bool,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub future_price_ratio: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub multiplier: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub underlying_count: Option<Decimal>,
    pub is_confirmed: bool,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub notional_value: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub display_factor: Option<Decimal>,
    pub security_exchange: Option<String>,
    pub sx_id: Option<String>,
    pub settlement_type: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub strike_factor: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_date")]
    pub maturity_date: Option<NaiveDate>,
    pub is_exercisable_weekly: bool,
    pub last_trade_time: Option<String>,
    pub days_to_expiration: Option<i32>,
    pub is_closing_only: bool,
    pub active: bool,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub stops_trading_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub expires_at: Option<DateTime<Utc>>,
    pub future_option_product: Option<FutureOptionProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FutureOptionExpiration {
    pub underlying_symbol: Option<String>,
    pub root_symbol: Option<String>,
    pub option_root_symbol: Option<String>,
    pub option_contract_symbol: Option<String>,
    pub asset: Option<String>,
    #[serde(deserialize_with = "de::opt_date")]
    pub expiration_date: Option<NaiveDate>,
    pub days_to_expiration: Option<i32>,
    pub expiration_type: Option<String>,
    pub settlement_type: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub notional_value: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub display_factor: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub strike_factor: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub stops_trading_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub expires_at: Option<DateTime<Utc>>,
    pub tick_sizes: Vec<TickSize>,
    pub strikes: Vec<Strike>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FutureOptionChain {
    pub underlying_symbol: Option<String>,
    pub root_symbol: Option<String>,
    pub exercise_style: Option<String>,
    pub expirations: Vec<FutureOptionExpiration>,
}

/// `GET /futures-option-chains/{symbol}/nested`: the underlying futures and
/// the option chains written on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NestedFutureOptionChains {
    pub futures: Vec<Future>,
    pub option_chains: Vec<FutureOptionChain>,
}
