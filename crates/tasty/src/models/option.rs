//! Equity option instruments and chains.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{InstrumentType, OptionType};
use super::de;

/// A single equity option contract.
///
/// Served by both `/instruments/equity-options` and the detailed
/// `/option-chains/{symbol}` listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EquityOption {
    pub symbol: String,
    pub instrument_type: InstrumentType,
    pub active: bool,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub strike_price: Option<Decimal>,
    pub root_symbol: Option<String>,
    pub underlying_symbol: Option<String>,
    #[serde(deserialize_with = "de::opt_date")]
    pub expiration_date: Option<NaiveDate>,
    pub exercise_style: Option<String>,
    pub shares_per_contract: Option<u32>,
    pub option_type: OptionType,
    pub option_chain_type: Option<String>,
    pub expiration_type: Option<String>,
    pub settlement_type: Option<String>,
    pub listed_market: Option<String>,
    pub old_security_number: Option<String>,
    pub market_time_instrument_collection: Option<String>,
    pub days_to_expiration: Option<i32>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub stops_trading_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub halted_at: Option<DateTime<Utc>>,
    pub is_closing_only: bool,
    pub streamer_symbol: Option<String>,
}

/// One strike of a nested chain: the call and put symbols at that price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Strike {
    #[serde(deserialize_with = "de::opt_decimal")]
    pub strike_price: Option<Decimal>,
    pub call: Option<String>,
    pub call_streamer_symbol: Option<String>,
    pub put: Option<String>,
    pub put_streamer_symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Expiration {
    pub expiration_type: Option<String>,
    #[serde(deserialize_with = "de::opt_date")]
    pub expiration_date: Option<NaiveDate>,
    pub days_to_expiration: Option<i32>,
    pub settlement_type: Option<String>,
    pub strikes: Vec<Strike>,
}

/// Option chain grouped by expiration then strike.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NestedOptionChain {
    pub underlying_symbol: String,
    pub root_symbol: Option<String>,
    pub option_chain_type: Option<String>,
    pub shares_per_contract: Option<u32>,
    pub expirations: Vec<Expiration>,
}

/// What one contract delivers on exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Deliverable {
    pub id: Option<u64>,
    pub root_symbol: Option<String>,
    pub deliverable_type: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub amount: Option<Decimal>,
    pub symbol: Option<String>,
    pub instrument_type: Option<InstrumentType>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub percent: Option<Decimal>,
}

/// Option chain as a flat list of symbols.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CompactOptionChain {
    pub underlying_symbol: String,
    pub root_symbol: Option<String>,
    pub option_chain_type: Option<String>,
    pub settlement_type: Option<String>,
    pub shares_per_contract: Option<u32>,
    pub expiration_type: Option<String>,
    pub deliverables: Vec<Deliverable>,
    pub symbols: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_detailed_chain_entry() {
        let raw = r#"{
            "symbol": "SPXW  250117C05900000",
            "instrument-type": "Equity Option",
            "strike-price": "5900.0",
            "expiration-date": "2025-01-17",
            "option-type": "C",
            "shares-per-contract": 100,
            "halted-at": "",
            "streamer-symbol": ".SPXW250117C5900"
        }"#;
        let option: EquityOption = serde_json::from_str(raw).unwrap();
        assert_eq!(option.option_type, OptionType::Call);
        assert_eq!(option.strike_price, Some(Decimal::new(5900, 0)));
        assert_eq!(option.expiration_date, NaiveDate::from_ymd_opt(2025, 1, 17));
        assert!(option.halted_at.is_none());
    }
}
