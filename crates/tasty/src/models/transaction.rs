//! Account transaction history.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{InstrumentType, PriceEffect};
use super::de;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Transaction {
    pub id: u64,
    pub account_number: String,
    pub symbol: Option<String>,
    pub instrument_type: Option<InstrumentType>,
    pub underlying_symbol: Option<String>,
    pub transaction_type: String,
    pub transaction_sub_type: Option<String>,
    pub description: Option<String>,
    pub action: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub quantity: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub executed_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::opt_date")]
    pub transaction_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::decimal")]
    pub value: Decimal,
    pub value_effect: PriceEffect,
    #[serde(deserialize_with = "de::decimal")]
    pub net_value: Decimal,
    pub net_value_effect: PriceEffect,
    pub is_estimated_fee: bool,
}

impl Transaction {
    /// Net value signed by its effect: debits are negative.
    pub fn signed_net_value(&self) -> Decimal {
        match self.net_value_effect {
            PriceEffect::Debit => -self.net_value,
            _ => self.net_value,
        }
    }
}
