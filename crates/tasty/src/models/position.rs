//! Open positions.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{InstrumentType, PriceEffect, QuantityDirection};
use super::de;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Position {
    pub account_number: String,
    pub symbol: String,
    pub instrument_type: InstrumentType,
    pub underlying_symbol: Option<String>,
    #[serde(deserialize_with = "de::decimal")]
    pub quantity: Decimal,
    pub quantity_direction: QuantityDirection,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub close_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub average_open_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub average_yearly_market_close_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub average_daily_market_close_price: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub multiplier: Option<Decimal>,
    pub cost_effect: PriceEffect,
    pub is_suppressed: bool,
    pub is_frozen: bool,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub restricted_quantity: Option<Decimal>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub realized_day_gain: Option<Decimal>,
    pub realized_day_gain_effect: PriceEffect,
    #[serde(deserialize_with = "de::opt_date")]
    pub realized_day_gain_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub realized_today: Option<Decimal>,
    pub realized_today_effect: PriceEffect,
    #[serde(deserialize_with = "de::opt_date")]
    pub realized_today_date: Option<NaiveDate>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::opt_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Position {
    /// Quantity with the direction applied: negative when short.
    pub fn signed_quantity(&self) -> Decimal {
        self.quantity * Decimal::from(self.quantity_direction.sign())
    }

    /// Contract multiplier, `1` when the API omits it.
    pub fn multiplier_or_one(&self) -> Decimal {
        self.multiplier.unwrap_or(Decimal::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_future_option_position() {
        let raw = r#"{
            "account-number": "5WT00001",
            "symbol": "./ESZ4 EW4X4 241129P5900",
            "instrument-type": "Future Option",
            "underlying-symbol": "/ESZ4",
            "quantity": "2",
            "quantity-direction": "Short",
            "multiplier": 50,
            "cost-effect": "Credit",
            "close-price": "12.5"
        }"#;
        let position: Position = serde_json::from_str(raw).unwrap();
        assert_eq!(position.instrument_type, InstrumentType::FutureOption);
        assert_eq!(position.signed_quantity(), Decimal::new(-2, 0));
        assert_eq!(position.multiplier_or_one(), Decimal::new(50, 0));
        assert_eq!(position.close_price, Some(Decimal::new(125, 1)));
    }
}
