//! Equity, cryptocurrency and warrant reference data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{InstrumentType, TickSize};
use super::de;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Equity {
    pub id: u64,
    pub symbol: String,
    pub instrument_type: InstrumentType,
    pub cusip: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub listed_market: Option<String>,
    pub lendability: Option<String>,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub borrow_rate: Option<Decimal>,
    pub market_time_instrument_collection: Option<String>,
    pub streamer_symbol: Option<String>,
    pub active: bool,
    pub is_closing_only: bool,
    pub is_etf: bool,
    pub is_index: bool,
    pub is_illiquid: bool,
    pub is_fractional_quantity_eligible: bool,
    pub is_options_closing_only: bool,
    pub tick_sizes: Vec<TickSize>,
    pub option_tick_sizes: Vec<TickSize>,
}

/// Where a cryptocurrency can be routed and at what precision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DestinationVenueSymbol {
    pub id: u64,
    pub symbol: String,
    pub destination_venue: Option<String>,
    pub max_quantity_precision: Option<u32>,
    pub max_price_precision: Option<u32>,
    pub routable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Cryptocurrency {
    pub id: u64,
    pub symbol: String,
    pub instrument_type: InstrumentType,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub is_closing_only: bool,
    pub active: bool,
    #[serde(deserialize_with = "de::opt_decimal")]
    pub tick_size: Option<Decimal>,
    pub streamer_symbol: Option<String>,
    pub destination_venue_symbols: Vec<DestinationVenueSymbol>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Warrant {
    pub symbol: String,
    pub instrument_type: InstrumentType,
    pub listed_market: Option<String>,
    pub description: Option<String>,
    pub is_closing_only: bool,
    pub active: bool,
}

/// Number of decimal places allowed when sizing orders in an instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct QuantityDecimalPrecision {
    pub instrument_type: InstrumentType,
    pub symbol: Option<String>,
    pub value: u32,
    pub minimum_increment_precision: u32,
}
