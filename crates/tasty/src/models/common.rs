//! Enumerations shared across records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of tradeable instrument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    Bond,
    Cryptocurrency,
    Equity,
    #[serde(rename = "Equity Offering")]
    EquityOffering,
    #[serde(rename = "Equity Option")]
    EquityOption,
    Future,
    #[serde(rename = "Future Option")]
    FutureOption,
    Index,
    Warrant,
    #[default]
    #[serde(other)]
    Unknown,
}

impl InstrumentType {
    /// The wire name, e.g. `"Future Option"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentType::Bond => "Bond",
            InstrumentType::Cryptocurrency => "Cryptocurrency",
            InstrumentType::Equity => "Equity",
            InstrumentType::EquityOffering => "Equity Offering",
            InstrumentType::EquityOption => "Equity Option",
            InstrumentType::Future => "Future",
            InstrumentType::FutureOption => "Future Option",
            InstrumentType::Index => "Index",
            InstrumentType::Warrant => "Warrant",
            InstrumentType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Long or short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityDirection {
    Long,
    Short,
    Zero,
    #[default]
    #[serde(other)]
    Unknown,
}

impl QuantityDirection {
    /// `-1` for short, `1` otherwise.
    pub fn sign(&self) -> i32 {
        match self {
            QuantityDirection::Short => -1,
            _ => 1,
        }
    }
}

/// Whether an amount adds to or draws from the account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceEffect {
    Credit,
    Debit,
    #[serde(rename = "None")]
    NoEffect,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Call or put.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    #[serde(rename = "C")]
    Call,
    #[serde(rename = "P")]
    Put,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OptionType {
    /// The one-letter wire code; empty for [`OptionType::Unknown`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "C",
            Self::Put => "P",
            Self::Unknown => "",
        }
    }
}

/// A price increment, optionally valid only up to a threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TickSize {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instrument_type_wire_names() {
        let t: InstrumentType = serde_json::from_str(r#""Future Option""#).unwrap();
        assert_eq!(t, InstrumentType::FutureOption);
        assert_eq!(
            serde_json::to_string(&InstrumentType::EquityOption).unwrap(),
            r#""Equity Option""#
        );
    }

    #[test]
    fn unknown_values_are_tolerated() {
        let t: InstrumentType = serde_json::from_str(r#""Fixed Income Security""#).unwrap();
        assert_eq!(t, InstrumentType::Unknown);
        let d: QuantityDirection = serde_json::from_str(r#""Sideways""#).unwrap();
        assert_eq!(d, QuantityDirection::Unknown);
    }

    #[test]
    fn direction_sign() {
        assert_eq!(QuantityDirection::Short.sign(), -1);
        assert_eq!(QuantityDirection::Long.sign(), 1);
    }

    #[test]
    fn price_effect_none() {
        let e: PriceEffect = serde_json::from_str(r#""None""#).unwrap();
        assert_eq!(e, PriceEffect::NoEffect);
    }
}
