//! Lenient field deserializers.
//!
//! The API sends numbers both as JSON strings and as JSON numbers, and sends
//! `""` or `null` for values it does not have.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn blank_to_none(value: Option<Value>) -> Option<Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        other => other,
    }
}

fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|e| format!("invalid decimal '{raw}': {e}"))
}

/// `Option<Decimal>` from a string or number; blank or null is `None`.
pub(crate) fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match blank_to_none(Option::<Value>::deserialize(deserializer)?) {
        None => Ok(None),
        Some(Value::String(s)) => parse_decimal(&s).map(Some).map_err(de::Error::custom),
        Some(Value::Number(n)) => parse_decimal(&n.to_string())
            .map(Some)
            .map_err(de::Error::custom),
        Some(other) => Err(de::Error::custom(format!(
            "expected a decimal string or number, found {other}"
        ))),
    }
}

/// `Decimal` from a string or number; blank or null is zero.
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    opt_decimal(deserializer).map(Option::unwrap_or_default)
}

fn opt_parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match blank_to_none(Option::<Value>::deserialize(deserializer)?) {
        None => Ok(None),
        Some(Value::String(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string, found {other}"
        ))),
    }
}

/// `Option<NaiveDate>` from `YYYY-MM-DD`; blank or null is `None`.
pub(crate) fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    opt_parsed(deserializer)
}

/// `Option<DateTime<Utc>>` from an RFC 3339 timestamp; blank or null is `None`.
pub(crate) fn opt_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    opt_parsed(deserializer)
}

/// `Option<String>` where `""` is `None`.
pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match blank_to_none(Option::<Value>::deserialize(deserializer)?) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Ok(Some(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "opt_decimal")]
        price: Option<Decimal>,
        #[serde(deserialize_with = "decimal")]
        amount: Decimal,
        #[serde(deserialize_with = "opt_date")]
        date: Option<NaiveDate>,
        #[serde(deserialize_with = "opt_datetime")]
        at: Option<DateTime<Utc>>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decimals_from_strings_and_numbers() {
        assert_eq!(row(r#"{"price":"1.25"}"#).price, Some(Decimal::new(125, 2)));
        assert_eq!(row(r#"{"price":1.25}"#).price, Some(Decimal::new(125, 2)));
        assert_eq!(row(r#"{"price":"1,250"}"#).price, Some(Decimal::new(1250, 0)));
        assert_eq!(row(r#"{"price":""}"#).price, None);
        assert_eq!(row(r#"{"price":null}"#).price, None);
        assert_eq!(row(r#"{"amount":null}"#).amount, Decimal::ZERO);
        assert_eq!(row("{}").amount, Decimal::ZERO);
    }

    #[test]
    fn bad_decimal_is_an_error() {
        assert!(serde_json::from_str::<Row>(r#"{"price":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"price":true}"#).is_err());
    }

    #[test]
    fn dates_and_timestamps() {
        let r = row(r#"{"date":"2025-01-17","at":"2025-01-17T21:00:00.000+00:00"}"#);
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2025, 1, 17));
        assert_eq!(r.at.unwrap().to_rfc3339(), "2025-01-17T21:00:00+00:00");
        assert!(row(r#"{"date":"","at":null}"#).date.is_none());
    }
}
