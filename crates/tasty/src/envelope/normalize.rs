//! Tolerant decoding of list responses.
//!
//! Some list endpoints answer with different document shapes depending on
//! the API version and the deployment. The shapes are probed in a fixed
//! order and the first one that matches wins:
//!
//! 1. `{"data": [..]}`
//! 2. `{"data": {"items": [..]}}`, or any other `{"data": {..}}` as a
//!    single record
//! 3. `{"items": [..]}`
//! 4. `[..]`
//! 5. `{"data": [..], "context": ".."}` decoded as a whole
//! 6. the payload decoded directly as a list
//!
//! A record that does not fit the target type fails the whole decode once a
//! shape has been chosen; it never falls through to a later shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Records extracted from a list response of uncertain shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
    /// The top-level `context` string, if the response carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl<T> ItemList<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for ItemList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

enum Shape {
    List(Vec<Value>),
    Single(Value),
    Unrecognized(Value),
}

/// Decode a list response whose shape is not fixed.
pub fn decode_items<T: DeserializeOwned>(raw: &[u8]) -> Result<ItemList<T>, DecodeError> {
    let value: Value = serde_json::from_slice(raw).map_err(DecodeError::new::<Vec<T>>)?;

    let context = value
        .get("context")
        .and_then(Value::as_str)
        .map(str::to_string);

    let items = match classify(value) {
        Shape::List(records) => records
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>(),
        Shape::Single(record) => serde_json::from_value(record).map(|item| vec![item]),
        Shape::Unrecognized(value) => decode_fallback(value),
    }
    .map_err(DecodeError::new::<Vec<T>>)?;

    Ok(ItemList { items, context })
}

fn classify(value: Value) -> Shape {
    let Value::Object(mut map) = value else {
        return Shape::Unrecognized(value);
    };

    match map.remove("data") {
        Some(Value::Array(records)) => return Shape::List(records),
        Some(Value::Object(data)) => return classify_data_object(data),
        Some(other) => {
            map.insert("data".to_string(), other);
        }
        None => {}
    }

    if let Some(Value::Array(_)) = map.get("items")
        && let Some(Value::Array(records)) = map.remove("items")
    {
        return Shape::List(records);
    }

    Shape::Unrecognized(Value::Object(map))
}

fn classify_data_object(mut data: Map<String, Value>) -> Shape {
    if let Some(Value::Array(_)) = data.get("items")
        && let Some(Value::Array(records)) = data.remove("items")
    {
        return Shape::List(records);
    }
    Shape::Single(Value::Object(data))
}

fn decode_fallback<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, serde_json::Error> {
    #[derive(Deserialize)]
    struct Wrapped<T> {
        data: Vec<T>,
        #[serde(default)]
        #[allow(dead_code)]
        context: Option<String>,
    }

    if value.is_array() {
        return serde_json::from_value(value);
    }

    match serde_json::from_value::<Wrapped<T>>(value.clone()) {
        Ok(wrapped) => Ok(wrapped.data),
        Err(_) => serde_json::from_value(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "kebab-case")]
    struct Metric {
        symbol: String,
        #[serde(default)]
        liquidity_rating: Option<i32>,
    }

    fn symbols(list: &ItemList<Metric>) -> Vec<&str> {
        list.items.iter().map(|m| m.symbol.as_str()).collect()
    }

    #[test]
    fn all_list_shapes_decode_identically() {
        let bodies: [&[u8]; 4] = [
            br#"[{"symbol":"AAPL"},{"symbol":"MSFT"}]"#,
            br#"{"data":[{"symbol":"AAPL"},{"symbol":"MSFT"}]}"#,
            br#"{"items":[{"symbol":"AAPL"},{"symbol":"MSFT"}]}"#,
            br#"{"data":{"items":[{"symbol":"AAPL"},{"symbol":"MSFT"}]}}"#,
        ];

        for body in bodies {
            let list: ItemList<Metric> = decode_items(body).unwrap();
            assert_eq!(symbols(&list), ["AAPL", "MSFT"]);
        }
    }

    #[test]
    fn single_object_is_wrapped() {
        let body = br#"{"data":{"symbol":"SPY","liquidity-rating":4},"context":"/market-metrics"}"#;
        let list: ItemList<Metric> = decode_items(body).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.items[0].liquidity_rating, Some(4));
        assert_eq!(list.context.as_deref(), Some("/market-metrics"));
    }

    #[test]
    fn context_is_kept_for_every_shape() {
        let body = br#"{"data":{"items":[{"symbol":"AAPL"}]},"context":"/instruments"}"#;
        let list: ItemList<Metric> = decode_items(body).unwrap();
        assert_eq!(list.context.as_deref(), Some("/instruments"));

        let body = br#"{"items":[{"symbol":"AAPL"}],"context":"/instruments"}"#;
        let list: ItemList<Metric> = decode_items(body).unwrap();
        assert_eq!(list.context.as_deref(), Some("/instruments"));
    }

    #[test]
    fn empty_lists_are_valid() {
        let list: ItemList<Metric> = decode_items(br#"{"data":{"items":[]}}"#).unwrap();
        assert!(list.is_empty());
        let list: ItemList<Metric> = decode_items(b"[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn mismatched_record_does_not_fall_through() {
        let body = br#"{"data":[{"symbol":42}]}"#;
        assert!(decode_items::<Metric>(body).is_err());
    }

    #[test]
    fn unrecognized_shapes_fail() {
        assert!(decode_items::<Metric>(br#""just a string""#).is_err());
        assert!(decode_items::<Metric>(br#"{"data":null}"#).is_err());
        assert!(decode_items::<Metric>(br#"{"result":[]}"#).is_err());
        assert!(decode_items::<Metric>(b"not json").is_err());
    }
}
