//! Response envelopes and decoding.
//!
//! Most endpoints answer with a fixed document shape and decode straight
//! into one of the wrappers here:
//!
//! * [`Envelope<T>`]: `{"data": T, "context": "..."}`
//! * [`Envelope<Items<T>>`]: `{"data": {"items": [T, ...]}, "context": "..."}`
//! * [`Paginated<T>`]: the list form plus `pagination` and `api-version`
//!
//! Endpoints whose list shape varies between deployments go through
//! [`decode_items`] instead.

mod normalize;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

pub use normalize::{ItemList, decode_items};

/// The `{data, context}` document wrapping every response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// A list of records under an `items` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for Items<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> IntoIterator for Items<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A paginated list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Paginated<T> {
    pub data: Items<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Page metadata attached to paginated lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Pagination {
    pub per_page: u32,
    pub page_offset: u32,
    pub item_offset: u32,
    pub total_items: u32,
    pub total_pages: u32,
    pub current_item_count: u32,
    pub previous_link: Option<String>,
    pub next_link: Option<String>,
    pub paging_link_template: Option<String>,
}

impl Pagination {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next_link.is_some() || self.page_offset.saturating_add(1) < self.total_pages
    }
}

/// Decode a raw response body directly into `T`.
pub fn decode_into<T: DeserializeOwned>(raw: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(raw).map_err(DecodeError::new::<T>)
}
