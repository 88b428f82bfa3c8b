//! Query string assembly.

use url::Url;

/// Ordered query parameters.
///
/// The API mixes two list conventions: bracketed keys repeated per value
/// (`symbol[]=AAPL&symbol[]=MSFT`) and a single comma-joined value
/// (`symbols=AAPL,MSFT`). Unset filters are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Repeat `key` once per value.
    pub fn push_each<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for value in values {
            self.push(key, value);
        }
        self
    }

    /// Join values with commas under one key; skipped when empty.
    pub fn push_joined<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            self.push(key, joined);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Append to `url`, leaving it untouched when there is nothing to add.
    pub fn apply_to(&self, url: &mut Url) {
        if self.0.is_empty() {
            return;
        }
        url.query_pairs_mut()
            .extend_pairs(self.0.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
}
