//! Quotes, market metrics and historical corporate events.

use chrono::NaiveDate;
use tracing::instrument;

use crate::client::{Client, QueryParams};
use crate::envelope::{Envelope, ItemList, Items};
use crate::error::Error;
use crate::models::{Dividend, EarningsReport, MarketMetric, Quote};

const MARKET_DATA: &str = "market-data";
const MARKET_METRICS: &str = "market-metrics";
const CORPORATE_EVENTS: &str = "historic-corporate-events";

/// Symbols to quote, grouped by instrument type.
///
/// `GET /market-data/by-type` takes one comma-joined list per type. Types
/// with no symbols are left off the request.
#[derive(Debug, Clone, Default)]
pub struct QuoteQuery {
    pub cryptocurrencies: Vec<String>,
    pub equities: Vec<String>,
    pub equity_options: Vec<String>,
    pub indices: Vec<String>,
    pub futures: Vec<String>,
    pub future_options: Vec<String>,
}

impl QuoteQuery {
    pub fn is_empty(&self) -> bool {
        self.cryptocurrencies.is_empty()
            && self.equities.is_empty()
            && self.equity_options.is_empty()
            && self.indices.is_empty()
            && self.futures.is_empty()
            && self.future_options.is_empty()
    }

    /// Total symbols across every type.
    pub fn len(&self) -> usize {
        self.cryptocurrencies.len()
            + self.equities.len()
            + self.equity_options.len()
            + self.indices.len()
            + self.futures.len()
            + self.future_options.len()
    }

    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_joined("cryptocurrency", &self.cryptocurrencies)
            .push_joined("equity", &self.equities)
            .push_joined("equity-option", &self.equity_options)
            .push_joined("index", &self.indices)
            .push_joined("future", &self.futures)
            .push_joined("future-option", &self.future_options);
        query
    }
}

impl Client {
    // ========================================================================
    // Quotes
    // ========================================================================

    /// Snapshot quotes, with greeks for option symbols.
    #[instrument(skip(self, query), fields(symbols = query.len()))]
    pub async fn quotes(&self, query: &QuoteQuery) -> Result<Envelope<Items<Quote>>, Error> {
        let mut url = self.endpoint([MARKET_DATA, "by-type"]);
        query.to_query().apply_to(&mut url);
        self.get(url).await
    }

    // ========================================================================
    // Metrics and corporate events
    // ========================================================================

    /// Implied volatility rank, liquidity and related statistics.
    #[instrument(skip(self))]
    pub async fn market_metrics(&self, symbols: &[String]) -> Result<ItemList<MarketMetric>, Error> {
        let mut url = self.endpoint([MARKET_METRICS]);
        QueryParams::new()
            .push_joined("symbols", symbols)
            .apply_to(&mut url);
        self.get_items(url, false).await
    }

    #[instrument(skip(self))]
    pub async fn historical_dividends(&self, symbol: &str) -> Result<ItemList<Dividend>, Error> {
        self.get_items(
            self.endpoint([MARKET_METRICS, CORPORATE_EVENTS, "dividends", symbol]),
            false,
        )
        .await
    }

    /// Earnings reports from `start` onward, or within `start..=end`.
    #[instrument(skip(self))]
    pub async fn historical_earnings(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<ItemList<EarningsReport>, Error> {
        let mut url = self.endpoint([MARKET_METRICS, CORPORATE_EVENTS, "earnings-reports", symbol]);
        QueryParams::new()
            .push("start-date", start)
            .push_opt("end-date", end)
            .apply_to(&mut url);
        self.get_items(url, false).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_query_joins_per_type() {
        let query = QuoteQuery {
            equities: vec!["AAPL".into(), "MSFT".into()],
            future_options: vec!["./ESZ4 EW4X4 241129P5900".into()],
            ..Default::default()
        };
        assert_eq!(query.len(), 3);
        assert!(!query.is_empty());

        let mut url = url::Url::parse("https://api.tastytrade.com/market-data/by-type").unwrap();
        query.to_query().apply_to(&mut url);
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("equity".into(), "AAPL,MSFT".into()),
                ("future-option".into(), "./ESZ4 EW4X4 241129P5900".into()),
            ]
        );
    }

    #[test]
    fn empty_quote_query() {
        let query = QuoteQuery::default();
        assert!(query.is_empty());
        assert!(query.to_query().is_empty());
    }
}
