//! Futures, futures products, futures options and their chains.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::instrument;

use super::instruments::INSTRUMENTS;
use crate::client::{Client, QueryParams};
use crate::envelope::{Envelope, ItemList, Items};
use crate::error::Error;
use crate::models::{
    Future, FutureOption, FutureOptionProduct, FutureProduct, NestedFutureOptionChains,
    OptionType,
};

const FUTURES: &str = "futures";
const FUTURE_PRODUCTS: &str = "future-products";
const FUTURE_OPTIONS: &str = "future-options";
const FUTURE_OPTION_PRODUCTS: &str = "future-option-products";
const FUTURES_OPTION_CHAINS: &str = "futures-option-chains";

/// Filters for `GET /instruments/futures`.
///
/// Symbols carry their leading slash (`/ESZ4`). Every field is optional;
/// an empty query lists all futures.
#[derive(Debug, Clone, Default)]
pub struct FutureQuery {
    pub symbols: Vec<String>,
    pub product_codes: Vec<String>,
    pub security_ids: Vec<String>,
    pub exchange: Option<String>,
    pub only_active: Option<bool>,
    pub page_offset: Option<u32>,
    pub per_page: Option<u32>,
}

impl FutureQuery {
    pub fn symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_each("symbol[]", &self.symbols)
            .push_each("product-code[]", &self.product_codes)
            .push_each("security-id[]", &self.security_ids)
            .push_opt("exchange", self.exchange.as_deref())
            .push_opt("only-active-futures", self.only_active)
            .push_opt("page-offset", self.page_offset)
            .push_opt("per-page", self.per_page);
        query
    }
}

/// Plain paging, for product listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageQuery {
    pub page_offset: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageQuery {
    fn to_query(self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("page-offset", self.page_offset)
            .push_opt("per-page", self.per_page);
        query
    }
}

/// Filters for `GET /instruments/future-options`.
#[derive(Debug, Clone, Default)]
pub struct FutureOptionQuery {
    pub symbols: Vec<String>,
    pub option_root_symbol: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub option_type: Option<OptionType>,
    pub strike_price: Option<Decimal>,
}

impl FutureOptionQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_each("symbol[]", &self.symbols)
            .push_opt("option-root-symbol", self.option_root_symbol.as_deref())
            .push_opt("expiration-date", self.expiration_date)
            .push_opt(
                "option-type",
                self.option_type
                    .filter(|t| *t != OptionType::Unknown)
                    .map(|t| t.as_str()),
            )
            .push_opt("strike-price", self.strike_price);
        query
    }
}

impl Client {
    // ========================================================================
    // Futures
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn futures(&self, query: &FutureQuery) -> Result<Envelope<Items<Future>>, Error> {
        let mut url = self.endpoint([INSTRUMENTS, FUTURES]);
        query.to_query().apply_to(&mut url);
        self.get_versioned(url).await
    }

    /// A single contract. The symbol's slash is escaped into the path.
    #[instrument(skip(self))]
    pub async fn future(&self, symbol: &str) -> Result<Envelope<Future>, Error> {
        self.get_versioned(self.endpoint([INSTRUMENTS, FUTURES, symbol]))
            .await
    }

    #[instrument(skip(self))]
    pub async fn future_products(
        &self,
        query: &PageQuery,
    ) -> Result<ItemList<FutureProduct>, Error> {
        let mut url = self.endpoint([INSTRUMENTS, FUTURE_PRODUCTS]);
        query.to_query().apply_to(&mut url);
        self.get_items(url, true).await
    }

    #[instrument(skip(self))]
    pub async fn future_product(
        &self,
        exchange: &str,
        code: &str,
    ) -> Result<Envelope<FutureProduct>, Error> {
        self.get_versioned(self.endpoint([INSTRUMENTS, FUTURE_PRODUCTS, exchange, code]))
            .await
    }

    // ========================================================================
    // Futures options
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn future_options(
        &self,
        query: &FutureOptionQuery,
    ) -> Result<Envelope<Items<FutureOption>>, Error> {
        let mut url = self.endpoint([INSTRUMENTS, FUTURE_OPTIONS]);
        query.to_query().apply_to(&mut url);
        self.get_versioned(url).await
    }

    #[instrument(skip(self))]
    pub async fn future_option(&self, symbol: &str) -> Result<Envelope<FutureOption>, Error> {
        self.get_versioned(self.endpoint([INSTRUMENTS, FUTURE_OPTIONS, symbol]))
            .await
    }

    #[instrument(skip(self))]
    pub async fn future_option_products(
        &self,
        query: &PageQuery,
    ) -> Result<ItemList<FutureOptionProduct>, Error> {
        let mut url = self.endpoint([INSTRUMENTS, FUTURE_OPTION_PRODUCTS]);
        query.to_query().apply_to(&mut url);
        self.get_items(url, true).await
    }

    #[instrument(skip(self))]
    pub async fn future_option_product(
        &self,
        exchange: &str,
        root_symbol: &str,
    ) -> Result<Envelope<FutureOptionProduct>, Error> {
        self.get_versioned(self.endpoint([
            INSTRUMENTS,
            FUTURE_OPTION_PRODUCTS,
            exchange,
            root_symbol,
        ]))
        .await
    }

    // ========================================================================
    // Futures option chains
    // ========================================================================

    /// Every option on the futures product `symbol` (e.g. `/ES`), flat.
    #[instrument(skip(self))]
    pub async fn future_option_chain(
        &self,
        symbol: &str,
    ) -> Result<Envelope<Items<FutureOption>>, Error> {
        self.get_versioned(self.endpoint([FUTURES_OPTION_CHAINS, symbol]))
            .await
    }

    #[instrument(skip(self))]
    pub async fn future_option_chain_nested(
        &self,
        symbol: &str,
    ) -> Result<Envelope<NestedFutureOptionChains>, Error> {
        self.get_versioned(self.endpoint([FUTURES_OPTION_CHAINS, symbol, "nested"]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_of(params: QueryParams) -> Vec<(String, String)> {
        let mut url = url::Url::parse("https://api.tastytrade.com/x").unwrap();
        params.apply_to(&mut url);
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn future_query_repeats_list_filters() {
        let query = FutureQuery {
            symbols: vec!["/ESZ4".into()],
            product_codes: vec!["ES".into(), "NQ".into()],
            only_active: Some(true),
            ..Default::default()
        };
        assert_eq!(
            query_of(query.to_query()),
            vec![
                ("symbol[]".into(), "/ESZ4".into()),
                ("product-code[]".into(), "ES".into()),
                ("product-code[]".into(), "NQ".into()),
                ("only-active-futures".into(), "true".into()),
            ]
        );
    }

    #[test]
    fn empty_future_query_has_no_params() {
        assert!(FutureQuery::default().to_query().is_empty());
        assert!(PageQuery::default().to_query().is_empty());
    }

    #[test]
    fn future_option_query_sends_letter_codes() {
        let query = FutureOptionQuery {
            option_root_symbol: Some("ES".into()),
            option_type: Some(OptionType::Put),
            strike_price: Some(Decimal::new(45005, 1)),
            ..Default::default()
        };
        assert_eq!(
            query_of(query.to_query()),
            vec![
                ("option-root-symbol".into(), "ES".into()),
                ("option-type".into(), "P".into()),
                ("strike-price".into(), "4500.5".into()),
            ]
        );

        let unknown = FutureOptionQuery {
            option_type: Some(OptionType::Unknown),
            ..Default::default()
        };
        assert!(unknown.to_query().is_empty());
    }
}
