//! Equity, cryptocurrency, warrant and precision reference data.

use tracing::instrument;

use crate::client::{Client, QueryParams};
use crate::envelope::{Envelope, ItemList, Items};
use crate::error::Error;
use crate::models::{Cryptocurrency, Equity, QuantityDecimalPrecision, Warrant};

pub(crate) const INSTRUMENTS: &str = "instruments";
const EQUITIES: &str = "equities";
const CRYPTOCURRENCIES: &str = "cryptocurrencies";
const WARRANTS: &str = "warrants";
const QUANTITY_DECIMAL_PRECISIONS: &str = "quantity-decimal-precisions";

/// Filters for `GET /instruments/equities`.
#[derive(Debug, Clone, Default)]
pub struct EquityQuery {
    pub symbols: Vec<String>,
    pub lendability: Option<String>,
    pub is_index: Option<bool>,
    pub is_etf: Option<bool>,
}

impl EquityQuery {
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
            .push_opt("lendability", self.lendability.as_deref())
            .push_opt("is-index", self.is_index)
            .push_opt("is-etf", self.is_etf);
        query
    }
}

/// Paging and filter for `GET /instruments/equities/active`.
#[derive(Debug, Clone, Default)]
pub struct ActiveEquityQuery {
    pub lendability: Option<String>,
    pub per_page: Option<u32>,
    pub page_offset: Option<u32>,
}

impl ActiveEquityQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("lendability", self.lendability.as_deref())
            .push_opt("per-page", self.per_page)
            .push_opt("page-offset", self.page_offset);
        query
    }
}

impl Client {
    // ========================================================================
    // Equities
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn equity(&self, symbol: &str) -> Result<Envelope<Equity>, Error> {
        self.get_versioned(self.endpoint([INSTRUMENTS, EQUITIES, symbol]))
            .await
    }

    #[instrument(skip(self))]
    pub async fn equities(&self, query: &EquityQuery) -> Result<Envelope<Items<Equity>>, Error> {
        let mut url = self.endpoint([INSTRUMENTS, EQUITIES]);
        query.to_query().apply_to(&mut url);
        self.get_versioned(url).await
    }

    /// Every equity currently tradeable, one page at a time.
    #[instrument(skip(self))]
    pub async fn active_equities(
        &self,
        query: &ActiveEquityQuery,
    ) -> Result<Envelope<Items<Equity>>, Error> {
        let mut url = self.endpoint([INSTRUMENTS, EQUITIES, "active"]);
        query.to_query().apply_to(&mut url);
        self.get_versioned(url).await
    }

    // ========================================================================
    // Cryptocurrencies
    // ========================================================================

    /// Cryptocurrencies, optionally restricted to `symbols`.
    ///
    /// The list shape of this endpoint varies, so it is normalized.
    #[instrument(skip(self))]
    pub async fn cryptocurrencies(
        &self,
        symbols: &[String],
    ) -> Result<ItemList<Cryptocurrency>, Error> {
        let mut url = self.endpoint([INSTRUMENTS, CRYPTOCURRENCIES]);
        QueryParams::new()
            .push_each("symbol[]", symbols)
            .apply_to(&mut url);
        self.get_items(url, true).await
    }

    /// A single cryptocurrency, e.g. `BTC/USD`.
    #[instrument(skip(self))]
    pub async fn cryptocurrency(&self, symbol: &str) -> Result<Envelope<Cryptocurrency>, Error> {
        self.get_versioned(self.endpoint([INSTRUMENTS, CRYPTOCURRENCIES, symbol]))
            .await
    }

    // ========================================================================
    // Warrants
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn warrants(&self, symbols: &[String]) -> Result<Envelope<Items<Warrant>>, Error> {
        let mut url = self.endpoint([INSTRUMENTS, WARRANTS]);
        QueryParams::new()
            .push_joined("symbol", symbols)
            .apply_to(&mut url);
        self.get_versioned(url).await
    }

    #[instrument(skip(self))]
    pub async fn warrant(&self, symbol: &str) -> Result<Envelope<Warrant>, Error> {
        self.get_versioned(self.endpoint([INSTRUMENTS, WARRANTS, symbol]))
            .await
    }

    // ========================================================================
    // Order sizing
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn quantity_decimal_precisions(
        &self,
    ) -> Result<ItemList<QuantityDecimalPrecision>, Error> {
        self.get_items(self.endpoint([INSTRUMENTS, QUANTITY_DECIMAL_PRECISIONS]), true)
            .await
    }
}
