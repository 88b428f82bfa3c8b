//! Equity options and option chains.

use tracing::instrument;

use super::instruments::INSTRUMENTS;
use crate::client::{Client, QueryParams};
use crate::envelope::{Envelope, Items};
use crate::error::Error;
use crate::models::{CompactOptionChain, EquityOption, NestedOptionChain};

const EQUITY_OPTIONS: &str = "equity-options";
const OPTION_CHAINS: &str = "option-chains";

/// Filters for `GET /instruments/equity-options`.
#[derive(Debug, Clone, Default)]
pub struct EquityOptionQuery {
    /// OCC symbols, e.g. `AAPL  250117C00150000`.
    pub symbols: Vec<String>,
    pub active: Option<bool>,
    pub with_expired: Option<bool>,
}

impl EquityOptionQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_each("symbol[]", &self.symbols)
            .push_opt("active", self.active)
            .push_opt("with-expired", self.with_expired);
        query
    }
}

impl Client {
    // ========================================================================
    // Equity options
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn equity_options(
        &self,
        query: &EquityOptionQuery,
    ) -> Result<Envelope<Items<EquityOption>>, Error> {
        let mut url = self.endpoint([INSTRUMENTS, EQUITY_OPTIONS]);
        query.to_query().apply_to(&mut url);
        self.get_versioned(url).await
    }

    #[instrument(skip(self))]
    pub async fn equity_option(
        &self,
        symbol: &str,
        active: Option<bool>,
    ) -> Result<Envelope<EquityOption>, Error> {
        let mut url = self.endpoint([INSTRUMENTS, EQUITY_OPTIONS, symbol]);
        QueryParams::new()
            .push_opt("active", active)
            .apply_to(&mut url);
        self.get_versioned(url).await
    }

    // ========================================================================
    // Chains
    // ========================================================================

    /// Every option on `symbol`, flat.
    #[instrument(skip(self))]
    pub async fn option_chain(&self, symbol: &str) -> Result<Envelope<Items<EquityOption>>, Error> {
        self.get_versioned(self.endpoint([OPTION_CHAINS, symbol]))
            .await
    }

    /// A chain looked up by its numeric id rather than the underlying.
    #[instrument(skip(self))]
    pub async fn option_chain_by_id(
        &self,
        id: u64,
    ) -> Result<Envelope<Items<EquityOption>>, Error> {
        let id = id.to_string();
        self.get_versioned(self.endpoint([OPTION_CHAINS, id.as_str()]))
            .await
    }

    /// The chain grouped by expiration, then strike.
    #[instrument(skip(self))]
    pub async fn option_chain_nested(
        &self,
        symbol: &str,
    ) -> Result<Envelope<Items<NestedOptionChain>>, Error> {
        self.get_versioned(self.endpoint([OPTION_CHAINS, symbol, "nested"]))
            .await
    }

    #[instrument(skip(self))]
    pub async fn option_chain_compact(
        &self,
        symbol: &str,
    ) -> Result<Envelope<Items<CompactOptionChain>>, Error> {
        self.get_versioned(self.endpoint([OPTION_CHAINS, symbol, "compact"]))
            .await
    }
}
