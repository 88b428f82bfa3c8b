//! Customer, account, balance, position and transaction endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::instrument;

use crate::client::{Client, QueryParams};
use crate::envelope::{Envelope, Items, Paginated};
use crate::error::Error;
use crate::models::{
    Account, AccountAuthority, Balance, BalanceSnapshot, Customer, InstrumentType, Position,
    TimeOfDay, TradingStatus, Transaction,
};
use crate::types::AccountNumber;

const CUSTOMERS: &str = "customers";
const ME: &str = "me";
const ACCOUNTS: &str = "accounts";

/// Filters for `GET /accounts/{n}/transactions`.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// `Asc` or `Desc` by execution time.
    pub sort: Option<String>,
    pub transaction_type: Option<String>,
    pub sub_types: Vec<String>,
    pub types: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub instrument_type: Option<InstrumentType>,
    pub symbol: Option<String>,
    pub underlying_symbol: Option<String>,
    pub action: Option<String>,
    pub partition_key: Option<String>,
    pub futures_symbol: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub per_page: Option<u32>,
    pub page_offset: Option<u32>,
}

impl TransactionQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("sort", self.sort.as_deref())
            .push_opt("type", self.transaction_type.as_deref())
            .push_each("sub-type[]", &self.sub_types)
            .push_each("types[]", &self.types)
            .push_opt("start-date", self.start_date)
            .push_opt("end-date", self.end_date)
            .push_opt("instrument-type", self.instrument_type)
            .push_opt("symbol", self.symbol.as_deref())
            .push_opt("underlying-symbol", self.underlying_symbol.as_deref())
            .push_opt("action", self.action.as_deref())
            .push_opt("partition-key", self.partition_key.as_deref())
            .push_opt("futures-symbol", self.futures_symbol.as_deref())
            .push_opt("start-at", self.start_at.map(|t| t.to_rfc3339()))
            .push_opt("end-at", self.end_at.map(|t| t.to_rfc3339()))
            .push_opt("per-page", self.per_page)
            .push_opt("page-offset", self.page_offset);
        query
    }
}

impl Client {
    // ========================================================================
    // Customer
    // ========================================================================

    /// The customer who owns the session.
    #[instrument(skip(self))]
    pub async fn customer(&self) -> Result<Envelope<Customer>, Error> {
        self.get(self.endpoint([CUSTOMERS, ME])).await
    }

    /// Accounts the customer can access.
    #[instrument(skip(self))]
    pub async fn accounts(&self) -> Result<Envelope<Items<AccountAuthority>>, Error> {
        self.get(self.endpoint([CUSTOMERS, ME, ACCOUNTS])).await
    }

    #[instrument(skip(self))]
    pub async fn account(&self, account: &AccountNumber) -> Result<Envelope<Account>, Error> {
        self.get(self.endpoint([CUSTOMERS, ME, ACCOUNTS, account.as_str()]))
            .await
    }

    // ========================================================================
    // Account state
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn trading_status(
        &self,
        account: &AccountNumber,
    ) -> Result<Envelope<TradingStatus>, Error> {
        self.get(self.endpoint([ACCOUNTS, account.as_str(), "trading-status"]))
            .await
    }

    /// Current cash, buying power and margin figures.
    #[instrument(skip(self))]
    pub async fn balances(&self, account: &AccountNumber) -> Result<Envelope<Balance>, Error> {
        self.get(self.endpoint([ACCOUNTS, account.as_str(), "balances"]))
            .await
    }

    /// Balances as of the start or end of a past trading day.
    #[instrument(skip(self))]
    pub async fn balance_snapshots(
        &self,
        account: &AccountNumber,
        date: NaiveDate,
        time_of_day: TimeOfDay,
    ) -> Result<Envelope<Items<BalanceSnapshot>>, Error> {
        let mut url = self.endpoint([ACCOUNTS, account.as_str(), "balance-snapshots"]);
        QueryParams::new()
            .push("snapshot-date", date)
            .push("time-of-day", time_of_day.as_str())
            .apply_to(&mut url);
        self.get(url).await
    }

    #[instrument(skip(self))]
    pub async fn positions(
        &self,
        account: &AccountNumber,
    ) -> Result<Envelope<Items<Position>>, Error> {
        self.get(self.endpoint([ACCOUNTS, account.as_str(), "positions"]))
            .await
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// One page of transaction history. Follow-up pages are requested by the
    /// caller through [`TransactionQuery::page_offset`].
    #[instrument(skip(self, query))]
    pub async fn transactions(
        &self,
        account: &AccountNumber,
        query: &TransactionQuery,
    ) -> Result<Paginated<Transaction>, Error> {
        let mut url = self.endpoint([ACCOUNTS, account.as_str(), "transactions"]);
        query.to_query().apply_to(&mut url);
        self.get(url).await
    }

    #[instrument(skip(self))]
    pub async fn transaction(
        &self,
        account: &AccountNumber,
        id: u64,
    ) -> Result<Envelope<Transaction>, Error> {
        let id = id.to_string();
        self.get(self.endpoint([ACCOUNTS, account.as_str(), "transactions", id.as_str()]))
            .await
    }
}
