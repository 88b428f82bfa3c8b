//! Endpoint accessors.
//!
//! Each submodule adds methods to [`Client`](crate::Client) for one area of
//! the API. Instrument lookups send the configured `Accept-Version`; account
//! and market data calls do not.

mod accounts;
mod backtesting;
mod futures;
mod instruments;
mod market_data;
mod options;

pub use accounts::TransactionQuery;
pub use futures::{FutureOptionQuery, FutureQuery, PageQuery};
pub use instruments::{ActiveEquityQuery, EquityQuery};
pub use market_data::QuoteQuery;
pub use options::EquityOptionQuery;
