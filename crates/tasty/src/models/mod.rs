//! Records returned by the API.
//!
//! Field names follow the API's kebab-case keys. Every record tolerates
//! missing fields. Amounts, prices, quantities and greeks are
//! [`Decimal`](rust_decimal::Decimal) whether the API sends them as strings or
//! numbers.

mod account;
mod backtest;
mod balance;
mod common;
pub(crate) mod de;
mod future;
mod instrument;
mod market_data;
mod option;
mod position;
mod transaction;

pub use account::{Account, AccountAuthority, Address, Customer, CustomerSuitability, Person, TradingStatus};
pub use backtest::{
    Backtest, BacktestLeg, BacktestRequest, Bounds, EntryConditions, ExitConditions,
};
pub use balance::{Balance, BalanceSnapshot, TimeOfDay};
pub use common::{InstrumentType, OptionType, PriceEffect, QuantityDirection, TickSize};
pub use future::{
    EtfEquivalent, Future, FutureOption, FutureOptionChain, FutureOptionExpiration,
    FutureOptionProduct, FutureProduct, NestedFutureOptionChains, Roll,
};
pub use instrument::{
    Cryptocurrency, DestinationVenueSymbol, Equity, QuantityDecimalPrecision, Warrant,
};
pub use market_data::{Dividend, EarningsReport, ExpirationImpliedVolatility, MarketMetric, Quote};
pub use option::{CompactOptionChain, Deliverable, EquityOption, Expiration, NestedOptionChain, Strike};
pub use position::Position;
pub use transaction::Transaction;
