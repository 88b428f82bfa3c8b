//! tasty - Typed async client for the tastytrade REST API
//!
//! Every call goes through a [`Client`]. Authenticate once with
//! [`Client::authenticate`]; the session token is then attached to every
//! request made through that client and its clones.
//!
//! # Example
//!
//! ```no_run
//! use tasty::{AccountNumber, Client, Credentials};
//!
//! # async fn example() -> Result<(), tasty::Error> {
//! let client = Client::builder().sandbox().api_version("20240101").build()?;
//! let user = client
//!     .authenticate(Credentials::new("alice", "hunter2"))
//!     .await?;
//! println!("logged in as {}", user.username);
//!
//! let account = AccountNumber::new("5WT00000")?;
//! let positions = client.positions(&account).await?;
//! for position in positions.data {
//!     println!("{} {}", position.symbol, position.quantity);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod models;
pub mod types;

// Re-export primary types at crate root for convenience
pub use api::{
    ActiveEquityQuery, EquityOptionQuery, EquityQuery, FutureOptionQuery, FutureQuery, PageQuery,
    QuoteQuery, TransactionQuery,
};
pub use auth::{Credentials, SessionToken, User};
pub use client::{ApiRequest, Client, ClientBuilder, DEFAULT_TIMEOUT, QueryParams, RawResponse};
pub use envelope::{Envelope, ItemList, Items, Paginated, Pagination, decode_into, decode_items};
pub use error::{ApiError, AuthError, DecodeError, Error, InvalidInputError, TransportError};
pub use types::{AccountNumber, ApiUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
