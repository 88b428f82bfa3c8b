//! Validated identifier types.

mod account_number;
mod api_url;

pub use account_number::AccountNumber;
pub use api_url::{ApiUrl, PRODUCTION_URL, SANDBOX_URL};
