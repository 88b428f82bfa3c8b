//! Authentication.
//!
//! A [`Client`](crate::Client) starts out unauthenticated. A successful
//! [`Client::authenticate`](crate::Client::authenticate) installs a
//! [`SessionToken`] that is attached to every later request. There is no
//! refresh and no automatic logout; an expired token surfaces as an error
//! for which [`Error::is_auth_error`](crate::Error::is_auth_error) is true.

mod credentials;
mod session;
mod token;

pub use credentials::Credentials;
pub use session::User;
pub use token::SessionToken;
