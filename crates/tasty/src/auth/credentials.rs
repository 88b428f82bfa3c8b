//! Login credentials type.

use std::fmt;

/// Login and password for the sessions endpoint.
///
/// Passed by value to [`Client::authenticate`](crate::Client::authenticate),
/// which drops it when the call returns. The password is never exposed in
/// `Debug` output.
///
/// # Example
///
/// ```
/// use tasty::Credentials;
///
/// let creds = Credentials::new("trader@example.com", "hunter2");
/// assert_eq!(creds.login(), "trader@example.com");
/// assert!(!format!("{creds:?}").contains("hunter2"));
/// ```
#[derive(Clone)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    /// Create new credentials from a username or email and a password.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Returns the username or email.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Only for building the login request body.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("trader@example.com", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("trader@example.com"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
