//! Account number type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A brokerage account number, e.g. `5WT00001`.
///
/// Input is trimmed and upper-cased so numbers typed by hand match the
/// canonical form the API returns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let normalized = raw.trim().to_ascii_uppercase();

        if normalized.is_empty() {
            return Err(InvalidInputError::AccountNumber {
                value: raw.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidInputError::AccountNumber {
                value: raw.to_string(),
                reason: "must contain only letters and digits".to_string(),
            }
            .into());
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for AccountNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AccountNumber::new(&s).map_err(serde::de::Error::custom)
    }
}
