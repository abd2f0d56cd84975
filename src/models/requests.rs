//! Request DTOs for the cache server API
//!
//! Every route takes its arguments from the query string. Missing
//! parameters decode as empty strings, and a missing or malformed `expire`
//! decodes as `0` (never expires).

use serde::{Deserialize, Deserializer};

use crate::cache::NEVER_EXPIRES;

/// Query for routes that only need a key (`/get`, `/delete`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyQuery {
    /// The cache key
    #[serde(default)]
    pub key: String,
}

/// Query for value-writing routes (`/set`, `/append`, `/prepend`,
/// `/increment`, `/decrement`).
///
/// For increment and decrement, `value` carries the amount.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WriteQuery {
    /// The cache key
    #[serde(default)]
    pub key: String,
    /// The value (or amount) to write
    #[serde(default)]
    pub value: String,
    /// Absolute expiry in Unix seconds, `0` for none
    #[serde(default, deserialize_with = "lenient_expire")]
    pub expire: i64,
}

/// Query for `/checkandset`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckAndSetQuery {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    /// Value the key must currently hold for the write to happen
    #[serde(default)]
    pub compare: String,
    #[serde(default, deserialize_with = "lenient_expire")]
    pub expire: i64,
}

/// Parses an expiry, falling back to never-expires on garbage input.
pub fn parse_expire(raw: &str) -> i64 {
    raw.parse().unwrap_or(NEVER_EXPIRES)
}

fn lenient_expire<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_expire(&raw))
}
