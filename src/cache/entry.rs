//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with absolute expiry.

use chrono::Utc;

/// Sentinel expiry meaning "never expires".
pub const NEVER_EXPIRES: i64 = 0;

// == Cache Entry ==
/// Represents a single cache entry with its key, value and expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The key this entry is indexed under
    pub key: String,
    /// The stored value
    pub value: String,
    /// Expiration timestamp (Unix seconds), 0 = no expiration
    pub expires_at: i64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// # Arguments
    /// * `key` - The key of the entry
    /// * `value` - The value to store
    /// * `expires_at` - Absolute expiry in Unix seconds, `0` for none
    pub fn new(key: impl Into<String>, value: impl Into<String>, expires_at: i64) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired relative to `now`.
    ///
    /// Boundary condition: an entry whose expiry equals the current second is
    /// already expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at != NEVER_EXPIRES && self.expires_at <= now
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_expiry() {
        let entry = CacheEntry::new("key", "test_value", NEVER_EXPIRES);

        assert_eq!(entry.key, "key");
        assert_eq!(entry.value, "test_value");
        assert!(!entry.is_expired_at(current_timestamp()));
    }

    #[test]
    fn test_entry_future_expiry() {
        let entry = CacheEntry::new("key", "test_value", current_timestamp() + 60);

        assert!(!entry.is_expired_at(current_timestamp()));
        assert!(entry.is_expired_at(current_timestamp() + 60));
    }

    #[test]
    fn test_entry_past_expiry() {
        let entry = CacheEntry::new("key", "test_value", current_timestamp() - 1);

        assert!(entry.is_expired_at(current_timestamp()));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = 1_700_000_000;
        let entry = CacheEntry::new("key", "test", now);

        assert!(entry.is_expired_at(now), "Entry should be expired at boundary");
        assert!(!entry.is_expired_at(now - 1));
    }

    #[test]
    fn test_negative_expiry_is_expired() {
        let entry = CacheEntry::new("key", "test", -5);
        assert!(entry.is_expired_at(0));
    }

    #[test]
    fn test_zero_never_expires() {
        let entry = CacheEntry::new("key", "test", NEVER_EXPIRES);
        assert!(!entry.is_expired_at(i64::MAX));
    }
}
