//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with an arena recency list and
//! lazy expiration. The store itself is not synchronized; see
//! [`CacheEngine`](crate::cache::CacheEngine) for the shared handle.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::current_timestamp;
use crate::cache::{CacheEntry, CacheStats, NodeHandle, RecencyList};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Cache storage with LRU eviction and absolute expiry.
#[derive(Debug)]
pub struct CacheStore {
    /// Key to arena handle
    index: HashMap<String, NodeHandle>,
    /// Entries ordered from most to least recently used
    recency: RecencyList,
    /// Running counters
    stats: CacheStats,
    /// Maximum number of entries allowed, 0 = unbounded
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, `0` for no limit
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::new(),
            recency: RecencyList::new(),
            stats: CacheStats::new(capacity),
            capacity,
        }
    }

    // == Get ==
    /// Retrieves a value by key and marks it as most recently used.
    ///
    /// Expired entries are removed and reported as misses.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.live_handle(key) {
            Some(handle) => {
                self.recency.move_to_front(handle);
                self.stats.record_hit();
                self.recency.get(handle).map(|entry| entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// An existing entry is updated in place and refreshed. A new entry is
    /// pushed to the front; if that takes the store over capacity the least
    /// recently used entry is evicted.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `expires_at` - Absolute expiry in Unix seconds, `0` for none
    pub fn put(&mut self, key: &str, value: String, expires_at: i64) {
        if let Some(&handle) = self.index.get(key) {
            if let Some(entry) = self.recency.get_mut(handle) {
                entry.value = value;
                entry.expires_at = expires_at;
            }
            self.recency.move_to_front(handle);
            return;
        }

        let handle = self
            .recency
            .push_front(CacheEntry::new(key, value, expires_at));
        self.index.insert(key.to_string(), handle);

        if self.capacity > 0 && self.index.len() > self.capacity {
            self.evict_oldest();
        }
    }

    // == Delete ==
    /// Removes an entry by key. Deleting a missing key is a no-op.
    pub fn delete(&mut self, key: &str) {
        if let Some(handle) = self.index.remove(key) {
            self.recency.remove(handle);
        }
    }

    // == Check And Set ==
    /// Stores `value` only if the key is absent or currently holds `compare`.
    ///
    /// Returns whether the write happened.
    pub fn check_and_set(&mut self, key: &str, value: &str, compare: &str, expires_at: i64) -> bool {
        let matches = match self.live_entry(key) {
            Some(entry) => entry.value == compare,
            None => true,
        };
        if matches {
            self.put(key, value.to_string(), expires_at);
        }
        matches
    }

    // == Increment / Decrement ==
    /// Adds `amount` to the integer stored at `key`, creating it if absent.
    ///
    /// Returns the new value. Fails without mutating when `amount` or the
    /// stored value is not an integer, or on overflow.
    pub fn increment(&mut self, key: &str, amount: &str, expires_at: i64) -> Result<i64> {
        self.apply_delta(key, amount, expires_at, i64::checked_add)
    }

    /// Subtracts `amount` from the integer stored at `key`, creating it as
    /// `amount` if absent.
    pub fn decrement(&mut self, key: &str, amount: &str, expires_at: i64) -> Result<i64> {
        self.apply_delta(key, amount, expires_at, i64::checked_sub)
    }

    fn apply_delta(
        &mut self,
        key: &str,
        amount: &str,
        expires_at: i64,
        op: fn(i64, i64) -> Option<i64>,
    ) -> Result<i64> {
        let delta = parse_integer(amount)?;
        let next = match self.live_entry(key) {
            Some(entry) => {
                let current = parse_integer(&entry.value)?;
                op(current, delta).ok_or_else(|| CacheError::NumericOverflow(key.to_string()))?
            }
            None => delta,
        };
        self.put(key, next.to_string(), expires_at);
        Ok(next)
    }

    // == Append / Prepend ==
    /// Appends `suffix` to the stored value, creating the key if absent.
    pub fn append(&mut self, key: &str, suffix: &str, expires_at: i64) {
        let value = match self.live_entry(key) {
            Some(entry) => format!("{}{}", entry.value, suffix),
            None => suffix.to_string(),
        };
        self.put(key, value, expires_at);
    }

    /// Prepends `prefix` to the stored value, creating the key if absent.
    pub fn prepend(&mut self, key: &str, prefix: &str, expires_at: i64) {
        let value = match self.live_entry(key) {
            Some(entry) => format!("{}{}", prefix, entry.value),
            None => prefix.to_string(),
        };
        self.put(key, value, expires_at);
    }

    // == Flush ==
    /// Discards every entry. Counters survive the flush.
    pub fn flush(&mut self) {
        self.index = HashMap::new();
        self.recency = RecencyList::new();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_key_count(self.index.len());
        stats.max_size = self.capacity;
        stats
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = current_timestamp();
        let expired: Vec<NodeHandle> = self
            .recency
            .handles()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(handle, _)| handle)
            .collect();

        let count = expired.len();
        for handle in expired {
            self.remove_handle(handle);
        }
        self.stats.record_expirations(count);
        count
    }

    // == Accessors ==
    /// Returns the current number of entries, expired-but-untouched included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Internal Helpers ==
    /// Looks a key up, removing it first if it has expired.
    fn live_handle(&mut self, key: &str) -> Option<NodeHandle> {
        let handle = *self.index.get(key)?;
        let expired = self
            .recency
            .get(handle)
            .map_or(true, |entry| entry.is_expired_at(current_timestamp()));
        if expired {
            self.remove_handle(handle);
            self.stats.record_expirations(1);
            return None;
        }
        Some(handle)
    }

    /// Live entry lookup without touching recency.
    fn live_entry(&mut self, key: &str) -> Option<&CacheEntry> {
        let handle = self.live_handle(key)?;
        self.recency.get(handle)
    }

    fn remove_handle(&mut self, handle: NodeHandle) {
        if let Some(entry) = self.recency.remove(handle) {
            self.index.remove(&entry.key);
        }
    }

    fn evict_oldest(&mut self) {
        if let Some(entry) = self.recency.pop_back() {
            self.index.remove(&entry.key);
            self.stats.record_eviction();
            debug!(key = %entry.key, "evicted least recently used entry");
        }
    }
}

/// Parses a strict base-10 `i64`: optional sign, digits only.
fn parse_integer(text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|_| CacheError::InvalidNumber(text.to_string()))
}
