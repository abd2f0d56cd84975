//! Cache Statistics Module
//!
//! Tracks key count and capacity plus hit, miss, eviction and expiry counters.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of the cache.
///
/// Serializes with camelCase field names (`keyCount`, `maxSize`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Current number of entries, including expired ones not yet touched or swept
    pub key_count: usize,
    /// Configured capacity, 0 = unbounded
    pub max_size: usize,
    /// Number of successful reads
    pub hits: u64,
    /// Number of failed reads (key missing or expired)
    pub misses: u64,
    /// Number of entries evicted due to LRU policy
    pub evictions: u64,
    /// Number of entries removed because their expiry passed
    pub expirations: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates empty stats for a cache of the given capacity.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub fn set_key_count(&mut self, count: usize) {
        self.key_count = count;
    }
}
