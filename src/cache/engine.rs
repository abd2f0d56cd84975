//! Cache Engine Module
//!
//! Thread-safe handle around [`CacheStore`]. Every operation holds one
//! exclusive lock for its whole duration, so compound read-modify-write
//! operations are atomic with respect to every other call.

use parking_lot::Mutex;
use tracing::info;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

// == Cache Engine ==
/// The shared cache. Share it behind an `Arc`; callers never lock.
#[derive(Debug)]
pub struct CacheEngine {
    inner: Mutex<CacheStore>,
}

impl CacheEngine {
    /// Creates an engine holding at most `capacity` entries (`0` = unbounded).
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheStore::new(capacity)),
        }
    }

    /// Returns the value for `key`, or None on a miss or expired entry.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key)
    }

    pub fn put(&self, key: &str, value: &str, expires_at: i64) {
        self.inner.lock().put(key, value.to_string(), expires_at);
    }

    pub fn delete(&self, key: &str) {
        self.inner.lock().delete(key);
    }

    /// Writes `value` if the key is absent or holds `compare`.
    pub fn check_and_set(&self, key: &str, value: &str, compare: &str, expires_at: i64) -> bool {
        self.inner
            .lock()
            .check_and_set(key, value, compare, expires_at)
    }

    pub fn increment(&self, key: &str, amount: &str, expires_at: i64) -> Result<i64> {
        self.inner.lock().increment(key, amount, expires_at)
    }

    pub fn decrement(&self, key: &str, amount: &str, expires_at: i64) -> Result<i64> {
        self.inner.lock().decrement(key, amount, expires_at)
    }

    pub fn append(&self, key: &str, value: &str, expires_at: i64) {
        self.inner.lock().append(key, value, expires_at);
    }

    pub fn prepend(&self, key: &str, value: &str, expires_at: i64) {
        self.inner.lock().prepend(key, value, expires_at);
    }

    /// Empties the cache in a single step.
    pub fn flush(&self) {
        let mut store = self.inner.lock();
        let dropped = store.len();
        store.flush();
        info!(dropped, "cache flushed");
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Removes every expired entry, returning how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.inner.lock().purge_expired()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Drains the cache and returns the stats as they were just before.
    pub fn shutdown(&self) -> CacheStats {
        let mut store = self.inner.lock();
        let stats = store.stats();
        store.flush();
        info!(
            keys = stats.key_count,
            hits = stats.hits,
            misses = stats.misses,
            evictions = stats.evictions,
            "cache engine shut down"
        );
        stats
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::entry::{current_timestamp, NEVER_EXPIRES};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_engine_basic_operations() {
        let engine = CacheEngine::new(10);

        engine.put("k", "v", NEVER_EXPIRES);
        assert_eq!(engine.get("k"), Some("v".to_string()));

        engine.delete("k");
        assert_eq!(engine.get("k"), None);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_engine_stats_snapshot() {
        let engine = CacheEngine::new(3);
        engine.put("a", "1", NEVER_EXPIRES);
        engine.put("b", "2", NEVER_EXPIRES);

        let stats = engine.stats();
        assert_eq!(stats.key_count, 2);
        assert_eq!(stats.max_size, 3);
        assert_eq!(engine.capacity(), 3);
    }

    #[test]
    fn test_engine_expired_entry_leaves_key_count() {
        let engine = CacheEngine::new(0);
        engine.put("K", "v", current_timestamp() - 1);
        assert_eq!(engine.stats().key_count, 1);

        assert_eq!(engine.get("K"), None);
        assert_eq!(engine.stats().key_count, 0);
    }

    #[test]
    fn test_engine_flush() {
        let engine = CacheEngine::new(0);
        engine.put("a", "1", NEVER_EXPIRES);
        engine.put("b", "2", NEVER_EXPIRES);

        engine.flush();

        assert_eq!(engine.stats().key_count, 0);
        assert_eq!(engine.get("a"), None);
        assert_eq!(engine.get("b"), None);
    }

    #[test]
    fn test_engine_shutdown_reports_final_stats() {
        let engine = CacheEngine::new(0);
        engine.put("a", "1", NEVER_EXPIRES);
        engine.get("a");

        let stats = engine.shutdown();

        assert_eq!(stats.key_count, 1);
        assert_eq!(stats.hits, 1);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_engine_purge_expired() {
        let engine = CacheEngine::new(0);
        engine.put("old", "v", current_timestamp() - 5);
        engine.put("new", "v", NEVER_EXPIRES);

        assert_eq!(engine.purge_expired(), 1);
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_concurrent_increments_are_atomic() {
        let engine = Arc::new(CacheEngine::new(0));
        let threads = 8;
        let per_thread = 500;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        engine.increment("counter", "1", NEVER_EXPIRES).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(
            engine.get("counter"),
            Some((threads * per_thread).to_string())
        );
    }

    #[test]
    fn test_concurrent_appends_lose_nothing() {
        let engine = Arc::new(CacheEngine::new(0));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    for _ in 0..250 {
                        engine.append("log", "x", NEVER_EXPIRES);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(engine.get("log").map(|v| v.len()), Some(1_000));
    }

    #[test]
    fn test_concurrent_check_and_set_single_winner() {
        let engine = Arc::new(CacheEngine::new(0));
        engine.put("lock", "free", NEVER_EXPIRES);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    engine.check_and_set("lock", &format!("owner{}", i), "free", NEVER_EXPIRES)
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
    }
}
