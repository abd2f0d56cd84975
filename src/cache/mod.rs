//! Cache Module
//!
//! Provides in-memory caching with absolute expiry and LRU eviction.

mod engine;
pub(crate) mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use engine::CacheEngine;
pub use entry::{current_timestamp, CacheEntry, NEVER_EXPIRES};
pub use lru::{NodeHandle, RecencyList};
pub use stats::CacheStats;
pub use store::CacheStore;
