//! LRU KV Server - An in-memory key/value cache over HTTP
//!
//! Bounded LRU eviction, absolute per-entry expiry, and atomic compound
//! operations (check-and-set, increment/decrement, append/prepend).

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::{CacheEngine, CacheStats};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_cleanup_task;
