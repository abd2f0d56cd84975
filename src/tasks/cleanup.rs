//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries so keys
//! nobody reads again do not hold memory until they are evicted.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheEngine;

/// Spawns a background task that periodically purges expired entries.
///
/// Each pass takes the engine lock once, for the duration of the sweep.
///
/// # Arguments
/// * `cache` - Shared cache engine
/// * `cleanup_interval_secs` - Interval in seconds between sweeps, must be > 0
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task(cache: Arc<CacheEngine>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired();
            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
