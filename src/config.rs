//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold, 0 = unbounded
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds, 0 = disabled
    pub cleanup_interval: u64,
    /// Deployment environment name (from `APP_ENV`)
    pub app_env: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SIZE` - Maximum cache entries (default: 0, unbounded)
    /// - `PORT` - HTTP server port, `8000` or `:8000` (default: 8000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `APP_ENV` - Deployment environment (default: empty)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env::var("SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.capacity),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| parse_port(&v))
                .unwrap_or(defaults.server_port),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cleanup_interval),
            app_env: env::var("APP_ENV").unwrap_or(defaults.app_env),
        }
    }

    /// Whether the server runs in production (quiet request logging).
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// Default `tracing` filter directives for this environment.
    pub fn default_log_filter(&self) -> String {
        let http_level = if self.is_production() { "warn" } else { "debug" };
        format!("lru_kv_server=info,tower_http={}", http_level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 0,
            server_port: 8000,
            cleanup_interval: 60,
            app_env: String::new(),
        }
    }
}

/// Accepts both `8000` and the listen-address form `:8000`.
fn parse_port(raw: &str) -> Option<u16> {
    raw.trim_start_matches(':').parse().ok()
}
