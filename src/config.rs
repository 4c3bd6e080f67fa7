//! Configuration Module
//!
//! Loads settings from environment variables.

use std::env;
use std::time::Duration;

/// Default page fetched when the prompt starts.
pub const DEFAULT_START_URL: &str = "https://pokeapi.co/api/v2/location-area?offset=0&limit=20";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Entry lifetime and reaper period in milliseconds
    pub cache_interval_ms: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// URL fetched on startup to warm the cache
    pub start_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_MS` - Entry lifetime and reaper period (default: 5000)
    /// - `REQUEST_TIMEOUT_SECS` - HTTP request timeout (default: 10)
    /// - `START_URL` - First page to fetch (default: PokeAPI location areas)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval_ms: env::var("CACHE_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval_ms),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            start_url: env::var("START_URL").unwrap_or(defaults.start_url),
        }
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: 5000,
            request_timeout_secs: 10,
            start_url: DEFAULT_START_URL.to_string(),
        }
    }
}
