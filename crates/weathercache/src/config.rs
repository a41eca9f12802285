use std::{env, time::Duration};

/// Tuning knobs loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 600)
    pub cache_ttl_seconds: u64,
    /// Whole-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Upstream weather API timeout in seconds (default: 5)
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 600)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    /// - `UPSTREAM_TIMEOUT_SECONDS` - Upstream API timeout in seconds (default: 5)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable lookup. Unset or unparsable
    /// values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |name: &str| lookup(name).and_then(|v| v.parse().ok());

        Self {
            cache_ttl_seconds: parse("CACHE_TTL_SECONDS").unwrap_or(600),
            request_timeout_seconds: parse("REQUEST_TIMEOUT_SECONDS").unwrap_or(10),
            upstream_timeout_seconds: parse("UPSTREAM_TIMEOUT_SECONDS").unwrap_or(5),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get the upstream timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
