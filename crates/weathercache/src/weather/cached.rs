//! Read-through cache decorator for weather fetchers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use weathercache_core::cache::{deserialize_reading, serialize_reading};
use weathercache_core::weather::{Reading, Result, WeatherFetcher};

use crate::cache::CacheGateway;

/// Cached weather fetcher decorator.
///
/// Implements the read-through pattern over a single key:
/// - **Hit**: decode the cached payload and return it, upstream untouched
/// - **Miss** (or gateway disabled, or undecodable blob): fetch upstream,
///   store the payload with the TTL, return the fresh reading
///
/// Upstream errors are returned as-is. Cache problems never are.
///
/// # Type Parameters
///
/// * `F` - The upstream fetcher implementation
pub struct CachedWeatherFetcher<F>
where
    F: WeatherFetcher,
{
    fetcher: Arc<F>,
    gateway: Arc<CacheGateway>,
    key: String,
    ttl: Duration,
}

impl<F> CachedWeatherFetcher<F>
where
    F: WeatherFetcher,
{
    /// Creates a new cached weather fetcher.
    ///
    /// # Arguments
    ///
    /// * `fetcher` - The upstream fetcher to cache
    /// * `gateway` - The cache gateway
    /// * `key` - Cache key owned by this server instance
    /// * `ttl` - Time-to-live for the cached payload
    pub fn new(
        fetcher: Arc<F>,
        gateway: Arc<CacheGateway>,
        key: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            fetcher,
            gateway,
            key: key.into(),
            ttl,
        }
    }

    async fn cached_reading(&self) -> Option<Reading> {
        let bytes = self.gateway.get(&self.key).await?;

        match deserialize_reading(&bytes) {
            Ok(reading) => Some(reading),
            Err(err) => {
                // Deserialization failed - treat as cache miss
                tracing::warn!(key = %self.key, error = %err, "Cached weather payload unreadable");
                None
            }
        }
    }
}

#[async_trait]
impl<F> WeatherFetcher for CachedWeatherFetcher<F>
where
    F: WeatherFetcher + 'static,
{
    async fn fetch(&self) -> Result<Reading> {
        if let Some(reading) = self.cached_reading().await {
            tracing::info!(key = %self.key, source = "cache", "Serving weather from cache");
            return Ok(reading);
        }

        tracing::info!(key = %self.key, source = "api", "Serving weather from API");
        let reading = self.fetcher.fetch().await?;

        match serialize_reading(&reading) {
            Ok(bytes) => self.gateway.set(&self.key, &bytes, self.ttl).await,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "Failed to serialize weather payload")
            }
        }

        Ok(reading)
    }
}
