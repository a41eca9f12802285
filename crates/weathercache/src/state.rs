//! Shared application state.
//!
//! Cloned for each request handler. Holds the weather source every request
//! reads from and the cache gateway, which shutdown needs to disconnect.

use std::sync::Arc;

use weathercache_core::cache::weather_data_key;
use weathercache_core::weather::WeatherFetcher;

use crate::{cache::CacheGateway, config::Config, weather::CachedWeatherFetcher};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Instance identifier shown on the page and used in the cache key.
    pub server_number: Arc<str>,
    /// Read-through weather source (cache first, upstream on miss).
    pub weather: Arc<dyn WeatherFetcher>,
    /// Cache gateway shared with the weather source.
    pub gateway: Arc<CacheGateway>,
}

impl AppState {
    /// Wires an upstream fetcher behind the read-through cache for this
    /// server instance.
    pub fn build<F>(
        server_number: &str,
        upstream: Arc<F>,
        gateway: Arc<CacheGateway>,
        config: &Config,
    ) -> Self
    where
        F: WeatherFetcher + 'static,
    {
        let weather = CachedWeatherFetcher::new(
            upstream,
            Arc::clone(&gateway),
            weather_data_key(server_number),
            config.cache_ttl(),
        );

        Self {
            server_number: Arc::from(server_number),
            weather: Arc::new(weather),
            gateway,
        }
    }
}
