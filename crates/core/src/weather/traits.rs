use async_trait::async_trait;

use super::{Reading, Result};

/// Source of current temperature readings.
///
/// Implemented by the HTTP client for the upstream API and by the
/// read-through cache decorator that wraps it.
#[async_trait]
pub trait WeatherFetcher: Send + Sync {
    /// Returns the current reading.
    async fn fetch(&self) -> Result<Reading>;
}
