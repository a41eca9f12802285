use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for basic key-value cache operations.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Closes the connection to the backend.
    ///
    /// Backends without a persistent connection keep the default no-op.
    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
