//! Redis cache implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use weathercache_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Upper bound for establishing a connection and for each command.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(2);

/// Redis cache backend using connection manager for pooling.
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Creates a new Redis cache connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        // One retry only: an unreachable Redis must not hold up startup.
        let config = redis::aio::ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(COMMAND_TIMEOUT)
            .set_response_timeout(COMMAND_TIMEOUT);
        let conn = redis::aio::ConnectionManager::new_with_config(client, config)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }

    /// Builds the connection URL from a host and port pair.
    pub fn url(host: &str, port: u16) -> String {
        format!("redis://{}:{}", host, port)
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();

        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("QUIT")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }
}
