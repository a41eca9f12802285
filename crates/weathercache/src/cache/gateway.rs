//! Fail-open gateway in front of the cache backend.
//!
//! The gateway is an accelerator, never a dependency. Whatever the backend
//! does, callers only ever see "a value" or "no value":
//!
//! - A failed connect at startup disables the gateway for the lifetime of
//!   the process. There is no reconnect.
//! - A failed read is logged and reported as a miss. It does not disable
//!   the gateway.
//! - A failed write is logged and swallowed. It does not disable the
//!   gateway either.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use weathercache_core::cache::{Cache, Result};

/// Best-effort access to the cache backend.
pub struct CacheGateway {
    backend: Option<Arc<dyn Cache>>,
    available: AtomicBool,
}

impl CacheGateway {
    /// Awaits a backend connection attempt and builds the gateway from it.
    ///
    /// Never fails: a connection error is logged and yields a disabled
    /// gateway.
    pub async fn connect<C, F>(connecting: F) -> Self
    where
        C: Cache + 'static,
        F: Future<Output = Result<C>>,
    {
        match connecting.await {
            Ok(cache) => {
                tracing::info!("Connected to cache");
                Self::with_backend(Arc::new(cache))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Cache not available, proceeding without cache");
                Self::disabled()
            }
        }
    }

    /// Creates an enabled gateway over an already connected backend.
    pub fn with_backend(backend: Arc<dyn Cache>) -> Self {
        Self {
            backend: Some(backend),
            available: AtomicBool::new(true),
        }
    }

    /// Creates a gateway with no backend. Every operation is a no-op.
    pub fn disabled() -> Self {
        Self {
            backend: None,
            available: AtomicBool::new(false),
        }
    }

    /// Returns whether cache operations are currently attempted.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    fn backend(&self) -> Option<&Arc<dyn Cache>> {
        if self.is_available() {
            self.backend.as_ref()
        } else {
            None
        }
    }

    /// Reads a key. Disabled gateways return `None` without any I/O.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let backend = self.backend()?;

        match backend.get(key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Failed to get from cache");
                None
            }
        }
    }

    /// Writes a key with an expiry. Failures never reach the caller.
    pub async fn set(&self, key: &str, value: &[u8], ttl: Duration) {
        let Some(backend) = self.backend() else {
            return;
        };

        if let Err(err) = backend.set(key, value, Some(ttl)).await {
            tracing::warn!(key = %key, error = %err, "Failed to write to cache");
        }
    }

    /// Closes the backend connection. Only the first call on an available
    /// gateway does anything.
    pub async fn disconnect(&self) {
        if !self.available.swap(false, Ordering::AcqRel) {
            return;
        }
        let Some(backend) = self.backend.as_ref() else {
            return;
        };

        match backend.disconnect().await {
            Ok(()) => tracing::info!("Disconnected from cache"),
            Err(err) => tracing::warn!(error = %err, "Failed to disconnect from cache"),
        }
    }
}
