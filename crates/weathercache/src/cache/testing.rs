//! In-memory cache double for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use weathercache_core::cache::{Cache, CacheError, Result};

/// Stored value and the TTL it was written with.
pub type StoredEntry = (Vec<u8>, Option<Duration>);

/// Cache that records every call and can be told to fail reads or writes.
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, StoredEntry>>,
    gets: AtomicUsize,
    sets: AtomicUsize,
    disconnects: AtomicUsize,
    fail_reads: bool,
    fail_writes: bool,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `get` returns a connection error.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every `set` returns an operation error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Pre-populates a key, as if written by an earlier request.
    pub fn with_entry(self, key: &str, value: &[u8]) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_vec(), None));
        self
    }

    pub fn entry(&self, key: &str) -> Option<StoredEntry> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn disconnect_calls(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Cache for RecordingCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(CacheError::ConnectionFailed("connection reset".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone()))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(CacheError::OperationFailed(
                "OOM command not allowed".to_string(),
            ));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_vec(), ttl));
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
