//! Pure functions for moving readings in and out of cache bytes.
//!
//! The cached value is the upstream JSON payload exactly as it was received.
//! The temperature is derived again on read, so a cached blob and a fresh
//! response go through the same extraction.

use crate::weather::Reading;

use super::{CacheError, Result};

/// Serializes a reading's payload to JSON bytes.
pub fn serialize_reading(reading: &Reading) -> Result<Vec<u8>> {
    serde_json::to_vec(&reading.payload).map_err(|e| CacheError::Serialization(e.to_string()))
}

/// Deserializes JSON bytes into a reading.
///
/// Fails with `CacheError::Serialization` when the bytes are not JSON or
/// when the JSON does not carry a numeric `current.temperature_2m`.
pub fn deserialize_reading(bytes: &[u8]) -> Result<Reading> {
    let payload: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| CacheError::Serialization(e.to_string()))?;
    Reading::from_payload(payload).map_err(|e| CacheError::Serialization(e.to_string()))
}
