//! Weather fetcher double for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};

use weathercache_core::weather::{Reading, Result, WeatherError, WeatherFetcher};

/// Minimal upstream payload carrying the given temperature.
pub fn payload(temperature: f64) -> Value {
    json!({
        "timezone": "Africa/Cairo",
        "current": { "time": "2024-06-15T12:00", "temperature_2m": temperature }
    })
}

/// Fetcher that returns a canned result and counts how often it was asked.
pub struct StubFetcher {
    response: Result<Reading>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn returning(temperature: f64) -> Self {
        let reading = Reading {
            temperature,
            payload: payload(temperature),
        };
        Self {
            response: Ok(reading),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: WeatherError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherFetcher for StubFetcher {
    async fn fetch(&self) -> Result<Reading> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
