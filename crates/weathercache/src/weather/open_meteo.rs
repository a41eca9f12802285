//! HTTP client for an Open-Meteo compatible forecast endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use weathercache_core::weather::{Reading, Result, WeatherError, WeatherFetcher, WeatherQuery};

/// Longest upstream body quoted back in an error.
const MAX_ERROR_BODY: usize = 200;

/// Fetches the current temperature from the configured weather API.
#[derive(Debug, Clone)]
pub struct OpenMeteoFetcher {
    http: Client,
    url: String,
    query: WeatherQuery,
}

impl OpenMeteoFetcher {
    /// Creates a fetcher for `url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::RequestFailed` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_reqwest_error)?;

        Ok(Self {
            http,
            url: url.into(),
            query: WeatherQuery::default(),
        })
    }

    /// Get the upstream URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WeatherFetcher for OpenMeteoFetcher {
    async fn fetch(&self) -> Result<Reading> {
        let response = self
            .http
            .get(&self.url)
            .query(&self.query)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(WeatherError::UpstreamStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let payload: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| WeatherError::MalformedPayload(e.to_string()))?;

        Reading::from_payload(payload)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> WeatherError {
    if err.is_timeout() {
        WeatherError::Timeout(err.to_string())
    } else {
        WeatherError::RequestFailed(err.to_string())
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
