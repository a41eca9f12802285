//! Pure functions for mapping upstream weather errors to HTTP status codes.

use super::WeatherError;

/// Maps a [`WeatherError`] to the HTTP status code returned to our callers.
///
/// Every variant is the upstream's fault, so none of them is a 500:
///
/// - `RequestFailed` -> 502 (Bad Gateway)
/// - `Timeout` -> 504 (Gateway Timeout)
/// - `UpstreamStatus` -> 502 (Bad Gateway)
/// - `MalformedPayload` -> 502 (Bad Gateway)
///
/// # Examples
///
/// ```
/// use weathercache_core::weather::{weather_error_to_status_code, WeatherError};
///
/// let error = WeatherError::MalformedPayload("not json".to_string());
/// assert_eq!(weather_error_to_status_code(&error), 502);
/// ```
pub fn weather_error_to_status_code(error: &WeatherError) -> u16 {
    match error {
        WeatherError::RequestFailed(_) => 502,
        WeatherError::Timeout(_) => 504,
        WeatherError::UpstreamStatus { .. } => 502,
        WeatherError::MalformedPayload(_) => 502,
    }
}
