use serde::Serialize;
use serde_json::Value;

use super::{Result, WeatherError};

/// JSON pointer to the temperature inside an upstream payload.
pub const TEMPERATURE_FIELD: &str = "/current/temperature_2m";

/// Query parameters sent to the upstream weather API.
///
/// The service always asks for the same location and field, so the
/// defaults are the only values used in production.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub current: String,
    pub timezone: String,
}

impl Default for WeatherQuery {
    /// Cairo, current 2m temperature, local time.
    fn default() -> Self {
        Self {
            latitude: 30.0626,
            longitude: 31.2497,
            current: "temperature_2m".to_string(),
            timezone: "Africa/Cairo".to_string(),
        }
    }
}

/// A temperature reading together with the raw payload it came from.
///
/// The payload is kept verbatim so it can be written to the cache exactly as
/// the upstream returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub temperature: f64,
    pub payload: Value,
}

impl Reading {
    /// Builds a reading from an upstream payload.
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::MalformedPayload` if the payload has no numeric
    /// `current.temperature_2m`.
    pub fn from_payload(payload: Value) -> Result<Self> {
        let temperature = temperature_from_payload(&payload)?;
        Ok(Self {
            temperature,
            payload,
        })
    }
}

/// Extracts `current.temperature_2m` from an upstream payload.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use weathercache_core::weather::temperature_from_payload;
///
/// let payload = json!({ "current": { "temperature_2m": 21.5 } });
/// assert_eq!(temperature_from_payload(&payload), Ok(21.5));
/// ```
pub fn temperature_from_payload(payload: &Value) -> Result<f64> {
    let field = payload.pointer(TEMPERATURE_FIELD).ok_or_else(|| {
        WeatherError::MalformedPayload("missing current.temperature_2m".to_string())
    })?;

    field.as_f64().ok_or_else(|| {
        WeatherError::MalformedPayload(format!(
            "current.temperature_2m is not a number: {}",
            field
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn open_meteo_payload(temperature: Value) -> Value {
        json!({
            "latitude": 30.0625,
            "longitude": 31.25,
            "timezone": "Africa/Cairo",
            "current_units": { "time": "iso8601", "temperature_2m": "°C" },
            "current": { "time": "2024-06-15T12:00", "interval": 900, "temperature_2m": temperature }
        })
    }

    #[test]
    fn test_default_query_targets_cairo() {
        let query = WeatherQuery::default();
        assert_eq!(query.latitude, 30.0626);
        assert_eq!(query.longitude, 31.2497);
        assert_eq!(query.current, "temperature_2m");
        assert_eq!(query.timezone, "Africa/Cairo");
    }

    #[test]
    fn test_temperature_from_full_payload() {
        let payload = open_meteo_payload(json!(21.5));
        assert_eq!(temperature_from_payload(&payload), Ok(21.5));
    }

    #[test]
    fn test_temperature_accepts_integer_values() {
        let payload = open_meteo_payload(json!(19));
        assert_eq!(temperature_from_payload(&payload), Ok(19.0));
    }

    #[test]
    fn test_temperature_missing_current() {
        let payload = json!({ "error": true, "reason": "Invalid timezone" });
        let err = temperature_from_payload(&payload).unwrap_err();
        assert!(matches!(err, WeatherError::MalformedPayload(_)));
    }

    #[test]
    fn test_temperature_not_a_number() {
        let payload = open_meteo_payload(json!("hot"));
        let err = temperature_from_payload(&payload).unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn test_reading_keeps_payload_verbatim() {
        let payload = open_meteo_payload(json!(-3.25));
        let reading = Reading::from_payload(payload.clone()).unwrap();

        assert_eq!(reading.temperature, -3.25);
        assert_eq!(reading.payload, payload);
    }

    #[test]
    fn test_reading_rejects_null_payload() {
        assert!(Reading::from_payload(Value::Null).is_err());
    }
}
