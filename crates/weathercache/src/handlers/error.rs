use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use weathercache_core::weather::{weather_error_to_status_code, WeatherError};

/// Application error type that wraps `anyhow::Error`.
///
/// Upstream weather failures keep their gateway status (502/504). Anything
/// else is a 500. The response body stays generic; the full error only goes
/// to the log.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) =
            if let Some(weather_error) = self.0.downcast_ref::<WeatherError>() {
                let code = weather_error_to_status_code(weather_error);
                (
                    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
                    "Weather service unavailable, try again later",
                )
            } else {
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
            };

        tracing::error!(error = %self.0, status = %status_code, "Request failed");

        (status_code, message).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
