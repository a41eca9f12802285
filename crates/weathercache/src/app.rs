use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{handlers::pages::index, state::AppState};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
