use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{handlers::AppError, state::AppState};

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Index page showing which server answered and the current temperature.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    server_number: String,
    temperature: f64,
}

/// Handler for the index page (GET /).
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reading = state.weather.fetch().await?;

    Ok(HtmlTemplate(IndexTemplate {
        server_number: state.server_number.to_string(),
        temperature: reading.temperature,
    }))
}
