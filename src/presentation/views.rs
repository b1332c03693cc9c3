use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::application::error::HttpError;

/// Renders an admin page with `status`, or a 500 carrying the askama error chain.
pub fn render_page<T: Template>(template: T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => HttpError::from_error(
            "presentation::views::render_page",
            StatusCode::INTERNAL_SERVER_ERROR,
            "Template rendering failed",
            &err,
        )
        .into_response(),
    }
}
