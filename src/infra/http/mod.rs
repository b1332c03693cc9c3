mod admin;
mod middleware;

pub use admin::{AdminSettings, AdminState, build_admin_router};
pub use middleware::REQUEST_ID_HEADER;

use crate::application::error::HttpError;
use crate::application::repos::RepoError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

fn db_health_response(result: Result<(), RepoError>) -> Response {
    let Err(err) = result else {
        return StatusCode::NO_CONTENT.into_response();
    };
    HttpError::from_error(
        "infra::http::db_health",
        StatusCode::SERVICE_UNAVAILABLE,
        "Database unavailable",
        &err,
    )
    .into_response()
}

/// Status and browser-facing text for a store failure; the detail goes to the report.
pub fn repo_error_to_http(source: &'static str, err: RepoError) -> HttpError {
    let (status, body) = match &err {
        RepoError::Duplicate { .. } => (StatusCode::CONFLICT, "Post already exists"),
        RepoError::NotFound => (StatusCode::NOT_FOUND, "Post not found"),
        RepoError::Timeout => (StatusCode::SERVICE_UNAVAILABLE, "Database timeout"),
        RepoError::Persistence(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
    };
    HttpError::from_error(source, status, body, &err)
}
