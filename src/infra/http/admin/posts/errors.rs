use axum::http::StatusCode;

use crate::{
    application::{admin::posts::AdminPostError, error::HttpError},
    infra::http::repo_error_to_http,
};

pub(super) fn admin_post_error(source: &'static str, err: AdminPostError) -> HttpError {
    match err {
        AdminPostError::NotFound { slug } => HttpError::new(
            source,
            StatusCode::NOT_FOUND,
            "Post not found",
            format!("no post with slug `{slug}`"),
        ),
        AdminPostError::Repo(repo) => repo_error_to_http(source, repo),
    }
}
