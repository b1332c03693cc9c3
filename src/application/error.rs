//! Error types shared between the admin service, the HTTP layer and the binary.

use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{application::admin::posts::AdminPostError, infra::error::InfraError};

/// Diagnostics for a failed response, stored as a response extension so the
/// logging middleware can report them after the handler has returned.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub messages: Vec<String>,
}

impl ErrorReport {
    /// Walks `error` and its `source()` chain, outermost first.
    pub fn from_error(source: &'static str, error: &dyn StdError) -> Self {
        let messages = std::iter::successors(Some(error), |&err| err.source())
            .map(ToString::to_string)
            .collect();
        Self { source, messages }
    }

    pub fn from_message(source: &'static str, message: impl Into<String>) -> Self {
        Self {
            source,
            messages: vec![message.into()],
        }
    }

    pub fn attach(self, response: &mut Response) {
        response.extensions_mut().insert(self);
    }
}

/// A failed request: the status, a short plain-text body for the browser and
/// the report kept for the logs.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: &'static str,
    report: ErrorReport,
}

impl HttpError {
    pub fn new(
        source: &'static str,
        status: StatusCode,
        body: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            status,
            body,
            report: ErrorReport::from_message(source, detail),
        }
    }

    pub fn from_error(
        source: &'static str,
        status: StatusCode,
        body: &'static str,
        error: &dyn StdError,
    ) -> Self {
        Self {
            status,
            body,
            report: ErrorReport::from_error(source, error),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        self.report.attach(&mut response);
        response
    }
}

/// Failures that end a `postdesk` command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("no post with slug `{slug}`")]
    PostNotFound { slug: String },
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

impl From<AdminPostError> for AppError {
    fn from(err: AdminPostError) -> Self {
        match err {
            AdminPostError::NotFound { slug } => Self::PostNotFound { slug },
            AdminPostError::Repo(repo) => Self::Unexpected(format!("post store failed: {repo}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::repos::RepoError;

    #[test]
    fn report_lists_outer_message_first() {
        let error = InfraError::from(std::io::Error::other("disk gone"));
        let report = ErrorReport::from_error("test", &error);

        assert_eq!(report.messages, ["io error: disk gone", "disk gone"]);
    }

    #[test]
    fn http_error_carries_report_extension() {
        let response = HttpError::new(
            "test",
            StatusCode::NOT_FOUND,
            "Post not found",
            "no post with slug `ghost`",
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let report = response
            .extensions()
            .get::<ErrorReport>()
            .expect("report attached");
        assert_eq!(report.messages, ["no post with slug `ghost`"]);
    }

    #[test]
    fn missing_post_keeps_its_slug() {
        let err = AppError::from(AdminPostError::not_found("ghost"));

        assert!(matches!(&err, AppError::PostNotFound { slug } if slug == "ghost"));
        assert_eq!(err.to_string(), "no post with slug `ghost`");
    }

    #[test]
    fn store_failures_are_unexpected() {
        let err = AppError::from(AdminPostError::Repo(RepoError::Timeout));
        assert_eq!(err.to_string(), "post store failed: database timeout");
    }
}
