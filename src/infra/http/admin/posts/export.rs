use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{
    application::{error::HttpError, export::CSV_CONTENT_TYPE},
    infra::http::admin::AdminState,
};

use super::errors::admin_post_error;

const SOURCE: &str = "infra::http::admin_post_export";

/// Serve one post as CSV. The trailing path segment only names the download.
pub(crate) async fn admin_post_export(
    State(state): State<AdminState>,
    Path((slug, filename)): Path<(String, String)>,
) -> Response {
    if !filename.ends_with(".csv") {
        return HttpError::new(
            SOURCE,
            StatusCode::NOT_FOUND,
            "Not found",
            format!("`{filename}` is not a csv download"),
        )
        .into_response();
    }

    let csv = match state
        .posts
        .export_csv(&slug, state.settings.csv_quoting)
        .await
    {
        Ok(csv) => csv,
        Err(err) => return admin_post_error(SOURCE, err).into_response(),
    };

    debug!(
        target = "postdesk::admin::export",
        slug = %slug,
        filename = %filename,
        quoting = %state.settings.csv_quoting,
        "post exported"
    );

    ([(header::CONTENT_TYPE, CSV_CONTENT_TYPE)], csv).into_response()
}
