use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, error, info_span, warn};
use uuid::Uuid;

use crate::application::error::ErrorReport;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Tags every admin request with a fresh id and logs responses that carry an [`ErrorReport`].
///
/// Handlers run inside an `admin_request` span, so mutation logs emitted by the
/// post service carry the same `request_id` as the failure log and the
/// `x-request-id` response header.
pub async fn request_context(request: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4();

    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let span = info_span!(
        "admin_request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );
    let start = Instant::now();

    let mut response = next.run(request).instrument(span.clone()).await;
    let status = response.status();

    if let Some(report) = response.extensions_mut().remove::<ErrorReport>() {
        let _entered = span.enter();
        let elapsed_ms = start.elapsed().as_millis();
        if status.is_server_error() {
            error!(
                target = "postdesk::http::response",
                status = status.as_u16(),
                elapsed_ms,
                source = report.source,
                chain = ?report.messages,
                "admin request failed",
            );
        } else {
            warn!(
                target = "postdesk::http::response",
                status = status.as_u16(),
                elapsed_ms,
                source = report.source,
                chain = ?report.messages,
                "admin request rejected",
            );
        }
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
