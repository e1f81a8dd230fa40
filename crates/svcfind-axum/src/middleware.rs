//! Forced-200 response layer.
//!
//! The calling system requires every HTTP response to carry status 200, with
//! all error information in the body. This layer wraps the whole router, so
//! it also covers framework-generated responses (unknown routes, wrong
//! methods, extractor rejections).

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

/// Rewrite any non-200 status produced downstream to 200 OK.
///
/// Headers and body are left untouched.
pub async fn force_status_ok(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let mut response = next.run(req).await;

    let status = response.status();
    if status != StatusCode::OK {
        debug!(
            method = %method,
            path = %path,
            original_status = status.as_u16(),
            "Forcing response status to 200"
        );
        *response.status_mut() = StatusCode::OK;
    }

    response
}
