//! JSON response writer.
//!
//! Every body this server produces goes through [`json_response`]. If the
//! value cannot be encoded the client still gets a JSON error envelope.

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

/// Body written when a response value cannot be encoded.
pub const FALLBACK_ERROR_BODY: &str = r#"{"success":false,"error":"internal server error"}"#;

/// Serialize `value` into an `application/json` response.
pub fn json_response<T: Serialize>(value: &T) -> Response {
    let body = match serde_json::to_vec(value) {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Failed to encode response body");
            FALLBACK_ERROR_BODY.as_bytes().to_vec()
        }
    };

    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
