//! Health handler.

use axum::response::Response;
use svcfind_core::HealthResponse;

use crate::response::json_response;

/// `GET /api/health`. Does not touch the classification client.
pub async fn check() -> Response {
    json_response(&HealthResponse::ok())
}
