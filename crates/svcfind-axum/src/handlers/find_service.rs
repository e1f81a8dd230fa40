//! Find-service handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::response::json_response;
use crate::state::AppState;

/// `POST /api/find-service`.
///
/// The whole body is handed to the finder as the encoded intent payload.
pub async fn find_service(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Failed to read request body");
            return ApiError::InvalidRequest(rejection.body_text()).into_response();
        }
    };

    debug!(bytes = body.len(), "POST /api/find-service");

    match state.finder.ask_question(&body).await {
        Ok(response) => json_response(&response),
        Err(e) => {
            let err = ApiError::from(e);
            warn!(error = %err, "Find-service request failed");
            err.into_response()
        }
    }
}
