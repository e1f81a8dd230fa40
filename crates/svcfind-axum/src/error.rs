//! Axum-specific error types and mappings.
//!
//! Errors never change the HTTP status. They are rendered as a
//! `FindServiceResponse` with `success: false` and an `error` message.

use axum::response::{IntoResponse, Response};
use svcfind_core::{FindServiceResponse, FinderError};
use thiserror::Error;

use crate::response::json_response;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed, unreadable or empty inbound payload.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Any failure in the classification pipeline.
    #[error("internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_response(&FindServiceResponse::failure(self.to_string()))
    }
}

impl From<FinderError> for ApiError {
    fn from(err: FinderError) -> Self {
        if err.is_invalid_request() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}
