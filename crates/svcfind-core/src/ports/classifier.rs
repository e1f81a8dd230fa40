//! Classification port: the outbound call to the language model.
//!
//! This port abstracts the chat-completion provider. The core hands it a
//! model name and a fully rendered prompt and gets back the model's
//! `(service_id, service_name)` answer.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ServiceData;

/// Errors from classification port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    /// The outbound request could not be built.
    #[error("failed to create request: {message}")]
    Request {
        /// What went wrong while building the request
        message: String,
    },

    /// The provider could not be reached.
    #[error("failed to execute request: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The provider did not answer within the configured timeout.
    #[error("request timed out after {timeout:?}")]
    Timeout {
        /// Timeout that elapsed
        timeout: Duration,
    },

    /// The provider answered with a non-200 status.
    #[error("API request failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for diagnosis
        body: String,
    },

    /// The provider envelope could not be decoded.
    #[error("error unmarshaling response: {message}. body: {body}")]
    InvalidResponse {
        /// Decoder message
        message: String,
        /// Raw response body
        body: String,
    },

    /// The provider envelope held no choices.
    #[error("no choices in response")]
    NoChoices,

    /// The first choice's content was not a `{service_id, service_name}` object.
    #[error("error unmarshaling data response: {message}. content: {content}")]
    InvalidContent {
        /// Decoder message
        message: String,
        /// Raw message content returned by the model
        content: String,
    },
}

/// Result type alias for classification port operations.
pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Port for classifying a rendered prompt with an external model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassifierPort: Send + Sync {
    /// Send `prompt` as a single user message to `model` and decode its answer.
    async fn classify(&self, model: &str, prompt: &str) -> ClassifierResult<ServiceData>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_body() {
        let err = ClassifierError::Status {
            status: 401,
            body: r#"{"error":"No auth credentials found"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("No auth credentials found"));
    }

    #[test]
    fn test_invalid_content_carries_raw_content() {
        let err = ClassifierError::InvalidContent {
            message: "expected value at line 1 column 1".to_string(),
            content: "<reasoning>...</reasoning>".to_string(),
        };
        assert!(err.to_string().contains("<reasoning>"));
    }
}
