//! Internal error types for OpenRouter operations.
//!
//! These errors are internal to `svcfind-openrouter` and are mapped to
//! `ClassifierError` at the port boundary.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for OpenRouter operations.
pub type OpenRouterResult<T> = Result<T, OpenRouterError>;

/// Errors related to OpenRouter API operations.
#[derive(Debug, Error)]
pub enum OpenRouterError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request body could not be serialized.
    #[error("error marshaling request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Network or HTTP client error.
    #[error("failed to execute request: {0}")]
    Network(#[from] reqwest::Error),

    /// No response within the configured timeout.
    #[error("request timed out after {timeout:?}")]
    Timeout {
        /// Configured timeout
        timeout: Duration,
    },

    /// The API answered with a status other than 200.
    #[error("API request failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// The response envelope was not valid JSON of the expected shape.
    #[error("error unmarshaling response: {source}. body: {body}")]
    Decode {
        /// Decoder error
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// The response envelope had an empty `choices` array.
    #[error("no choices in response")]
    NoChoices,

    /// The first choice's content was not a service JSON object.
    #[error("error unmarshaling data response: {source}. content: {content}")]
    Content {
        /// Decoder error
        source: serde_json::Error,
        /// Raw message content
        content: String,
    },
}
