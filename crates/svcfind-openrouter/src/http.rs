//! HTTP backend abstraction for the OpenRouter API.
//!
//! The client is generic over [`HttpBackend`] so its decoding logic can be
//! exercised without a network. The production implementation uses reqwest
//! with bearer authentication and a per-request timeout. No retries.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::OpenRouterConfig;
use crate::error::{OpenRouterError, OpenRouterResult};

/// Status and body of an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for HTTP backends that talk to the provider.
///
/// This is an implementation detail - external code should use
/// `DefaultOpenRouterClient` through the `ClassifierPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST a JSON body and return the raw response, whatever its status.
    async fn post_json(&self, url: &str, body: Vec<u8>) -> OpenRouterResult<RawResponse>;

    /// GET a URL and return the raw response, whatever its status.
    async fn get(&self, url: &str) -> OpenRouterResult<RawResponse>;
}

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_header: String,
    timeout: Duration,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &OpenRouterConfig) -> OpenRouterResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(OpenRouterError::ClientBuild)?;

        Ok(Self {
            client,
            auth_header: format!("Bearer {}", config.api_key),
            timeout: config.timeout,
        })
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> OpenRouterResult<RawResponse> {
        let response = request
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        Ok(RawResponse { status, body })
    }

    fn map_send_error(&self, err: reqwest::Error) -> OpenRouterError {
        if err.is_timeout() {
            OpenRouterError::Timeout {
                timeout: self.timeout,
            }
        } else {
            OpenRouterError::Network(err)
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> OpenRouterResult<RawResponse> {
        let request = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        self.execute(request).await
    }

    async fn get(&self, url: &str) -> OpenRouterResult<RawResponse> {
        self.execute(self.client.get(url)).await
    }
}
