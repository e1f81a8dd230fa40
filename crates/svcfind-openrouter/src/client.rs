//! OpenRouter client for chat completions and key status.

use std::time::Instant;

use async_trait::async_trait;
use svcfind_core::ports::{ClassifierError, ClassifierPort, ClassifierResult};
use svcfind_core::ServiceData;
use tracing::{debug, error};

use crate::config::OpenRouterConfig;
use crate::error::{OpenRouterError, OpenRouterResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, KeyStatus, KeyStatusEnvelope,
};

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const KEY_PATH: &str = "/key";

/// Default OpenRouter client using the reqwest HTTP backend.
pub type DefaultOpenRouterClient = OpenRouterClient<ReqwestBackend>;

/// Client for the OpenRouter API.
///
/// Generic over the HTTP backend so tests can substitute a fake one. Use
/// [`DefaultOpenRouterClient::new`] in production code.
pub struct OpenRouterClient<B: HttpBackend> {
    backend: B,
    config: OpenRouterConfig,
}

impl DefaultOpenRouterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OpenRouterConfig) -> OpenRouterResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> OpenRouterClient<B> {
    /// Create a client with a custom backend.
    pub const fn with_backend(config: OpenRouterConfig, backend: B) -> Self {
        Self { backend, config }
    }

    pub const fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    /// Send a chat completion and decode the model's answer as [`ServiceData`].
    ///
    /// The first choice's content must be a bare JSON object. Reasoning text
    /// or markdown fences around it are not stripped and make decoding fail.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> OpenRouterResult<ServiceData> {
        let url = self.config.endpoint(CHAT_COMPLETIONS_PATH);
        let body = serde_json::to_vec(request).map_err(OpenRouterError::Serialize)?;

        debug!(model = %request.model, url = %url, "Sending chat completion");
        let started = Instant::now();
        let response = self.backend.post_json(&url, body).await?;
        debug!(
            status = response.status,
            elapsed_ms = started.elapsed().as_millis(),
            "Chat completion answered"
        );

        if response.status != 200 {
            return Err(OpenRouterError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let envelope: ChatCompletionResponse = serde_json::from_str(&response.body)
            .map_err(|source| OpenRouterError::Decode {
                source,
                body: response.body.clone(),
            })?;

        let content = envelope
            .choices
            .into_iter()
            .next()
            .ok_or(OpenRouterError::NoChoices)?
            .message
            .content
            .unwrap_or_default();

        serde_json::from_str(&content).map_err(|source| OpenRouterError::Content { source, content })
    }

    /// Fetch usage and limits of the configured key (`GET /key`).
    pub async fn key_status(&self) -> OpenRouterResult<KeyStatus> {
        let url = self.config.endpoint(KEY_PATH);
        let response = self.backend.get(&url).await?;

        if response.status != 200 {
            return Err(OpenRouterError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let envelope: KeyStatusEnvelope =
            serde_json::from_str(&response.body).map_err(|source| OpenRouterError::Decode {
                source,
                body: response.body.clone(),
            })?;
        Ok(envelope.data)
    }
}

/// Convert internal `OpenRouterError` to core `ClassifierError`.
fn map_error(err: OpenRouterError) -> ClassifierError {
    match err {
        OpenRouterError::ClientBuild(e) => ClassifierError::Request {
            message: e.to_string(),
        },
        OpenRouterError::Serialize(e) => ClassifierError::Request {
            message: format!("error marshaling request: {e}"),
        },
        OpenRouterError::Network(e) => ClassifierError::Network {
            message: e.to_string(),
        },
        OpenRouterError::Timeout { timeout } => ClassifierError::Timeout { timeout },
        OpenRouterError::Status { status, body } => ClassifierError::Status { status, body },
        OpenRouterError::Decode { source, body } => ClassifierError::InvalidResponse {
            message: source.to_string(),
            body,
        },
        OpenRouterError::NoChoices => ClassifierError::NoChoices,
        OpenRouterError::Content { source, content } => ClassifierError::InvalidContent {
            message: source.to_string(),
            content,
        },
    }
}

#[async_trait]
impl<B: HttpBackend> ClassifierPort for OpenRouterClient<B> {
    async fn classify(&self, model: &str, prompt: &str) -> ClassifierResult<ServiceData> {
        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::user(prompt)],
        };

        self.chat_completion(&request).await.map_err(|e| {
            error!(model = %model, error = %e, "OpenRouter classification failed");
            map_error(e)
        })
    }
}
