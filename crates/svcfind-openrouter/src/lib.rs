//! # svcfind-openrouter
//!
//! OpenRouter chat-completion adapter. [`DefaultOpenRouterClient`] implements
//! the core `ClassifierPort`: it sends the rendered prompt as a single user
//! message and decodes the model's `{service_id, service_name}` reply.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultOpenRouterClient, OpenRouterClient};

// Configuration
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenRouterConfig};

// Errors
pub use error::{OpenRouterError, OpenRouterResult};

// HTTP backend seam
pub use http::{HttpBackend, RawResponse, ReqwestBackend};

// Wire types
pub use models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ChoiceMessage, KeyStatus,
};
