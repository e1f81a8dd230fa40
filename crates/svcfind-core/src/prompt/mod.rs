//! Prompt management: renders the classification prompt sent to the model.
//!
//! The [`PromptManager`] owns the system prompt and the service registry.
//! Both are built once and only read afterwards.

mod template;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{ServiceDefinition, ServiceRegistry};

pub use template::DEFAULT_SYSTEM_PROMPT;

/// Errors from prompt rendering and response-shape checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// The intent was empty or whitespace only.
    #[error("user intent cannot be empty")]
    EmptyIntent,

    /// A model response lacked one of the required JSON keys.
    #[error("response missing {0} field")]
    MissingField(&'static str),
}

/// Trailer format appended after the system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptFormat {
    /// `<s>[INST] ... [/INST]` wrapping used by Mistral instruct models.
    MistralInstruct,
    /// Plain trailer for GPT and every other model.
    Standard,
}

impl PromptFormat {
    /// Pick the format for a model name such as `mistralai/mistral-7b-instruct`.
    pub fn for_model(model_name: &str) -> Self {
        if model_name.contains("mistral") {
            Self::MistralInstruct
        } else {
            Self::Standard
        }
    }
}

/// Custom configuration for a [`PromptManager`].
#[derive(Debug, Clone, Default)]
pub struct PromptConfig {
    /// Replacement system prompt. Empty means the default prompt.
    pub system_prompt_template: String,
    /// Fallback service id. Ids not in the registry fall back to 15.
    pub fallback_service_id: i32,
}

/// Summary of the active prompt configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptStats {
    pub system_prompt_length: usize,
    pub total_services: usize,
    pub fallback_service_id: i32,
    pub fallback_service_name: String,
}

/// Owns the system prompt and service registry; renders final prompts.
#[derive(Debug, Clone)]
pub struct PromptManager {
    system_prompt: String,
    registry: ServiceRegistry,
    fallback: ServiceDefinition,
}

impl Default for PromptManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptManager {
    /// Create a manager with the default prompt and registry.
    pub fn new() -> Self {
        let registry = ServiceRegistry::new();
        let fallback = registry.fallback().clone();
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            registry,
            fallback,
        }
    }

    /// Create a manager with a custom template and fallback.
    pub fn with_config(config: PromptConfig) -> Self {
        let registry = ServiceRegistry::new();

        let system_prompt = if config.system_prompt_template.is_empty() {
            DEFAULT_SYSTEM_PROMPT.to_string()
        } else {
            config.system_prompt_template
        };

        let fallback = match registry.get(config.fallback_service_id) {
            Some(service) => service.clone(),
            None => {
                tracing::debug!(
                    fallback_service_id = config.fallback_service_id,
                    "Unknown fallback service id, using registry default"
                );
                registry.fallback().clone()
            }
        };

        Self {
            system_prompt,
            registry,
            fallback,
        }
    }

    /// Render the generic classification prompt.
    pub fn render_classification_prompt(&self, intent: &str) -> Result<String, PromptError> {
        let intent = non_empty_intent(intent)?;
        Ok(format!(
            "{}\n\nUser Intent: {intent}\n\nPlease classify this intent and respond with the appropriate service information in JSON format.",
            self.system_prompt
        ))
    }

    /// Render the prompt in the format preferred by `model_name`.
    ///
    /// Only the framing changes between formats; the system prompt and the
    /// trimmed intent are always included verbatim.
    pub fn render_model_specific_prompt(
        &self,
        intent: &str,
        model_name: &str,
    ) -> Result<String, PromptError> {
        let intent = non_empty_intent(intent)?;
        let system = &self.system_prompt;

        Ok(match PromptFormat::for_model(model_name) {
            PromptFormat::MistralInstruct => {
                format!("<s>[INST] {system} [/INST]\n\nUser Intent: {intent}")
            }
            PromptFormat::Standard => format!(
                "{system}\n\nUser Intent: {intent}\n\nClassify this intent and provide your reasoning and the final JSON."
            ),
        })
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// All service definitions, ordered by id.
    pub fn service_definitions(&self) -> Vec<ServiceDefinition> {
        self.registry.all().cloned().collect()
    }

    pub fn fallback_service(&self) -> &ServiceDefinition {
        &self.fallback
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Structural check on a raw model reply.
    ///
    /// Only looks for the quoted key names; the text does not need to be
    /// well-formed JSON.
    pub fn validate_response_shape(&self, response: &str) -> Result<(), PromptError> {
        if !response.contains("\"service_id\"") {
            return Err(PromptError::MissingField("service_id"));
        }
        if !response.contains("\"service_name\"") {
            return Err(PromptError::MissingField("service_name"));
        }
        Ok(())
    }

    pub fn prompt_stats(&self) -> PromptStats {
        PromptStats {
            system_prompt_length: self.system_prompt.len(),
            total_services: self.registry.len(),
            fallback_service_id: self.fallback.id,
            fallback_service_name: self.fallback.name.clone(),
        }
    }
}

fn non_empty_intent(intent: &str) -> Result<&str, PromptError> {
    let trimmed = intent.trim();
    if trimmed.is_empty() {
        return Err(PromptError::EmptyIntent);
    }
    Ok(trimmed)
}
