//! Service finder: decode → render → classify → coherence-check.
//!
//! `ServiceFinder` composes a classification capability with a prompt
//! rendering capability. Adapters call [`ServiceFinder::ask_question`] with
//! the raw request body.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{FindServiceRequest, FindServiceResponse};
use crate::ports::{ClassifierError, ClassifierPort, PromptRendererPort};
use crate::prompt::PromptError;
use crate::services::coherence::analyze_coherence;

/// Errors from the find-service pipeline.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The request body was not a `{"intent": ...}` JSON object.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The prompt could not be rendered (e.g. empty intent).
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The outbound classification call failed.
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

impl FinderError {
    /// Whether the caller sent a malformed or empty payload.
    pub const fn is_invalid_request(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Prompt(PromptError::EmptyIntent))
    }
}

/// Composition of a classifier and a prompt renderer.
#[derive(Clone)]
pub struct ServiceFinder {
    classifier: Arc<dyn ClassifierPort>,
    prompts: Arc<dyn PromptRendererPort>,
    model: String,
}

impl ServiceFinder {
    pub fn new(
        classifier: Arc<dyn ClassifierPort>,
        prompts: Arc<dyn PromptRendererPort>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            classifier,
            prompts,
            model: model.into(),
        }
    }

    /// Model name used for prompt formatting and the outbound call.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Classify a raw `{"intent": "..."}` payload.
    ///
    /// Coherence findings do not fail the call; they are logged and returned
    /// in the response's `diagnostics`.
    pub async fn ask_question(&self, raw: &[u8]) -> Result<FindServiceResponse, FinderError> {
        let request: FindServiceRequest = serde_json::from_slice(raw)?;
        let prompt = self.prompts.render(&request.intent, &self.model)?;

        let started = Instant::now();
        let data = self.classifier.classify(&self.model, &prompt).await?;
        debug!(
            model = %self.model,
            service_id = data.service_id,
            service_name = %data.service_name,
            elapsed_ms = started.elapsed().as_millis(),
            "Intent classified"
        );

        let diagnostics = analyze_coherence(Some(&request), Some(&data));
        for diagnostic in &diagnostics {
            warn!(diagnostic = %diagnostic, "Coherence issue detected");
        }

        Ok(FindServiceResponse::classified(data, diagnostics))
    }
}
