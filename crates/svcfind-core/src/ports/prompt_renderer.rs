//! Prompt rendering port.

use crate::prompt::{PromptError, PromptManager};

/// Capability to turn an intent into the final prompt for a given model.
///
/// Implementations must be immutable after construction; they are shared
/// across concurrent requests.
pub trait PromptRendererPort: Send + Sync {
    /// Render the prompt for `model_name`, failing on an empty intent.
    fn render(&self, intent: &str, model_name: &str) -> Result<String, PromptError>;
}

impl PromptRendererPort for PromptManager {
    fn render(&self, intent: &str, model_name: &str) -> Result<String, PromptError> {
        self.render_model_specific_prompt(intent, model_name)
    }
}
