//! Render command handler.

use anyhow::Result;
use svcfind_core::PromptManager;

use crate::parser::Cli;

/// Print the prompt the server would send for `intent`.
pub fn execute(cli: &Cli, intent: &str) -> Result<()> {
    println!("{}", render(&PromptManager::new(), &cli.model, intent)?);
    Ok(())
}

/// Model-specific prompt for `intent`.
pub fn render(prompts: &PromptManager, model: &str, intent: &str) -> Result<String> {
    Ok(prompts.render_model_specific_prompt(intent, model)?)
}
