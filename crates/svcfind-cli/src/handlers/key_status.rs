//! Key status command handler.
//!
//! Queries `GET /key` for the configured API key and prints the result as
//! pretty JSON.

use anyhow::{Context, Result};
use svcfind_openrouter::DefaultOpenRouterClient;

use crate::error::CliError;
use crate::parser::Cli;

/// Execute the key-status command.
pub async fn execute(cli: &Cli) -> Result<()> {
    let client = DefaultOpenRouterClient::new(cli.openrouter_config()?)
        .context("failed to initialize OpenRouter client")?;

    let status = client
        .key_status()
        .await
        .map_err(|e| CliError::Upstream(e.to_string()))?;

    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
