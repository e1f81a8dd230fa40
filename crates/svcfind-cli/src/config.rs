//! Conversion of parsed arguments into library configuration.

use std::time::Duration;

use svcfind_axum::ServerConfig;
use svcfind_openrouter::OpenRouterConfig;

use crate::error::CliError;
use crate::parser::Cli;

const API_KEY_VAR: &str = "OPENROUTER_API_KEY";

impl Cli {
    /// API key, rejecting an absent or blank value.
    pub fn require_api_key(&self) -> Result<&str, CliError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(CliError::MissingSetting(API_KEY_VAR))
    }

    /// Outbound client configuration.
    pub fn openrouter_config(&self) -> Result<OpenRouterConfig, CliError> {
        if self.timeout_secs == 0 {
            return Err(CliError::Config(
                "OPENROUTER_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(OpenRouterConfig::new(self.require_api_key()?)
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }

    /// Full server configuration.
    pub fn server_config(&self) -> Result<ServerConfig, CliError> {
        let openrouter = self.openrouter_config()?;
        Ok(ServerConfig::new(self.require_api_key()?)
            .with_port(self.port)
            .with_model(self.model.clone())
            .with_openrouter(openrouter))
    }
}
