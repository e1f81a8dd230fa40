//! CLI-specific error types and exit codes.

use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required setting is absent.
    #[error("Configuration error: {0} is required")]
    MissingSetting(&'static str),

    /// A setting is present but unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The OpenRouter API rejected or failed the request.
    #[error("OpenRouter error: {0}")]
    Upstream(String),
}

impl CliError {
    /// Map error to an exit code (sysexits.h where one fits).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSetting(_) | Self::Config(_) => 78, // EX_CONFIG
            Self::Upstream(_) => 69,                          // EX_UNAVAILABLE
        }
    }
}

/// Exit code for an error returned from a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
