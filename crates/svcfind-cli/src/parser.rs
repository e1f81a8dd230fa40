//! Root CLI parser and global options.
//!
//! Every option can also be supplied through the environment, which is how
//! the server is configured in deployment.

use clap::Parser;
use svcfind_axum::{DEFAULT_MODEL, DEFAULT_PORT};
use svcfind_openrouter::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Customer-service intent classifier backed by OpenRouter.
#[derive(Debug, Parser)]
#[command(name = "svcfind")]
#[command(about = "Classify customer intents into service categories")]
#[command(version)]
pub struct Cli {
    /// OpenRouter API key
    #[arg(long = "api-key", env = "OPENROUTER_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Port for the HTTP server
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    /// OpenRouter API base URL
    #[arg(long = "base-url", env = "OPENROUTER_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Model used for classification and prompt formatting
    #[arg(long, env = "OPENROUTER_MODEL", default_value = DEFAULT_MODEL, global = true)]
    pub model: String,

    /// Timeout for each OpenRouter request, in seconds
    #[arg(long = "timeout-secs", env = "OPENROUTER_TIMEOUT_SECS", default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// Enable debug logging when RUST_LOG is not set
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run; `serve` when none was given.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }

    /// Default log filter used when `RUST_LOG` is unset.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["svcfind", "--port", "9000"]);
        assert_eq!(cli.resolved_command(), Commands::Serve);
        assert_eq!(cli.port, 9000);
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from([
            "svcfind",
            "render",
            "perdi meu cartao",
            "--model",
            "mistralai/mistral-7b-instruct",
            "--verbose",
        ]);
        assert_eq!(
            cli.resolved_command(),
            Commands::Render {
                intent: "perdi meu cartao".to_string()
            }
        );
        assert_eq!(cli.model, "mistralai/mistral-7b-instruct");
        assert_eq!(cli.default_log_filter(), "debug");
    }

    #[test]
    fn test_key_status_command() {
        let cli = Cli::parse_from(["svcfind", "key-status", "--api-key", "sk-test"]);
        assert_eq!(cli.resolved_command(), Commands::KeyStatus);
        assert_eq!(cli.api_key.as_deref(), Some("sk-test"));
    }
}
