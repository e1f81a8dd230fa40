//! Subcommands.

use clap::Subcommand;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// List the service categories, the fallback and prompt statistics
    Services,

    /// Print the prompt that would be sent for an intent
    Render {
        /// Customer intent text
        intent: String,
    },

    /// Show usage and limits of the configured OpenRouter key
    KeyStatus,
}
