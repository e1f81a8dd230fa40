//! CLI entry point.

use clap::Parser;

use svcfind_cli::error::exit_code_for;
use svcfind_cli::{Cli, Commands, handlers};
use tracing_subscriber::EnvFilter;

async fn run(cli: &Cli) -> anyhow::Result<()> {
    match cli.resolved_command() {
        Commands::Serve => handlers::serve::execute(cli).await,
        Commands::Services => handlers::services::execute(),
        Commands::Render { intent } => handlers::render::execute(cli, &intent),
        Commands::KeyStatus => handlers::key_status::execute(cli).await,
    }
}

#[tokio::main]
async fn main() {
    // Load .env before parsing so its values act as environment defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(&cli).await {
        tracing::error!(error = %e, "svcfind failed");
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_for(&e));
    }
}
