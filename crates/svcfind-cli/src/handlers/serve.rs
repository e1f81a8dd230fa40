//! Serve command handler.

use anyhow::Result;

use crate::parser::Cli;

/// Start the HTTP server and block until Ctrl-C.
pub async fn execute(cli: &Cli) -> Result<()> {
    let config = cli.server_config()?;
    tracing::info!(port = config.port, model = %config.model, "Starting svcfind server");
    svcfind_axum::start_server(config).await
}
