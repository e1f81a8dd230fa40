//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the HTTP facade. All concrete implementations are instantiated here.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use svcfind_core::ports::{ClassifierPort, PromptRendererPort};
use svcfind_core::{PromptConfig, PromptManager, ServiceFinder};
use svcfind_openrouter::{DefaultOpenRouterClient, OpenRouterConfig};
use tokio::net::TcpListener;

use crate::routes::create_router;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 18020;

/// Default model used for prompt formatting and classification.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: IpAddr,
    /// Port for the HTTP server.
    pub port: u16,
    /// Model name sent to the provider.
    pub model: String,
    /// Outbound client configuration (base URL, key, timeout).
    pub openrouter: OpenRouterConfig,
    /// Prompt template and fallback overrides.
    pub prompt: PromptConfig,
}

impl ServerConfig {
    /// Create config with defaults and the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            openrouter: OpenRouterConfig::new(api_key),
            prompt: PromptConfig::default(),
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_openrouter(mut self, openrouter: OpenRouterConfig) -> Self {
        self.openrouter = openrouter;
        self
    }

    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds the fully wired [`ServiceFinder`]. Tests build one directly with a
/// substituted classifier.
pub struct AxumContext {
    pub finder: ServiceFinder,
}

impl AxumContext {
    pub const fn new(finder: ServiceFinder) -> Self {
        Self { finder }
    }
}

/// Wire the prompt manager and OpenRouter client into an [`AxumContext`].
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let prompts = PromptManager::with_config(config.prompt.clone());
    let stats = prompts.prompt_stats();

    tracing::info!(
        model = %config.model,
        base_url = %config.openrouter.base_url(),
        timeout_secs = config.openrouter.timeout().as_secs(),
        total_services = stats.total_services,
        fallback_service_id = stats.fallback_service_id,
        system_prompt_length = stats.system_prompt_length,
        "Bootstrapping service finder"
    );

    let client = DefaultOpenRouterClient::new(config.openrouter.clone())
        .context("failed to initialize OpenRouter client")?;

    let classifier: Arc<dyn ClassifierPort> = Arc::new(client);
    let renderer: Arc<dyn PromptRendererPort> = Arc::new(prompts);

    Ok(AxumContext::new(ServiceFinder::new(
        classifier,
        renderer,
        config.model.clone(),
    )))
}

/// Bootstrap, bind and serve until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;
    let addr = config.socket_addr();

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    serve(listener, ctx, shutdown_signal()).await
}

/// Serve the router on a pre-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, ctx: AxumContext, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "svcfind listening");

    axum::serve(listener, create_router(ctx))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("svcfind shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
