//! Public configuration for the OpenRouter client.

use std::time::Duration;

/// Default OpenRouter API base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default bound on a single outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the OpenRouter client.
///
/// # Example
///
/// ```
/// use svcfind_openrouter::OpenRouterConfig;
/// use std::time::Duration;
///
/// let config = OpenRouterConfig::new("sk-or-v1-...")
///     .with_base_url("http://127.0.0.1:8080/api/v1")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct OpenRouterConfig {
    /// Base URL; endpoint paths are appended to it
    pub(crate) base_url: String,
    /// Bearer token
    pub(crate) api_key: String,
    /// Per-request timeout
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl OpenRouterConfig {
    /// Create a configuration with default settings and the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("svcfind-openrouter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the API base URL. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenRouterConfig::new("key");
        assert_eq!(config.base_url(), "https://openrouter.ai/api/v1");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.user_agent.contains("svcfind-openrouter"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = OpenRouterConfig::new("key")
            .with_base_url("http://localhost:9000/api/v1/")
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("test-agent");

        assert_eq!(config.base_url(), "http://localhost:9000/api/v1");
        assert_eq!(
            config.endpoint("/chat/completions"),
            "http://localhost:9000/api/v1/chat/completions"
        );
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", OpenRouterConfig::new("sk-secret"));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
