//! Client configuration options.

use std::time::Duration;

/// Configuration for the Airwallex client.
///
/// # Example
///
/// ```
/// use airwallex_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout applied by the underlying HTTP client.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Base URL override; when set it replaces the environment's base URL.
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("airwallex-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            base_url: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the base URL. Trailing slashes are trimmed so paths can be
    /// appended verbatim.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        self.base_url = Some(base);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.base_url.is_none());
        assert!(config.user_agent.starts_with("airwallex-rs/"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::new().with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
    }
}
