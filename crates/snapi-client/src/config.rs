//! Client configuration

use std::collections::HashMap;
use std::time::Duration;

/// Configuration for [`crate::SnapiClient`].
///
/// # Examples
/// ```
/// use snapi_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://api.example.test")
///     .with_timeout(Duration::from_secs(10))
///     .with_accept_language("de");
/// assert_eq!(config.service_url, "https://api.example.test");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base service URL.
    pub service_url: String,
    /// Default total request timeout.
    pub timeout: Duration,
    /// Total timeout for article-feed requests, which the API serves
    /// noticeably slower than single-article lookups.
    pub feed_timeout: Duration,
    /// User agent string sent with every request.
    pub user_agent: String,
    /// Language sent in the `Accept-Language` header.
    pub accept_language: String,
    /// Custom headers included in all requests.
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: "https://api.spaceflightnewsapi.net".to_string(),
            timeout: Duration::from_secs(30),
            feed_timeout: Duration::from_secs(20),
            user_agent: format!("helios-news/{}", env!("CARGO_PKG_VERSION")),
            accept_language: "en".to_string(),
            default_headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointed at a service URL.
    pub fn new(service_url: impl Into<String>) -> Self {
        Self { service_url: service_url.into(), ..Default::default() }
    }

    /// Set the default request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the article-feed request timeout.
    pub fn with_feed_timeout(mut self, timeout: Duration) -> Self {
        self.feed_timeout = timeout;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the `Accept-Language` value.
    pub fn with_accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = language.into();
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// The service URL without a trailing slash.
    pub(crate) fn base_url(&self) -> &str {
        self.service_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.service_url, "https://api.spaceflightnewsapi.net");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.feed_timeout, Duration::from_secs(20));
        assert_eq!(config.accept_language, "en");
        assert!(config.user_agent.starts_with("helios-news/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://snapi.test")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("CustomAgent/1.0")
            .with_accept_language("es")
            .with_header("X-Custom", "value");

        assert_eq!(config.service_url, "https://snapi.test");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "CustomAgent/1.0");
        assert_eq!(config.accept_language, "es");
        assert_eq!(config.default_headers.get("X-Custom"), Some(&"value".to_string()));
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = ClientConfig::new("https://snapi.test/");
        assert_eq!(config.base_url(), "https://snapi.test");
    }
}
