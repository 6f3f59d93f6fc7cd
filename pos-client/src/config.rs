//! Client configuration

use std::time::Duration;

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Kitchen board refresh period
pub const DEFAULT_KITCHEN_POLL_SECS: u64 = 5;

/// Client configuration for connecting to the POS backend
///
/// # Environment variables
///
/// | variable                | default                      |
/// |-------------------------|------------------------------|
/// | `POS_API_URL`           | `http://localhost:3000/api`  |
/// | `POS_TIMEOUT_SECS`      | `30`                         |
/// | `POS_KITCHEN_POLL_SECS` | `5`                          |
/// | `POS_TOKEN`             | unset                        |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000/api")
    pub base_url: String,

    /// Bearer token for a session opened elsewhere
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Kitchen board polling interval in seconds
    pub kitchen_poll_secs: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            kitchen_poll_secs: DEFAULT_KITCHEN_POLL_SECS,
        }
    }

    /// Load configuration from the environment
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(var("POS_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()));
        if let Some(timeout) = var("POS_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            config.timeout = timeout;
        }
        if let Some(secs) = var("POS_KITCHEN_POLL_SECS").and_then(|v| v.trim().parse().ok()) {
            config.kitchen_poll_secs = secs;
        }
        config.token = var("POS_TOKEN").filter(|t| !t.is_empty());
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the kitchen polling interval
    pub fn with_kitchen_poll_secs(mut self, seconds: u64) -> Self {
        self.kitchen_poll_secs = seconds;
        self
    }

    /// Kitchen polling interval; never shorter than one second
    pub fn kitchen_poll_interval(&self) -> Duration {
        Duration::from_secs(self.kitchen_poll_secs.max(1))
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_env_defaults() {
        let config = from_map(&[]);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.kitchen_poll_secs, DEFAULT_KITCHEN_POLL_SECS);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = from_map(&[
            ("POS_API_URL", "http://caja.local:8080/api"),
            ("POS_TIMEOUT_SECS", "10"),
            ("POS_KITCHEN_POLL_SECS", " 3 "),
            ("POS_TOKEN", "tok"),
        ]);
        assert_eq!(config.base_url, "http://caja.local:8080/api");
        assert_eq!(config.timeout, 10);
        assert_eq!(config.kitchen_poll_interval(), Duration::from_secs(3));
        assert_eq!(config.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_env_unparsable_values_fall_back() {
        let config = from_map(&[
            ("POS_TIMEOUT_SECS", "soon"),
            ("POS_KITCHEN_POLL_SECS", "-1"),
            ("POS_TOKEN", ""),
        ]);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.kitchen_poll_secs, DEFAULT_KITCHEN_POLL_SECS);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::new("http://pos.local/api");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.kitchen_poll_interval(), Duration::from_secs(5));
        assert!(config.token.is_none());

        let config = config.with_token("abc").with_timeout(5).with_kitchen_poll_secs(0);
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.kitchen_poll_interval(), Duration::from_secs(1));
    }
}
