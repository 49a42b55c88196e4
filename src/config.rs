use std::env;

use thiserror::Error;

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const TOKEN_ENV_VAR: &str = "BATTLEMETRICS_API_KEY";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The token environment variable is unset or not unicode.
    #[error("BATTLEMETRICS_API_KEY environment variable not set")]
    MissingToken,

    /// The token cannot be used as an HTTP header value.
    #[error("API token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration for the BattleMetrics API client
///
/// # Example
/// ```
/// use battlemetrics::ClientConfig;
///
/// let config = ClientConfig {
///     timeout_secs: 10,
///     ..ClientConfig::new("my-token")
/// };
/// assert_eq!(config.base_url, "https://api.battlemetrics.com");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API token used as the bearer credential. Supplied by the caller or
    /// read from the environment; never read from files.
    pub api_key: String,

    /// Base URL for the BattleMetrics API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration with the given API token and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Build a configuration from the `BATTLEMETRICS_API_KEY` environment
    /// variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(TOKEN_ENV_VAR).map_err(|_| ConfigError::MissingToken)?;
        Ok(Self::new(api_key))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.battlemetrics.com".to_string(),
            timeout_secs: 30,
            user_agent: concat!("battlemetrics-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "https://api.battlemetrics.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("battlemetrics-rs/"));
    }

    #[test]
    fn test_config_override() {
        let config = ClientConfig {
            base_url: "http://localhost:8080".to_string(),
            ..ClientConfig::new("test-key")
        };
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_key, "test-key");
    }
}
