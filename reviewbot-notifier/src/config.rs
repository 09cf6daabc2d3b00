//! Notifier configuration
//!
//! Defines all configurable parameters for the notifier: the three required
//! secrets plus the tunable endpoint and polling interval. Loaded once at
//! startup and passed into each component; there is no ambient global state.

use std::time::Duration;

use crate::error::NotifierError;
use reviewbot_client::DEFAULT_ENDPOINT;

/// Default number of seconds between poll cycles
const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Notifier configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Identifier of the chat that receives notifications
    pub telegram_chat_id: String,

    /// Full URL of the homework-statuses endpoint
    pub endpoint: String,

    /// How often to poll the review API
    pub poll_interval: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        telegram_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            practicum_token: practicum_token.into(),
            telegram_token: telegram_token.into(),
            telegram_chat_id: telegram_chat_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - REVIEW_ENDPOINT (optional, default: the hosted review API)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    pub fn from_env() -> Result<Self, NotifierError> {
        let practicum_token = require_env("PRACTICUM_TOKEN")?;
        let telegram_token = require_env("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require_env("TELEGRAM_CHAT_ID")?;

        let endpoint =
            std::env::var("REVIEW_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let poll_interval = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS));

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
        })
    }

    /// Validates the configuration
    ///
    /// All three secrets must be non-empty before any network client is
    /// built; the process must not start without them.
    pub fn validate(&self) -> Result<(), NotifierError> {
        if self.practicum_token.is_empty() {
            return Err(NotifierError::Configuration(
                "practicum_token cannot be empty".to_string(),
            ));
        }

        if self.telegram_token.is_empty() {
            return Err(NotifierError::Configuration(
                "telegram_token cannot be empty".to_string(),
            ));
        }

        if self.telegram_chat_id.is_empty() {
            return Err(NotifierError::Configuration(
                "telegram_chat_id cannot be empty".to_string(),
            ));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(NotifierError::Configuration(
                "endpoint must start with http:// or https://".to_string(),
            ));
        }

        if self.poll_interval.as_secs() == 0 {
            return Err(NotifierError::Configuration(
                "poll_interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn require_env(name: &str) -> Result<String, NotifierError> {
    std::env::var(name)
        .map_err(|_| NotifierError::Configuration(format!("{name} environment variable not set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = Config::new("api", "bot", "chat");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_secrets() {
        assert!(Config::new("", "bot", "chat").validate().is_err());
        assert!(Config::new("api", "", "chat").validate().is_err());
        assert!(Config::new("api", "bot", "").validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_endpoint() {
        let mut config = Config::new("api", "bot", "chat");
        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.endpoint = "https://example.com/statuses/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_interval() {
        let mut config = Config::new("api", "bot", "chat");
        config.poll_interval = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }
}
