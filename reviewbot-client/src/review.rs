//! Homework-review API client

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Default homework-statuses endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the homework-review API
///
/// Issues authorized GET requests against the single homework-statuses
/// endpoint. The body is returned as a parsed JSON mapping; shape validation
/// is the caller's concern.
#[derive(Debug, Clone)]
pub struct ReviewApiClient {
    /// Full URL of the homework-statuses endpoint
    endpoint: String,
    /// OAuth token presented in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl ReviewApiClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework-statuses endpoint
    /// * `token` - OAuth token for the review API
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use reviewbot_client::ReviewApiClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ReviewApiClient::with_client(
    ///     "https://practicum.yandex.ru/api/user_api/homework_statuses/",
    ///     "oauth-token",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Epoch-second lower bound of the fetch window
    ///
    /// # Returns
    /// The parsed response body as a JSON mapping
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses (from_date: {})", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ReviewApiClient::new(DEFAULT_ENDPOINT, "secret");
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = ReviewApiClient::with_client("http://localhost:8080/", "secret", http_client);
        assert_eq!(client.endpoint(), "http://localhost:8080/");
    }
}
