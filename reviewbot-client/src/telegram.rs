//! Telegram Bot API client
//!
//! Message sending via the Bot API. Only the two methods the notifier needs
//! are implemented: `sendMessage` and `getMe`.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// HTTP client for the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramBot {
    bot_token: String,
    client: Client,
}

impl TelegramBot {
    /// Create a new bot client
    ///
    /// # Arguments
    /// * `bot_token` - Token issued by BotFather
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            client: Client::new(),
        }
    }

    /// Create a new bot client with a custom HTTP client
    pub fn with_client(bot_token: impl Into<String>, client: Client) -> Self {
        Self {
            bot_token: bot_token.into(),
            client,
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{}", self.bot_token, method)
    }

    /// Send a text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Numeric chat id or `@channel` name
    /// * `text` - The message body
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        debug!("Sending message to chat {}", chat_id);

        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });

        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&body)
            .send()
            .await?;

        let result: ApiResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Invalid sendMessage response: {e}")))?;

        if !result.ok {
            return Err(ClientError::api_error(
                result.error_code.unwrap_or_default(),
                result.description.unwrap_or_default(),
            ));
        }

        debug!("Message delivered to chat {}", chat_id);
        Ok(())
    }

    /// Fetch the bot's own identity
    ///
    /// Useful as a startup connectivity and token check.
    pub async fn get_me(&self) -> Result<TelegramUser> {
        let response = self.client.get(self.api_url("getMe")).send().await?;

        let body: ApiResponse<TelegramUser> = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Invalid getMe response: {e}")))?;

        if !body.ok {
            return Err(ClientError::api_error(
                body.error_code.unwrap_or_default(),
                body.description.unwrap_or_default(),
            ));
        }

        body.result
            .ok_or_else(|| ClientError::ParseError("getMe returned no result".into()))
    }
}

/// Envelope every Bot API response arrives in
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
    error_code: Option<u16>,
}

/// Bot identity returned by `getMe`
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_embeds_token_and_method() {
        let bot = TelegramBot::new("123:abc");
        assert_eq!(
            bot.api_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_deserialize_success_envelope() {
        let body: ApiResponse<TelegramUser> = serde_json::from_str(
            r#"{"ok":true,"result":{"id":42,"is_bot":true,"first_name":"reviewbot","username":"reviewbot_bot"}}"#,
        )
        .unwrap();

        assert!(body.ok);
        let user = body.result.unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.username.as_deref(), Some("reviewbot_bot"));
    }

    #[test]
    fn test_deserialize_error_envelope() {
        let body: ApiResponse<serde_json::Value> = serde_json::from_str(
            r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#,
        )
        .unwrap();

        assert!(!body.ok);
        assert_eq!(body.error_code, Some(401));
        assert_eq!(body.description.as_deref(), Some("Unauthorized"));
    }
}
