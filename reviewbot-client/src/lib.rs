//! Reviewbot HTTP Clients
//!
//! Type-safe HTTP clients for the notifier's two outbound interfaces: the
//! homework-review API and the Telegram Bot API.
//!
//! Both clients are thin wrappers over `reqwest` that translate transport
//! failures, non-success status codes, and undecodable bodies into the
//! shared [`ClientError`] taxonomy.
//!
//! # Example
//!
//! ```no_run
//! use reviewbot_client::ReviewApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), reviewbot_client::ClientError> {
//!     let client = ReviewApiClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "oauth-token",
//!     );
//!
//!     let response = client.homework_statuses(1_700_000_000).await?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod review;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use review::{DEFAULT_ENDPOINT, ReviewApiClient};
pub use telegram::{TelegramBot, TelegramUser};
