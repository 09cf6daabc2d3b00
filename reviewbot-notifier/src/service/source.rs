//! Status source
//!
//! Where review status payloads come from. Production uses the review API
//! client; tests substitute canned payloads.

use async_trait::async_trait;
use serde_json::Value;

use reviewbot_client::{ClientError, ReviewApiClient};

/// Source of review status payloads
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches the statuses of homeworks changed since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Epoch-second lower bound of the fetch window
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, ClientError>;
}

#[async_trait]
impl StatusSource for ReviewApiClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, ClientError> {
        ReviewApiClient::homework_statuses(self, from_date).await
    }
}
