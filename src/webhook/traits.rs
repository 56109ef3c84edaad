//! Trait abstraction for the webhook client to enable mocking in tests

use super::client::SubmitError;
use crate::state::FeedbackPayload;
use async_trait::async_trait;

/// Trait for webhook operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookClientTrait: Send + Sync {
    /// Post one feedback payload; success means a 2xx response
    async fn submit(&self, payload: &FeedbackPayload) -> Result<(), SubmitError>;
}
