//! Webhook client module for submitting feedback over HTTP

mod client;
mod traits;

pub use client::{SubmitError, WebhookClient};
pub use traits::WebhookClientTrait;

#[cfg(test)]
pub use traits::MockWebhookClientTrait;
