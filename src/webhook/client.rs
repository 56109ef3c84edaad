//! HTTP client for posting feedback to the configured webhook
//!
//! One POST per submission with a JSON body. Success is decided by the
//! response status alone; the body is never read.

use super::traits::WebhookClientTrait;
use crate::state::{FeedbackPayload, GENERIC_FAILURE_MESSAGE};
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Webhook submission errors
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Webhook endpoint is not configured")]
    NotConfigured,
    #[error("Webhook endpoint {0:?} is not a valid URL")]
    InvalidEndpoint(String),
    #[error("Server responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Short message suitable for showing inline under the form
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Endpoint as resolved at startup
#[derive(Debug, Clone)]
enum Endpoint {
    Missing,
    Invalid(String),
    Valid(reqwest::Url),
}

impl Endpoint {
    fn parse(raw: Option<String>) -> Self {
        let Some(raw) = raw.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()) else {
            return Self::Missing;
        };
        match reqwest::Url::parse(&raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Valid(url),
            _ => Self::Invalid(raw),
        }
    }
}

/// Client for the feedback webhook
#[derive(Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl WebhookClient {
    /// Create a new webhook client for the given endpoint
    pub fn new(endpoint: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("feedback-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_http(http, endpoint))
    }

    fn with_http(http: reqwest::Client, endpoint: Option<String>) -> Self {
        Self {
            http,
            endpoint: Endpoint::parse(endpoint),
        }
    }

    /// True only for an endpoint that parsed as an http(s) URL
    pub fn is_configured(&self) -> bool {
        matches!(self.endpoint, Endpoint::Valid(_))
    }
}

#[async_trait]
impl WebhookClientTrait for WebhookClient {
    async fn submit(&self, payload: &FeedbackPayload) -> Result<(), SubmitError> {
        let endpoint = match &self.endpoint {
            Endpoint::Valid(url) => url.clone(),
            Endpoint::Missing => return Err(SubmitError::NotConfigured),
            Endpoint::Invalid(raw) => return Err(SubmitError::InvalidEndpoint(raw.clone())),
        };

        let resp = self
            .http
            .post(endpoint)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            tracing::debug!(%status, "Webhook accepted feedback");
            Ok(())
        } else {
            Err(SubmitError::Status(status))
        }
    }
}
