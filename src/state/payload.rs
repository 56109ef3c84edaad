//! Wire payload sent to the webhook

use super::rating::Rating;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// JSON body posted to the feedback webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackPayload {
    pub rating: Rating,
    pub feedback: String,
    pub name: String,
    pub email: String,
    /// ISO-8601 UTC timestamp, e.g. `2024-05-01T12:30:00.000Z`
    pub timestamp: String,
}

impl FeedbackPayload {
    pub fn new(
        rating: Rating,
        feedback: &str,
        name: &str,
        email: &str,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            rating,
            feedback: feedback.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
