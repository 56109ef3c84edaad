//! Submission lifecycle

/// Shown when a failure carries no usable message
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit feedback. Please try again.";

/// Where the form is in its submit lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A webhook call is running; no second submission may start
    InFlight,
    /// Terminal until the form is reset
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Whether a submit action may start from this state
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    /// Whether field values may be edited
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Build a failed state, falling back to the generic message
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Failed(GENERIC_FAILURE_MESSAGE.to_string())
        } else {
            Self::Failed(message)
        }
    }
}

/// Why a submit action did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A submission is already running
    InFlight,
    /// The form already succeeded and must be reset first
    Completed,
    /// Rating missing or a field failed validation
    Invalid,
}

impl SubmitBlocked {
    pub fn hint(self) -> &'static str {
        match self {
            Self::InFlight => "Submission already in progress",
            Self::Completed => "Feedback already sent",
            Self::Invalid => "Please complete the highlighted fields",
        }
    }
}
