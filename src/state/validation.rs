//! Field validation rules

use super::forms::{FeedbackForm, FieldKey};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum trimmed length of the feedback text, in characters
pub const MIN_FEEDBACK_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// A single field's validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(FieldKey),
    TooShort { min: usize },
    InvalidEmail,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(key) => write!(f, "{} is required", key.label()),
            FieldError::TooShort { min } => {
                write!(f, "Feedback must be at least {min} characters")
            }
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

/// Per-field validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub feedback: Option<FieldError>,
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.feedback.is_none() && self.name.is_none() && self.email.is_none()
    }

    pub fn error_for(&self, key: FieldKey) -> Option<FieldError> {
        match key {
            FieldKey::Feedback => self.feedback,
            FieldKey::Name => self.name,
            FieldKey::Email => self.email,
        }
    }

    /// The error to show inline, only once the field has been touched
    pub fn visible_error_for(&self, key: FieldKey, touched: bool) -> Option<FieldError> {
        if touched {
            self.error_for(key)
        } else {
            None
        }
    }
}

pub fn validate_feedback(value: &str) -> Option<FieldError> {
    match value.trim().chars().count() {
        0 => Some(FieldError::Required(FieldKey::Feedback)),
        n if n < MIN_FEEDBACK_CHARS => Some(FieldError::TooShort {
            min: MIN_FEEDBACK_CHARS,
        }),
        _ => None,
    }
}

pub fn validate_name(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required(FieldKey::Name))
    } else {
        None
    }
}

pub fn validate_email(value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Some(FieldError::Required(FieldKey::Email))
    } else if !EMAIL_PATTERN.is_match(value) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    }
}

/// Validate every text field of the form, regardless of touched state
pub fn validate(form: &FeedbackForm) -> ValidationResult {
    ValidationResult {
        feedback: validate_feedback(form.feedback.as_text()),
        name: validate_name(form.name.as_text()),
        email: validate_email(form.email.as_text()),
    }
}
