//! Derived view of the form
//!
//! Everything the renderer needs is computed here from `FeedbackForm`
//! without side effects, so visibility and submit-enablement can be
//! tested without a terminal.

use super::forms::{FeedbackForm, FieldKey};
use super::validation::{validate, FieldError, ValidationResult};

/// Progress lamps: rating chosen, feedback written, contact details given
pub type Progress = [bool; 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Rating picker is always shown
    pub show_rating: bool,
    pub show_feedback: bool,
    pub show_contact: bool,
    /// Submit control renders once every field has some input
    pub show_submit: bool,
    /// Submit control accepts presses only when the form is fully valid
    pub submit_enabled: bool,
    pub progress: Progress,
    pub validation: ValidationResult,
    pub feedback_error: Option<FieldError>,
    pub name_error: Option<FieldError>,
    pub email_error: Option<FieldError>,
    pub is_submitting: bool,
    pub show_success: bool,
    pub failure_message: Option<String>,
}

impl ViewModel {
    /// Inline error for a field, already gated on its touched flag
    pub fn error_for(&self, key: FieldKey) -> Option<FieldError> {
        match key {
            FieldKey::Feedback => self.feedback_error,
            FieldKey::Name => self.name_error,
            FieldKey::Email => self.email_error,
        }
    }
}

pub fn derive_view(form: &FeedbackForm) -> ViewModel {
    let has_rating = form.rating.is_some();
    let has_feedback = !form.feedback.is_blank();
    let has_contact = !form.name.is_blank() && !form.email.is_blank();

    let show_feedback = has_rating;
    let show_contact = show_feedback && has_feedback;
    let show_submit = show_contact && has_contact;

    let validation = validate(form);
    let is_submitting = form.submission.is_in_flight();
    let submit_enabled = has_rating && validation.is_valid() && form.submission.can_submit();

    ViewModel {
        show_rating: true,
        show_feedback,
        show_contact,
        show_submit,
        submit_enabled,
        progress: [has_rating, has_feedback, has_contact],
        validation,
        feedback_error: validation.visible_error_for(FieldKey::Feedback, form.feedback.touched),
        name_error: validation.visible_error_for(FieldKey::Name, form.name.touched),
        email_error: validation.visible_error_for(FieldKey::Email, form.email.touched),
        is_submitting,
        show_success: form.submission.is_succeeded(),
        failure_message: form.submission.failure_message().map(str::to_string),
    }
}
