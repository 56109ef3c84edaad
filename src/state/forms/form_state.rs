//! Feedback form state and its submit transitions

use super::field::{FieldKey, FormField};
use crate::state::validation::validate;
use crate::state::{derive_view, FeedbackPayload, Rating, SubmissionState, SubmitBlocked};
use chrono::{DateTime, Utc};

/// Focusable sections of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Rating,
    Feedback,
    Name,
    Email,
    Submit,
}

impl Focus {
    pub const ORDER: [Focus; 5] = [
        Focus::Rating,
        Focus::Feedback,
        Focus::Name,
        Focus::Email,
        Focus::Submit,
    ];

    /// The text field behind this focus target, if any
    pub fn field_key(self) -> Option<FieldKey> {
        match self {
            Focus::Feedback => Some(FieldKey::Feedback),
            Focus::Name => Some(FieldKey::Name),
            Focus::Email => Some(FieldKey::Email),
            Focus::Rating | Focus::Submit => None,
        }
    }
}

/// Mutable state of the feedback form
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    pub rating: Option<Rating>,
    pub feedback: FormField,
    pub name: FormField,
    pub email: FormField,
    pub submission: SubmissionState,
    pub focus: Focus,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self {
            rating: None,
            feedback: FormField::text(FieldKey::Feedback, "Your feedback", true),
            name: FormField::text(FieldKey::Name, "Name", false),
            email: FormField::text(FieldKey::Email, "Email", false),
            submission: SubmissionState::Idle,
            focus: Focus::Rating,
        }
    }

    pub fn field(&self, key: FieldKey) -> &FormField {
        match key {
            FieldKey::Feedback => &self.feedback,
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
        }
    }

    pub fn field_mut(&mut self, key: FieldKey) -> &mut FormField {
        match key {
            FieldKey::Feedback => &mut self.feedback,
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.focus
            .field_key()
            .is_some_and(|key| self.field(key).is_multiline)
    }

    pub fn select_rating(&mut self, rating: Rating) {
        if self.submission.is_editable() {
            self.rating = Some(rating);
        }
    }

    /// Set a field's text directly (paste or programmatic fill)
    pub fn set_text(&mut self, key: FieldKey, value: impl Into<String>) {
        if self.submission.is_editable() {
            self.field_mut(key).set_text(value);
        }
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if !self.submission.is_editable() {
            return;
        }
        if let Some(key) = self.focus.field_key() {
            self.field_mut(key).push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.submission.is_editable() {
            return;
        }
        if let Some(key) = self.focus.field_key() {
            self.field_mut(key).pop_char();
        }
    }

    /// Mark a field as left by the user
    pub fn blur(&mut self, key: FieldKey) {
        self.field_mut(key).touch();
    }

    /// Move focus, blurring the text field being left
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        if let Some(key) = self.focus.field_key() {
            self.blur(key);
        }
        self.focus = focus;
    }

    /// Sections that can currently receive focus, in tab order
    pub fn focusable(&self) -> Vec<Focus> {
        let view = derive_view(self);
        Focus::ORDER
            .into_iter()
            .filter(|focus| match focus {
                Focus::Rating => true,
                Focus::Feedback => view.show_feedback,
                Focus::Name | Focus::Email => view.show_contact,
                Focus::Submit => view.show_submit,
            })
            .collect()
    }

    pub fn next_focus(&mut self) {
        let order = self.focusable();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = order[(current + 1) % order.len()];
        self.set_focus(next);
    }

    pub fn prev_focus(&mut self) {
        let order = self.focusable();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let prev = if current == 0 {
            order[order.len() - 1]
        } else {
            order[current - 1]
        };
        self.set_focus(prev);
    }

    /// Start a submission: Idle/Failed -> InFlight
    ///
    /// All fields are marked touched first so any errors become visible.
    /// Validation is re-run here regardless of what was shown before.
    pub fn begin_submit(
        &mut self,
        submitted_at: DateTime<Utc>,
    ) -> Result<FeedbackPayload, SubmitBlocked> {
        match self.submission {
            SubmissionState::InFlight => return Err(SubmitBlocked::InFlight),
            SubmissionState::Succeeded => return Err(SubmitBlocked::Completed),
            SubmissionState::Idle | SubmissionState::Failed(_) => {}
        }

        for key in FieldKey::ALL {
            self.blur(key);
        }

        let Some(rating) = self.rating else {
            return Err(SubmitBlocked::Invalid);
        };
        if !validate(self).is_valid() {
            return Err(SubmitBlocked::Invalid);
        }

        self.submission = SubmissionState::InFlight;
        Ok(FeedbackPayload::new(
            rating,
            self.feedback.trimmed(),
            self.name.trimmed(),
            self.email.trimmed(),
            submitted_at,
        ))
    }

    /// Resolve the running submission with the webhook outcome
    ///
    /// Ignored unless a submission is in flight. Field values are kept on
    /// failure so the user can retry immediately.
    pub fn complete_submit(&mut self, outcome: Result<(), String>) {
        if !self.submission.is_in_flight() {
            return;
        }
        self.submission = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(message) => SubmissionState::failed(message),
        };
    }

    /// Return to the empty initial state after a successful submission
    pub fn reset(&mut self) -> bool {
        if !self.submission.is_succeeded() {
            return false;
        }
        *self = Self::new();
        true
    }
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GENERIC_FAILURE_MESSAGE;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn filled_form() -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.select_rating(Rating::Satisfied);
        form.set_text(FieldKey::Feedback, "Great service, very helpful");
        form.set_text(FieldKey::Name, "Acme Inc");
        form.set_text(FieldKey::Email, "a@acme.com");
        form
    }

    mod focus {
        use super::*;

        #[test]
        fn test_only_rating_focusable_initially() {
            let form = FeedbackForm::new();
            assert_eq!(form.focusable(), vec![Focus::Rating]);
        }

        #[test]
        fn test_next_focus_stays_on_rating_without_selection() {
            let mut form = FeedbackForm::new();
            form.next_focus();
            assert_eq!(form.focus, Focus::Rating);
        }

        #[test]
        fn test_focus_follows_visible_sections() {
            let mut form = FeedbackForm::new();
            form.select_rating(Rating::Neutral);
            assert_eq!(form.focusable(), vec![Focus::Rating, Focus::Feedback]);

            form.set_text(FieldKey::Feedback, "x");
            assert_eq!(
                form.focusable(),
                vec![Focus::Rating, Focus::Feedback, Focus::Name, Focus::Email]
            );

            form.set_text(FieldKey::Name, "n");
            form.set_text(FieldKey::Email, "e");
            assert_eq!(form.focusable(), Focus::ORDER.to_vec());
        }

        #[test]
        fn test_leaving_field_marks_touched() {
            let mut form = FeedbackForm::new();
            form.select_rating(Rating::Neutral);
            form.next_focus();
            assert_eq!(form.focus, Focus::Feedback);
            assert!(!form.feedback.touched);

            form.next_focus();
            assert_eq!(form.focus, Focus::Rating);
            assert!(form.feedback.touched);
        }

        #[test]
        fn test_prev_focus_wraps() {
            let mut form = filled_form();
            form.prev_focus();
            assert_eq!(form.focus, Focus::Submit);
            form.prev_focus();
            assert_eq!(form.focus, Focus::Email);
        }

        #[test]
        fn test_input_goes_to_focused_field() {
            let mut form = FeedbackForm::new();
            form.select_rating(Rating::Neutral);
            form.set_focus(Focus::Feedback);
            form.input_char('h');
            form.input_char('i');
            form.backspace();
            assert_eq!(form.feedback.as_text(), "h");

            form.set_focus(Focus::Rating);
            form.input_char('x');
            assert_eq!(form.feedback.as_text(), "h");
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_submit_builds_payload() {
            let mut form = filled_form();
            form.set_text(FieldKey::Name, "  Acme Inc  ");
            let payload = form.begin_submit(at()).unwrap();

            assert_eq!(form.submission, SubmissionState::InFlight);
            assert_eq!(payload.rating, Rating::Satisfied);
            assert_eq!(payload.name, "Acme Inc");
            assert_eq!(payload.timestamp, "2024-05-01T09:00:00.000Z");
            assert!(form.feedback.touched && form.name.touched && form.email.touched);
        }

        #[test]
        fn test_begin_submit_requires_rating() {
            let mut form = filled_form();
            form.rating = None;
            assert_eq!(form.begin_submit(at()), Err(SubmitBlocked::Invalid));
            assert_eq!(form.submission, SubmissionState::Idle);
        }

        #[test]
        fn test_invalid_submit_reveals_errors() {
            let mut form = FeedbackForm::new();
            form.select_rating(Rating::Unsatisfied);
            form.set_text(FieldKey::Feedback, "short");
            assert_eq!(form.begin_submit(at()), Err(SubmitBlocked::Invalid));
            assert!(form.feedback.touched);
            assert!(form.name.touched);
            assert!(form.email.touched);
        }

        #[test]
        fn test_second_submit_while_in_flight_is_refused() {
            let mut form = filled_form();
            assert!(form.begin_submit(at()).is_ok());
            assert_eq!(form.begin_submit(at()), Err(SubmitBlocked::InFlight));
        }

        #[test]
        fn test_edits_ignored_while_in_flight() {
            let mut form = filled_form();
            form.begin_submit(at()).unwrap();
            form.set_text(FieldKey::Name, "Other");
            form.select_rating(Rating::Unsatisfied);
            assert_eq!(form.name.as_text(), "Acme Inc");
            assert_eq!(form.rating, Some(Rating::Satisfied));
        }

        #[test]
        fn test_failure_keeps_input_and_allows_retry() {
            let mut form = filled_form();
            form.begin_submit(at()).unwrap();
            form.complete_submit(Err("Server responded with 500".to_string()));

            assert_eq!(
                form.submission.failure_message(),
                Some("Server responded with 500")
            );
            assert_eq!(form.feedback.as_text(), "Great service, very helpful");

            assert!(form.begin_submit(at()).is_ok());
            assert_eq!(form.submission, SubmissionState::InFlight);
        }

        #[test]
        fn test_empty_failure_message_uses_fallback() {
            let mut form = filled_form();
            form.begin_submit(at()).unwrap();
            form.complete_submit(Err(String::new()));
            assert_eq!(
                form.submission.failure_message(),
                Some(GENERIC_FAILURE_MESSAGE)
            );
        }

        #[test]
        fn test_complete_without_in_flight_is_ignored() {
            let mut form = filled_form();
            form.complete_submit(Ok(()));
            assert_eq!(form.submission, SubmissionState::Idle);
        }

        #[test]
        fn test_success_is_terminal_until_reset() {
            let mut form = filled_form();
            form.begin_submit(at()).unwrap();
            form.complete_submit(Ok(()));
            assert_eq!(form.submission, SubmissionState::Succeeded);
            assert_eq!(form.begin_submit(at()), Err(SubmitBlocked::Completed));

            assert!(form.reset());
            assert_eq!(form.submission, SubmissionState::Idle);
            assert_eq!(form.rating, None);
            assert_eq!(form.feedback.as_text(), "");
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.email.as_text(), "");
            assert!(!form.feedback.touched && !form.name.touched && !form.email.touched);
            assert_eq!(form.focus, Focus::Rating);
        }

        #[test]
        fn test_reset_only_after_success() {
            let mut form = filled_form();
            assert!(!form.reset());
            assert_eq!(form.name.as_text(), "Acme Inc");
        }
    }
}
