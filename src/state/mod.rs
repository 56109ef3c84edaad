//! Application state module

mod forms;
mod payload;
mod rating;
mod submission;
mod validation;
mod view_model;

pub use forms::*;
pub use payload::FeedbackPayload;
pub use rating::Rating;
pub use submission::{SubmissionState, SubmitBlocked, GENERIC_FAILURE_MESSAGE};
pub use validation::{FieldError, MIN_FEEDBACK_CHARS};
pub use view_model::{derive_view, Progress, ViewModel};
