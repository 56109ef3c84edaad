//! Form domain layer
//!
//! Field value objects and the feedback form aggregate that owns them.

mod field;
mod form_state;

pub use field::{FieldKey, FormField};
pub use form_state::{FeedbackForm, Focus};
