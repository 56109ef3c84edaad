//! Form rendering module
//!
//! - `field_renderer`: text field rendering
//! - `progress`: step lamps
//! - `feedback_form`: the feedback form itself

mod feedback_form;
mod field_renderer;
mod progress;

pub use feedback_form::draw_feedback_form;
