//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod theme;

pub use theme::Theme;

use crate::app::App;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let view = app.view();
    let theme = &app.theme;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    let (main_area, status_area) = layout::create_layout(area);

    if view.show_success {
        components::render_success_dialog(frame, theme);
    } else {
        forms::draw_feedback_form(frame, main_area, app, &view);
    }

    layout::draw_status_bar(frame, status_area, app, &view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldKey, Rating, SubmissionState};
    use crate::webhook::MockWebhookClientTrait;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        App::new(Arc::new(MockWebhookClientTrait::new()), Theme::light())
    }

    fn render(app: &App) -> String {
        render_sized(app, 90, 32)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen_shows_only_rating() {
        let screen = render(&app());
        assert!(screen.contains("Share your feedback"));
        assert!(screen.contains("Unsatisfied"));
        assert!(screen.contains("Satisfied"));
        assert!(!screen.contains("Your feedback"));
        assert!(!screen.contains("Email"));
        assert!(!screen.contains("Submit feedback"));
    }

    #[test]
    fn test_filled_form_shows_every_section() {
        let mut app = app();
        app.form.select_rating(Rating::Neutral);
        app.form.set_text(FieldKey::Feedback, "Great service, very helpful");
        app.form.set_text(FieldKey::Name, "Acme Inc");
        app.form.set_text(FieldKey::Email, "a@acme");
        app.form.blur(FieldKey::Email);

        let screen = render(&app);
        assert!(screen.contains("Your feedback"));
        assert!(screen.contains("Acme Inc"));
        assert!(screen.contains("Submit feedback"));
        assert!(screen.contains("Please enter a valid email address"));
    }

    #[test]
    fn test_failure_message_is_rendered() {
        let mut app = app();
        app.form.select_rating(Rating::Neutral);
        app.form.set_text(FieldKey::Feedback, "Great service, very helpful");
        app.form.submission =
            SubmissionState::Failed("Server responded with 500 Internal Server Error".into());

        let screen = render(&app);
        assert!(screen.contains("Server responded with 500"));
    }

    #[test]
    fn test_success_screen_replaces_form() {
        let mut app = app();
        app.form.submission = SubmissionState::Succeeded;

        let screen = render(&app);
        assert!(screen.contains("Thank you for your feedback!"));
        assert!(!screen.contains("Share your feedback"));
    }

    #[test]
    fn test_narrow_terminal_does_not_panic() {
        let mut filled = app();
        filled.form.select_rating(Rating::Satisfied);
        filled.form.set_text(FieldKey::Feedback, "Great service, very helpful");
        filled.form.set_text(FieldKey::Name, "Acme Inc");
        filled.form.set_text(FieldKey::Email, "a@acme.com");

        let mut thanked = app();
        thanked.form.submission = SubmissionState::Succeeded;

        for screen in [&app(), &filled, &thanked] {
            for width in 1..=6 {
                for height in [1, 2, 5, 32] {
                    render_sized(screen, width, height);
                }
            }
            render_sized(screen, 90, 1);
        }
    }
}
