//! Feedback form rendering
//!
//! A single component for every palette: colours come from the `Theme`,
//! sections from the derived `ViewModel`.

use super::field_renderer::draw_field;
use super::progress::draw_progress;
use crate::app::App;
use crate::state::{FieldKey, Focus, Rating, ViewModel, MIN_FEEDBACK_CHARS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the feedback form with every currently visible section
pub fn draw_feedback_form(frame: &mut Frame, area: Rect, app: &App, view: &ViewModel) {
    let theme = &app.theme;
    let form = &app.form;

    let block = Block::default()
        .title(" Share your feedback ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![
        Constraint::Length(1),             // Progress
        Constraint::Length(1),             // Prompt
        Constraint::Length(BUTTON_HEIGHT), // Rating picker
    ];
    if view.show_feedback {
        constraints.push(Constraint::Min(6));
    }
    if view.show_contact {
        constraints.push(Constraint::Length(3)); // Name
        constraints.push(Constraint::Length(3)); // Email
    }
    if view.show_submit {
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
    }
    if view.failure_message.is_some() {
        constraints.push(Constraint::Length(2));
    }
    if !view.show_feedback {
        constraints.push(Constraint::Min(0));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);
    let mut areas = chunks.iter().copied();
    let mut next_area = || areas.next().unwrap_or_default();

    draw_progress(frame, next_area(), view.progress, theme);

    let prompt = Paragraph::new("How satisfied are you with our service?")
        .style(Style::default().fg(theme.text));
    frame.render_widget(prompt, next_area());

    draw_rating_picker(
        frame,
        next_area(),
        form.rating,
        form.focus == Focus::Rating,
        !view.is_submitting,
        theme,
    );

    if view.show_feedback {
        let chars = form.feedback.trimmed().chars().count();
        let title = format!(
            "{} ({chars}/{MIN_FEEDBACK_CHARS}+ characters)",
            form.feedback.label
        );
        draw_field(
            frame,
            next_area(),
            &form.feedback,
            &title,
            form.focus == Focus::Feedback,
            view.error_for(FieldKey::Feedback),
            theme,
        );
    }

    if view.show_contact {
        for (field, focus) in [(&form.name, Focus::Name), (&form.email, Focus::Email)] {
            draw_field(
                frame,
                next_area(),
                field,
                &field.label,
                form.focus == focus,
                view.error_for(field.key),
                theme,
            );
        }
    }

    if view.show_submit {
        let label = if view.is_submitting {
            "Submitting..."
        } else {
            "Submit feedback"
        };
        render_button(
            frame,
            next_area(),
            label,
            form.focus == Focus::Submit,
            view.submit_enabled,
            None,
            theme,
        );
    }

    if let Some(message) = &view.failure_message {
        let failure = Paragraph::new(Line::from(vec![
            Span::styled("✗ ", Style::default().fg(theme.error)),
            Span::styled(message.as_str(), Style::default().fg(theme.error)),
        ]))
        .wrap(Wrap { trim: true });
        frame.render_widget(failure, next_area());
    }
}

/// Draw the three rating buttons side by side
fn draw_rating_picker(
    frame: &mut Frame,
    area: Rect,
    selected: Option<Rating>,
    is_focused: bool,
    is_enabled: bool,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (rating, chunk) in Rating::ALL.into_iter().zip(chunks.iter()) {
        let is_selected = selected == Some(rating);
        let content = format!("{} {} {}", rating.value(), rating.emoji(), rating.label());
        render_button(
            frame,
            *chunk,
            &content,
            is_focused && (is_selected || selected.is_none()),
            is_enabled,
            is_selected.then(|| theme.rating_color(rating)),
            theme,
        );
    }
}
