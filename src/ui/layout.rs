//! Layout components (form area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Focus, ViewModel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, view: &ViewModel) {
    let theme = &app.theme;
    let mut spans = vec![Span::raw(" ")];

    if view.is_submitting {
        spans.push(Span::styled(
            "Sending feedback...",
            Style::default().fg(theme.accent),
        ));
    } else {
        spans.push(Span::styled(
            get_hints(app.form.focus, view),
            Style::default().fg(theme.muted),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(theme.error)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Get keyboard hints for the focused section
fn get_hints(focus: Focus, view: &ViewModel) -> String {
    if view.show_success {
        return "Enter:another response  Esc:quit".to_string();
    }
    match focus {
        Focus::Rating => "1-3/←→:rate  Tab:next  Esc:quit".to_string(),
        Focus::Feedback => format!("Tab:next  Enter:newline  {SUBMIT_SHORTCUT}:submit  Esc:quit"),
        Focus::Name | Focus::Email => {
            format!("Tab/Enter:next  Shift+Tab:back  {SUBMIT_SHORTCUT}:submit  Esc:quit")
        }
        Focus::Submit => format!("Enter/{SUBMIT_SHORTCUT}:submit  Shift+Tab:back  Esc:quit"),
    }
}
