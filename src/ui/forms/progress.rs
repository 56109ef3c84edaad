//! Three-step progress indicator

use crate::state::Progress;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const STEPS: [&str; 3] = ["Rating", "Feedback", "Contact"];

/// Draw one lamp per step, lit when that step is complete
pub fn draw_progress(frame: &mut Frame, area: Rect, progress: Progress, theme: &Theme) {
    let mut spans = Vec::with_capacity(STEPS.len() * 2);
    for (step, done) in STEPS.iter().zip(progress) {
        let (lamp, color) = if done {
            ("●", theme.success)
        } else {
            ("○", theme.muted)
        };
        if !spans.is_empty() {
            spans.push(Span::styled(" ── ", Style::default().fg(theme.muted)));
        }
        spans.push(Span::styled(
            format!("{lamp} {step}"),
            Style::default().fg(color),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
