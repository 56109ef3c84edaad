//! Field rendering utilities for forms

use crate::state::{FieldError, FormField};
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a text field; a visible validation error goes in the bottom border
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    title: &str,
    is_active: bool,
    error: Option<FieldError>,
    theme: &Theme,
) {
    let text_style = if is_active {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.muted)
    };

    let border_style = if error.is_some() {
        Style::default().fg(theme.error)
    } else {
        theme.focus_style(is_active)
    };

    let value = field.as_text();
    let cursor = Span::styled(if is_active { CURSOR } else { "" }, theme.key_style());

    let content = if value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled("(empty)", text_style)))
    } else if field.is_multiline {
        // split('\n') keeps the trailing empty line so the cursor follows a newline
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(value, text_style), cursor]))
    };

    let mut block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(theme.error),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
