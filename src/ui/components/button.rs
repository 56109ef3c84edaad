//! Button component for TUI

use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button
///
/// `color` tints the label when the button is chosen (e.g. the selected
/// rating); a disabled button is drawn muted regardless.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_focused: bool,
    is_enabled: bool,
    color: Option<Color>,
    theme: &Theme,
) {
    let border_style = theme.focus_style(is_focused);

    let text_style = if !is_enabled {
        Style::default().fg(theme.muted)
    } else if let Some(color) = color {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else if is_focused {
        theme.key_style()
    } else {
        Style::default().fg(theme.text)
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
