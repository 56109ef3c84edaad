//! Thank-you dialog shown once feedback is accepted

use super::base::{render_dialog, DialogConfig};
use crate::ui::Theme;
use ratatui::{text::Span, Frame};

/// Render the confirmation overlay centered on the screen
pub fn render_success_dialog(frame: &mut Frame, theme: &Theme) {
    let hint = vec![
        Span::styled("Enter", theme.key_style()),
        Span::raw(": submit another response  "),
        Span::styled("Esc", theme.key_style()),
        Span::raw(": quit"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Thank you for your feedback!",
            title_color: theme.success,
            border_color: theme.success,
            background: theme.background,
            message: "Your response has been received. We appreciate you taking the time to help us improve.",
            hint: Some(hint),
            max_width: 60,
        },
    );
}
