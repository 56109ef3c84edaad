//! Colour palettes for the form

use crate::config::ThemePreference;
use crate::state::Rating;
use ratatui::style::{Color, Modifier, Style};

/// Palette consumed by every form widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub unsatisfied: Color,
    pub neutral: Color,
    pub satisfied: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            text: Color::White,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            error: Color::LightRed,
            success: Color::LightGreen,
            unsatisfied: Color::LightRed,
            neutral: Color::LightYellow,
            satisfied: Color::LightGreen,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            text: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            error: Color::Red,
            success: Color::Green,
            unsatisfied: Color::Red,
            neutral: Color::Yellow,
            satisfied: Color::Green,
        }
    }

    /// Pick a palette; `Auto` reads the terminal's `COLORFGBG` hint
    pub fn from_preference(preference: ThemePreference, colorfgbg: Option<&str>) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Auto => {
                if colorfgbg.is_some_and(is_light_background) {
                    Self::light()
                } else {
                    Self::dark()
                }
            }
        }
    }

    pub fn rating_color(&self, rating: Rating) -> Color {
        match rating {
            Rating::Unsatisfied => self.unsatisfied,
            Rating::Neutral => self.neutral,
            Rating::Satisfied => self.satisfied,
        }
    }

    /// Border/text style for a focused or unfocused widget
    pub fn focus_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn key_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); 7 and 15 are light backgrounds
fn is_light_background(colorfgbg: &str) -> bool {
    colorfgbg
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg == 15)
}
