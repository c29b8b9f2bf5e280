use ratatui::style::Color;

use crate::theme::ThemeMode;

/// Terminal palette for the current theme mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Primary branding color
    pub fn primary(&self) -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Cyan,
            ThemeMode::Light => Color::Blue,
        }
    }

    /// Selection/highlight
    pub fn highlight(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Cyan,
            ThemeMode::Light => Color::Blue,
        }
    }

    /// Selection marker/arrow
    pub fn selection_marker(&self) -> Color {
        Color::Green
    }

    /// Dimmed/inactive text
    pub fn dim(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::DarkGray,
            ThemeMode::Light => Color::Gray,
        }
    }

    /// Normal text
    pub fn text(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::White,
            ThemeMode::Light => Color::Black,
        }
    }

    /// Accent for numbers/counts
    pub fn accent(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::LightBlue,
            ThemeMode::Light => Color::Rgb(30, 64, 175),
        }
    }

    pub fn background(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Rgb(18, 18, 18),
            ThemeMode::Light => Color::Rgb(250, 250, 250),
        }
    }

    /// Text on top of an active chip.
    pub fn on_highlight(&self) -> Color {
        self.background()
    }
}
