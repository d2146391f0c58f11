use ratatui::style::Color;

/// Colors for the gallery chrome; the labels bring their own.
pub struct Theme;

impl Theme {
    /// Header badge behind the app name
    pub fn brand() -> Color {
        Color::Magenta
    }

    /// Block borders and section titles
    pub fn frame() -> Color {
        Color::Cyan
    }

    /// Name of the selected sample
    pub fn selected() -> Color {
        Color::Cyan
    }

    /// Arrow in front of the selected sample
    pub fn marker() -> Color {
        Color::Green
    }

    /// Hints and labels for values
    pub fn muted() -> Color {
        Color::DarkGray
    }

    pub fn text() -> Color {
        Color::White
    }

    /// Headings and the palette name
    pub fn title() -> Color {
        Color::LightBlue
    }
}
