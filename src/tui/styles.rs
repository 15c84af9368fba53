//! TUI theme and styling

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // List colors
    pub pending: Color,
    pub resolved: Color,
    pub resolved_text: Color,

    // UI elements
    pub accent: Color,
    pub danger: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Blue pending header, green resolved header, gray resolved tasks,
    /// green for add/edit and red for delete.
    pub fn classic() -> Self {
        Self {
            background: Color::Rgb(24, 24, 28),
            border: Color::Rgb(70, 70, 80),
            selection: Color::Rgb(45, 50, 65),

            title: Color::Rgb(230, 230, 235),
            text: Color::Rgb(210, 210, 215),
            dimmed: Color::Rgb(120, 120, 130),
            hint: Color::Rgb(150, 170, 200),

            pending: Color::Rgb(90, 150, 255),
            resolved: Color::Rgb(80, 200, 120),
            resolved_text: Color::Rgb(140, 140, 140),

            accent: Color::Rgb(80, 200, 120),
            danger: Color::Rgb(235, 90, 80),
            warning: Color::Rgb(255, 190, 70),
        }
    }
}
