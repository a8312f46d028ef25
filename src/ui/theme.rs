use crate::engine::Mark;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub warning: Color,   // Yellow
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub pointer: Color, // Cyan for named pointers
    pub visited: Color, // Pink for visited tree nodes
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(249, 226, 175),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    pointer: Color::Rgb(148, 226, 213),
    visited: Color::Rgb(245, 194, 231),
};

impl Theme {
    /// Foreground colour for a highlighted cell
    pub fn mark(&self, mark: Mark) -> Color {
        match mark {
            Mark::Normal => self.fg,
            Mark::Active => self.primary,
            Mark::Swapping => self.secondary,
            Mark::Settled | Mark::Found => self.success,
            Mark::Discarded => self.comment,
            Mark::Visited => self.visited,
            Mark::Queued => self.warning,
        }
    }
}
