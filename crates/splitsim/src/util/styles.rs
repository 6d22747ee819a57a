//! Common styling for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Color for the focused panel and the selected slider
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Color for help text and secondary labels
pub const HELP_COLOR: Color = Color::DarkGray;

/// Color for headers and values
pub const HEADER_COLOR: Color = Color::Cyan;

/// Color for the reward curve
pub const CURVE_COLOR: Color = Color::Blue;

/// Color for the optimum marker and best-value text
pub const POSITIVE_COLOR: Color = Color::Green;

/// Color for error text
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Bordered block whose border turns yellow when focused
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}
