//! Footer line with key hints and a route label.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::keybinding::Action;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Idle.
    Info,
    /// Work in flight.
    Busy,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Gray,
            Self::Busy => Color::Yellow,
        }
    }
}

/// Status bar widget.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    right: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            level: StatusLevel::Info,
        }
    }

    /// Creates a bar listing key hints on the left.
    #[must_use]
    pub fn hints(hints: &[(&str, Action)]) -> Self {
        let left = hints
            .iter()
            .map(|(label, _)| *label)
            .collect::<Vec<_>>()
            .join("  |  ");
        Self::new().left(left)
    }

    /// Sets left content.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets right content.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Sets status level.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint_style = Style::default().fg(self.level.color());
        let label_style = hint_style.add_modifier(Modifier::BOLD);

        let width = area.width as usize;
        let left_len = self.left.width();
        let right_len = self.right.width();

        let mut spans = vec![Span::styled(&self.left, hint_style)];

        let padding = width.saturating_sub(left_len + right_len);
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
        }
        if !self.right.is_empty() {
            spans.push(Span::styled(&self.right, label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
