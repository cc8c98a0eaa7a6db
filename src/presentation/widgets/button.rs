//! Pressable button with press feedback.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// How long a press keeps the button shrunk.
pub const PRESS_FEEDBACK: Duration = Duration::from_millis(150);

pub struct ButtonStyle {
    pub face: Style,
    pub border: Style,
    pub border_focused: Style,
    pub disabled: Style,
}

impl ButtonStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            face: theme.button_style(),
            border: Style::default().fg(theme.accent),
            border_focused: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            disabled: theme.disabled_style,
        }
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            face: Style::default().fg(Color::White).bg(Color::Blue),
            border: Style::default().fg(Color::Blue),
            border_focused: Style::default().fg(Color::White),
            disabled: Style::default().fg(Color::Black).bg(Color::DarkGray),
        }
    }
}

/// Label (or custom line) in a bordered, pressable region.
pub struct CustomButton {
    title: String,
    content: Option<Line<'static>>,
    disabled: bool,
    focused: bool,
    animated: bool,
    feedback: Duration,
    style: ButtonStyle,
}

impl CustomButton {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            disabled: false,
            focused: false,
            animated: true,
            feedback: Duration::ZERO,
            style: ButtonStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Replaces the title with custom content until cleared.
    pub fn set_content(&mut self, content: Option<Line<'static>>) {
        self.content = content;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns `false` and does nothing while disabled.
    pub fn press(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        if self.animated {
            self.feedback = PRESS_FEEDBACK;
        }
        true
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.feedback = self.feedback.saturating_sub(elapsed);
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        !self.feedback.is_zero()
    }
}

impl Widget for &CustomButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if self.is_pressed() && area.width > 4 {
            Rect {
                x: area.x + 1,
                width: area.width - 2,
                ..area
            }
        } else {
            area
        };

        let face = if self.disabled {
            self.style.disabled
        } else {
            self.style.face
        };
        let border = if self.disabled {
            self.style.disabled
        } else if self.focused {
            self.style.border_focused.bg(face.bg.unwrap_or(Color::Reset))
        } else {
            self.style.border.bg(face.bg.unwrap_or(Color::Reset))
        };
        let border_type = if self.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let line = self
            .content
            .clone()
            .unwrap_or_else(|| Line::from(self.title.clone()));

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(face)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(border),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_gives_feedback_then_restores() {
        let mut button = CustomButton::new("Sign In");
        assert!(button.press());
        assert!(button.is_pressed());

        button.tick(Duration::from_millis(100));
        assert!(button.is_pressed());
        button.tick(Duration::from_millis(60));
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_disabled_suppresses_press() {
        let mut button = CustomButton::new("Sign In");
        button.set_disabled(true);
        assert!(!button.press());
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_press_without_animation() {
        let mut button = CustomButton::new("Go").animated(false);
        assert!(button.press());
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_render_centers_title() {
        let button = CustomButton::new("Go");
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        (&button).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("Go"));
    }
}
