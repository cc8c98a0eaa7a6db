//! Labelled text field with optional icons.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::input::{AutoCapitalize, TextInput};
use crate::presentation::theme::Theme;

pub struct InputFieldStyle {
    pub border: Style,
    pub border_focused: Style,
    pub text: Style,
    pub placeholder: Style,
    pub icon: Style,
    pub icon_focused: Style,
    pub cursor: Style,
}

impl InputFieldStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            border_focused: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            icon_focused: theme.focus_style,
            cursor: Style::default().fg(Color::Black).bg(theme.accent),
            ..Self::default()
        }
    }
}

impl Default for InputFieldStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            text: Style::default().fg(Color::White),
            placeholder: Style::default().fg(Color::Gray),
            icon: Style::default().fg(Color::Gray),
            icon_focused: Style::default().fg(Color::Cyan),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Leading icon, text control, trailing icon. Input options are passed
/// straight through to the inner [`TextInput`].
pub struct InputField {
    input: TextInput,
    leading_icon: Option<String>,
    trailing_icon: Option<String>,
    focused: bool,
    style: InputFieldStyle,
}

impl InputField {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            leading_icon: None,
            trailing_icon: None,
            focused: false,
            style: InputFieldStyle::default(),
        }
    }

    #[must_use]
    pub fn leading_icon(mut self, icon: impl Into<String>) -> Self {
        self.leading_icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn trailing_icon(mut self, icon: impl Into<String>) -> Self {
        self.trailing_icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.input = self.input.placeholder(text);
        self
    }

    #[must_use]
    pub fn secure_entry(mut self, secure: bool) -> Self {
        self.input.set_masked(secure);
        self
    }

    #[must_use]
    pub fn auto_capitalize(mut self, mode: AutoCapitalize) -> Self {
        self.input = self.input.auto_capitalize(mode);
        self
    }

    #[must_use]
    pub const fn style(mut self, style: InputFieldStyle) -> Self {
        self.style = style;
        self
    }

    pub fn set_secure_entry(&mut self, secure: bool) {
        self.input.set_masked(secure);
    }

    pub fn set_trailing_icon(&mut self, icon: Option<String>) {
        self.trailing_icon = icon;
    }

    /// Returns `true` when focus actually changed.
    pub fn focus(&mut self) -> bool {
        !std::mem::replace(&mut self.focused, true)
    }

    /// Returns `true` when focus actually changed.
    pub fn blur(&mut self) -> bool {
        std::mem::replace(&mut self.focused, false)
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.input.value()
    }

    #[must_use]
    pub const fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input.set_value(value);
    }

    /// Returns whether the value changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        self.input.handle_key(key)
    }

    fn text_line(&self, width: usize) -> Line<'_> {
        let text = self.input.display_text();
        let text_style = if self.input.value().is_empty() {
            self.style.placeholder
        } else {
            self.style.text
        };

        if !self.focused {
            return Line::from(Span::styled(text, text_style));
        }

        if self.input.value().is_empty() {
            return Line::from(vec![
                Span::styled(" ", self.style.cursor),
                Span::styled(text, text_style),
            ]);
        }

        // Keep the cursor inside the visible window.
        let chars: Vec<char> = text.chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let start = cursor.saturating_sub(width.saturating_sub(1));
        let before: String = chars[start..cursor].iter().collect();
        let (at, after) = match chars.get(cursor) {
            Some(c) => (c.to_string(), chars[cursor + 1..].iter().collect()),
            None => (" ".to_string(), String::new()),
        };

        Line::from(vec![
            Span::styled(before, text_style),
            Span::styled(at, self.style.cursor),
            Span::styled(after, text_style),
        ])
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &InputField {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, icon) = if self.focused {
            (self.style.border_focused, self.style.icon_focused)
        } else {
            (self.style.border, self.style.icon)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let slot = |icon: Option<&String>| {
            icon.map_or(0, |icon| icon.as_str().width() as u16 + 1)
        };
        let [leading, text, trailing] = Layout::horizontal([
            Constraint::Length(slot(self.leading_icon.as_ref())),
            Constraint::Fill(1),
            Constraint::Length(slot(self.trailing_icon.as_ref())),
        ])
        .areas(inner);

        if let Some(icon_text) = &self.leading_icon {
            Paragraph::new(Span::styled(icon_text.as_str(), icon)).render(leading, buf);
        }
        Paragraph::new(self.text_line(text.width as usize)).render(text, buf);
        if let Some(icon_text) = &self.trailing_icon {
            Paragraph::new(Line::from(Span::styled(format!(" {icon_text}"), icon)))
                .render(trailing, buf);
        }
    }
}
