use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::utils::centered_rect;
use crate::domain::Dialog;
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 60;

/// Modal for the front dialog in the queue.
pub struct DialogPopup<'a> {
    dialog: &'a Dialog,
    theme: &'a Theme,
    queued: usize,
}

impl<'a> DialogPopup<'a> {
    #[must_use]
    pub fn new(dialog: &'a Dialog, theme: &'a Theme) -> Self {
        Self {
            dialog,
            theme,
            queued: 0,
        }
    }

    /// Number of dialogs waiting behind this one.
    #[must_use]
    pub const fn queued(mut self, queued: usize) -> Self {
        self.queued = queued;
        self
    }
}

impl Widget for DialogPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.dialog.title);
        let lines: Vec<&str> = self.dialog.lines().collect();

        let content_width = lines
            .iter()
            .map(|l| l.width())
            .chain(std::iter::once(title.width()))
            .max()
            .unwrap_or(0);
        let width = u16::try_from(content_width)
            .unwrap_or(u16::MAX)
            .saturating_add(6)
            .clamp(24, MAX_WIDTH);
        let height = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(5);

        let popup = centered_rect(width, height, area);
        if popup.area() == 0 {
            return;
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(title, self.theme.title_style))
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.card_background).fg(Color::White));
        if self.queued > 0 {
            block = block.title_bottom(
                Line::from(format!(" +{} ", self.queued)).alignment(Alignment::Right),
            );
        }

        let inner = block.inner(popup);
        Clear.render(popup, buf);
        block.render(popup, buf);

        let [body, _, footer] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let text: Vec<Line<'_>> = lines.iter().map(|l| Line::from(*l)).collect();
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .render(body, buf);

        Paragraph::new(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ))
        .alignment(Alignment::Center)
        .render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_title_body_and_button() {
        let dialog = Dialog::new("Login Info", "Email: a@b.co\nPassword: pw");
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        DialogPopup::new(&dialog, &theme).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Login Info"));
        assert!(text.contains("Email: a@b.co"));
        assert!(text.contains("Password: pw"));
        assert!(text.contains("[ OK ]"));
    }
}
