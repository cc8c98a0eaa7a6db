use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const DEFAULT_ACCENT: Color = Color::Rgb(0x21, 0x93, 0xb0);

/// Colors and styles shared by every screen, derived from one accent color.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub base_style: Style,
    pub title_style: Style,
    pub focus_style: Style,
    pub muted_style: Style,
    pub disabled_style: Style,
    pub error_style: Style,
    pub link_style: Style,
    pub card_background: Color,
    pub splash_gradient: [Color; 3],
    pub login_gradient: [Color; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(DEFAULT_ACCENT)
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let accent_hsl = ColorConverter::to_hsl(accent);

        let disabled = ColorConverter::tone(accent, accent_hsl.s * 0.35, 0.75);
        let card_background = ColorConverter::tone(accent, 0.35, 0.12);

        Self {
            accent,
            base_style: Style::default().fg(Color::Reset),
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            focus_style: Style::default().fg(accent),
            muted_style: Style::default().fg(Color::DarkGray),
            disabled_style: Style::default().fg(Color::Black).bg(disabled),
            error_style: Style::default()
                .fg(Color::Rgb(0xff, 0x4d, 0x4f))
                .add_modifier(Modifier::BOLD),
            link_style: Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            card_background,
            splash_gradient: [
                Color::Rgb(0x0f, 0x20, 0x27),
                Color::Rgb(0x2c, 0x53, 0x64),
                Color::Rgb(0x00, 0xc6, 0xff),
            ],
            login_gradient: [
                Color::Rgb(0x1e, 0x3c, 0x72),
                Color::Rgb(0x2a, 0x52, 0x98),
                Color::Rgb(0x6d, 0xd5, 0xed),
            ],
        }
    }

    /// Style for a filled button face.
    #[must_use]
    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => DEFAULT_ACCENT,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();

    match hex.len() {
        6 => Some((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let double = |i: usize| channel(hex[i..=i].repeat(2).as_str());
            Some((double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}
