use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::domain::keybinding::{Action, Keymap};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{ButtonStyle, CustomButton, StatusBar};

const TITLE: &str = "Welcome To";
const SUBTITLE: &str = "create an account and access thousand of cool stuffs";
const ENTRANCE_STAGGER: Duration = Duration::from_millis(200);
const ENTRANCE_MS: u32 = 800;
const CONTENT_WIDTH: u16 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeFocus {
    GetStarted,
    LogIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeAction {
    None,
    NavigateToLogin,
    Quit,
}

struct Entrance {
    delay: Duration,
    effect: Effect,
    done: bool,
}

pub struct WelcomeScreen {
    focus: WelcomeFocus,
    get_started: CustomButton,
    /// Get Started was pressed; navigate once its feedback has played.
    navigate_after_press: bool,
    keymap: Keymap,
    theme: Theme,
    entrances: Vec<Entrance>,
    elapsed: Duration,
    rendered_until: Duration,
}

impl WelcomeScreen {
    #[must_use]
    pub fn new(theme: Theme, animations: bool) -> Self {
        // icon, title, subtitle, button, login row
        let entrances = if animations {
            (0..5u32)
                .map(|i| Entrance {
                    delay: ENTRANCE_STAGGER * i,
                    effect: fx::coalesce((ENTRANCE_MS, Interpolation::CircOut)),
                    done: false,
                })
                .collect()
        } else {
            Vec::new()
        };

        let mut get_started = CustomButton::new("Get Started")
            .style(ButtonStyle::from_theme(&theme))
            .animated(animations);
        get_started.set_content(Some(Line::from(vec![
            Span::raw("➜ "),
            Span::styled("Get Started", Style::default().add_modifier(Modifier::BOLD)),
        ])));
        get_started.set_focused(true);

        Self {
            focus: WelcomeFocus::GetStarted,
            get_started,
            navigate_after_press: false,
            keymap: Keymap::welcome(),
            theme,
            entrances,
            elapsed: Duration::ZERO,
            rendered_until: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn focus(&self) -> WelcomeFocus {
        self.focus
    }

    /// `true` once every entrance effect has played out.
    #[must_use]
    pub fn entrance_finished(&self) -> bool {
        self.entrances.iter().all(|e| e.done)
    }

    /// Advances animations. Reports a deferred Get Started navigation.
    pub fn tick(&mut self, elapsed: Duration) -> WelcomeAction {
        self.elapsed = self.elapsed.saturating_add(elapsed);
        self.get_started.tick(elapsed);
        if self.navigate_after_press && !self.get_started.is_pressed() {
            self.navigate_after_press = false;
            return WelcomeAction::NavigateToLogin;
        }
        WelcomeAction::None
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> WelcomeAction {
        match self.keymap.resolve(key) {
            Some(Action::Activate) => match self.focus {
                WelcomeFocus::GetStarted => self.press_get_started(),
                WelcomeFocus::LogIn => WelcomeAction::NavigateToLogin,
            },
            Some(Action::OpenLogin) => WelcomeAction::NavigateToLogin,
            Some(Action::FocusNext | Action::FocusPrevious) => {
                self.focus = match self.focus {
                    WelcomeFocus::GetStarted => WelcomeFocus::LogIn,
                    WelcomeFocus::LogIn => WelcomeFocus::GetStarted,
                };
                self.get_started
                    .set_focused(self.focus == WelcomeFocus::GetStarted);
                WelcomeAction::None
            }
            Some(Action::Quit | Action::Back) => WelcomeAction::Quit,
            _ => WelcomeAction::None,
        }
    }

    fn press_get_started(&mut self) -> WelcomeAction {
        if !self.get_started.press() {
            return WelcomeAction::None;
        }
        if self.get_started.is_pressed() {
            self.navigate_after_press = true;
            WelcomeAction::None
        } else {
            WelcomeAction::NavigateToLogin
        }
    }

    fn icon(&self) -> Paragraph<'static> {
        Paragraph::new(Line::from(Span::styled(
            "⌂",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(self.theme.accent)),
        )
    }

    fn login_row(&self) -> Line<'static> {
        let link = if self.focus == WelcomeFocus::LogIn {
            self.theme.link_style.add_modifier(Modifier::REVERSED)
        } else {
            self.theme.link_style
        };
        Line::from(vec![
            Span::styled("☺ ", self.theme.focus_style),
            Span::styled("Do you have an account?", self.theme.muted_style),
            Span::raw(" "),
            Span::styled("Log in", link),
        ])
        .centered()
    }

    fn play_entrances(&mut self, sections: &[Rect], buf: &mut Buffer) {
        let previous = self.rendered_until;
        let now = self.elapsed;
        self.rendered_until = now;

        for (entrance, area) in self.entrances.iter_mut().zip(sections) {
            if entrance.done {
                continue;
            }
            let before = previous.saturating_sub(entrance.delay);
            let after = now.saturating_sub(entrance.delay);
            // Zero-length steps still draw the hidden start frame.
            let overflow = entrance
                .effect
                .process((after - before).into(), buf, *area);
            if overflow.is_some() {
                entrance.done = true;
            }
        }
    }
}

impl Widget for &mut WelcomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let [column] = Layout::horizontal([Constraint::Length(CONTENT_WIDTH.min(body.width))])
            .flex(Flex::Center)
            .areas(body);
        let [icon_row, title, subtitle, button, login] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .areas(column);

        let [icon] = Layout::horizontal([Constraint::Length(7)])
            .flex(Flex::Center)
            .areas(Rect {
                height: icon_row.height.saturating_sub(1),
                ..icon_row
            });
        self.icon().render(icon, buf);

        Paragraph::new(Line::from(Span::styled(TITLE, self.theme.title_style)))
            .alignment(Alignment::Center)
            .render(title, buf);

        Paragraph::new(Span::styled(
            SUBTITLE,
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(subtitle, buf);

        (&self.get_started).render(button, buf);

        Paragraph::new(self.login_row()).render(
            Rect {
                y: login.y + 1,
                height: 1,
                ..login
            },
            buf,
        );

        (&StatusBar::hints(&self.keymap.hints()).right("welcome")).render(footer, buf);

        self.play_entrances(&[icon, title, subtitle, button, login], buf);
    }
}
