//! Login screen.

use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tracing::debug;

use crate::application::{DeferredTask, SubmitResponse};
use crate::domain::entities::{FocusedField, LoginFormState};
use crate::domain::keybinding::{Action, Keymap};
use crate::domain::services::{LoginEffect, LoginEvent, Transition, reduce};
use crate::presentation::theme::{Theme, gradient_at};
use crate::presentation::widgets::{
    AutoCapitalize, ButtonStyle, CustomButton, InputField, InputFieldStyle, StatusBar, StatusLevel,
};

const SIGN_IN: &str = "Sign In";
const SIGNING_IN: &str = "Signing In...";
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME: Duration = Duration::from_millis(80);
const ERROR_FLASH: Duration = Duration::from_millis(600);
const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    SignIn,
    ForgotPassword,
    SignUp,
}

impl LoginFocus {
    const ORDER: [Self; 5] = [
        Self::Email,
        Self::Password,
        Self::SignIn,
        Self::ForgotPassword,
        Self::SignUp,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    const fn field(self) -> Option<FocusedField> {
        match self {
            Self::Email => Some(FocusedField::Email),
            Self::Password => Some(FocusedField::Password),
            Self::SignIn | Self::ForgotPassword | Self::SignUp => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Back,
    Quit,
    /// Effects the app must carry out.
    Effects(Vec<LoginEffect>),
}

/// Login screen UI. Owns the form state for as long as it is mounted.
pub struct LoginScreen {
    form: LoginFormState,
    email: InputField,
    password: InputField,
    sign_in: CustomButton,
    focus: LoginFocus,
    keymap: Keymap,
    theme: Theme,
    pending: Option<DeferredTask>,
    error_flash: Duration,
    spinner: Duration,
}

impl LoginScreen {
    #[must_use]
    pub fn new(theme: Theme, animations: bool) -> Self {
        let email = InputField::new()
            .leading_icon("✉")
            .placeholder("Email")
            .auto_capitalize(AutoCapitalize::None)
            .style(InputFieldStyle::from_theme(&theme));
        let password = InputField::new()
            .leading_icon("⚿")
            .trailing_icon("show")
            .placeholder("Password")
            .secure_entry(true)
            .style(InputFieldStyle::from_theme(&theme));
        let sign_in = CustomButton::new(SIGN_IN)
            .style(ButtonStyle::from_theme(&theme))
            .animated(animations);

        let mut screen = Self {
            form: LoginFormState::new(),
            email,
            password,
            sign_in,
            focus: LoginFocus::SignUp,
            keymap: Keymap::login(),
            theme,
            pending: None,
            error_flash: Duration::ZERO,
            spinner: Duration::ZERO,
        };
        screen.set_focus(LoginFocus::Email);
        screen
    }

    #[must_use]
    pub const fn form(&self) -> &LoginFormState {
        &self.form
    }

    #[must_use]
    pub const fn focus(&self) -> LoginFocus {
        self.focus
    }

    #[must_use]
    pub const fn is_error_flashing(&self) -> bool {
        !self.error_flash.is_zero()
    }

    #[must_use]
    pub const fn sign_in_button(&self) -> &CustomButton {
        &self.sign_in
    }

    #[must_use]
    pub const fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Keeps the task alive for as long as this screen is mounted.
    pub fn attach_submission(&mut self, task: DeferredTask) {
        self.pending = Some(task);
    }

    /// Feeds a finished submission back into the form.
    pub fn complete_submission(&mut self, response: SubmitResponse) -> Vec<LoginEffect> {
        self.pending = None;
        self.dispatch(LoginEvent::SubmitCompleted {
            id: response.id,
            acknowledgement: response.acknowledgement,
        })
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.sign_in.tick(elapsed);
        self.error_flash = self.error_flash.saturating_sub(elapsed);
        if self.form.is_submitting() {
            self.spinner = self.spinner.saturating_add(elapsed);
            self.sign_in.set_content(Some(self.busy_label()));
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> LoginAction {
        let effects = match self.keymap.resolve(key) {
            Some(Action::Back) => return LoginAction::Back,
            Some(Action::Quit) => return LoginAction::Quit,
            Some(Action::Activate) => self.activate(),
            Some(Action::FocusNext) => self.set_focus(self.focus.next()),
            Some(Action::FocusPrevious) => self.set_focus(self.focus.previous()),
            Some(Action::TogglePasswordVisibility) => {
                self.dispatch(LoginEvent::TogglePasswordVisibility)
            }
            Some(_) => Vec::new(),
            None => self.edit(key),
        };

        if effects.is_empty() {
            LoginAction::None
        } else {
            LoginAction::Effects(effects)
        }
    }

    fn activate(&mut self) -> Vec<LoginEffect> {
        match self.focus {
            LoginFocus::Email => self.set_focus(LoginFocus::Password),
            LoginFocus::Password => self.dispatch(LoginEvent::Submit),
            LoginFocus::SignIn => {
                if self.sign_in.press() {
                    self.dispatch(LoginEvent::Submit)
                } else {
                    Vec::new()
                }
            }
            LoginFocus::ForgotPassword => self.dispatch(LoginEvent::ForgotPassword),
            LoginFocus::SignUp => self.dispatch(LoginEvent::SignUp),
        }
    }

    fn edit(&mut self, key: &KeyEvent) -> Vec<LoginEffect> {
        match self.focus {
            LoginFocus::Email if self.email.handle_key(key) => {
                let value = self.email.value().to_string();
                self.dispatch(LoginEvent::EmailChanged(value))
            }
            LoginFocus::Password if self.password.handle_key(key) => {
                let value = self.password.value().to_string();
                self.dispatch(LoginEvent::PasswordChanged(value))
            }
            _ => Vec::new(),
        }
    }

    fn set_focus(&mut self, focus: LoginFocus) -> Vec<LoginEffect> {
        self.focus = focus;
        let email_changed = if focus == LoginFocus::Email {
            self.email.focus()
        } else {
            self.email.blur()
        };
        let password_changed = if focus == LoginFocus::Password {
            self.password.focus()
        } else {
            self.password.blur()
        };
        self.sign_in.set_focused(focus == LoginFocus::SignIn);

        if email_changed || password_changed {
            self.dispatch(LoginEvent::FocusChanged(focus.field()))
        } else {
            Vec::new()
        }
    }

    /// Runs the reducer. Focus-error effects are handled here, the rest are returned.
    fn dispatch(&mut self, event: LoginEvent) -> Vec<LoginEffect> {
        let Transition { state, effects } = reduce(std::mem::take(&mut self.form), event);
        self.form = state;
        self.sync_widgets();

        let mut remaining = Vec::with_capacity(effects.len());
        for effect in effects {
            if effect == LoginEffect::FocusError {
                debug!("Moving focus to validation message");
                self.error_flash = ERROR_FLASH;
            } else {
                remaining.push(effect);
            }
        }
        remaining
    }

    fn sync_widgets(&mut self) {
        let visible = self.form.password_visible;
        self.password.set_secure_entry(!visible);
        self.password
            .set_trailing_icon(Some(if visible { "hide" } else { "show" }.to_string()));

        let submitting = self.form.is_submitting();
        self.sign_in.set_disabled(submitting);
        if submitting {
            self.sign_in.set_title(SIGNING_IN);
            self.sign_in.set_content(Some(self.busy_label()));
        } else {
            self.spinner = Duration::ZERO;
            self.sign_in.set_title(SIGN_IN);
            self.sign_in.set_content(None);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn busy_label(&self) -> Line<'static> {
        let frame = (self.spinner.as_millis() / SPINNER_FRAME.as_millis()) as usize;
        Line::from(vec![
            Span::raw(SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]),
            Span::raw(" "),
            Span::raw(SIGNING_IN),
        ])
    }

    fn link_style(&self, focus: LoginFocus) -> Style {
        if self.focus == focus {
            self.theme.link_style.add_modifier(Modifier::REVERSED)
        } else {
            self.theme.link_style
        }
    }

    fn render_background(&self, area: Rect, buf: &mut Buffer) {
        let width = f32::from(area.width.max(1));
        let height = f32::from(area.height.max(1));
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let t = (f32::from(x - area.x) / width + f32::from(y - area.y) / height) / 2.0;
                buf[(x, y)]
                    .set_symbol(" ")
                    .set_bg(gradient_at(&self.theme.login_gradient, t));
            }
        }
    }

    fn render_card(&self, card: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.card_background));
        let inner = block.inner(card);
        block.render(card, buf);

        let [icon, title, error, email, password, forgot, _, button, sign_up] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(inner);

        Paragraph::new(Span::styled(
            "◈",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(icon, buf);

        Paragraph::new(Span::styled(SIGN_IN, self.theme.title_style))
            .alignment(Alignment::Center)
            .render(title, buf);

        // Reserved even when blank so the layout does not jump.
        let error_style = if self.is_error_flashing() {
            self.theme.error_style.add_modifier(Modifier::REVERSED)
        } else {
            self.theme.error_style
        };
        Paragraph::new(Span::styled(self.form.error_message(), error_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(error, buf);

        (&self.email).render(email, buf);
        (&self.password).render(password, buf);

        Paragraph::new(Span::styled(
            "Forgot Password?",
            self.link_style(LoginFocus::ForgotPassword),
        ))
        .alignment(Alignment::Right)
        .render(forgot, buf);

        (&self.sign_in).render(button, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Don't have an account? ", self.theme.muted_style),
            Span::styled("Sign Up", self.link_style(LoginFocus::SignUp)),
        ]))
        .alignment(Alignment::Center)
        .render(sign_up, buf);
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        self.render_background(body, buf);

        let [column] = Layout::horizontal([Constraint::Length(
            CARD_WIDTH.min(body.width.saturating_sub(2)),
        )])
        .flex(Flex::Center)
        .areas(body);
        let [card] = Layout::vertical([Constraint::Length(CARD_HEIGHT.min(body.height))])
            .flex(Flex::Center)
            .areas(column);
        self.render_card(card, buf);

        let level = if self.form.is_submitting() {
            StatusLevel::Busy
        } else {
            StatusLevel::Info
        };
        (&StatusBar::hints(&self.keymap.hints()).right("login").level(level)).render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Credentials, LoginAcknowledgement};
    use crate::domain::errors::ValidationError;
    use crate::domain::ports::HapticKind;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(screen: &mut LoginScreen, s: &str) {
        for c in s.chars() {
            screen.handle_key(&press(KeyCode::Char(c)));
        }
    }

    fn filled(email: &str, password: &str) -> LoginScreen {
        let mut screen = LoginScreen::new(Theme::default(), true);
        type_str(&mut screen, email);
        screen.handle_key(&press(KeyCode::Tab));
        type_str(&mut screen, password);
        screen
    }

    fn render_text(screen: &LoginScreen) -> String {
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_typing_updates_form() {
        let screen = filled("user@example.com", "secret");
        assert_eq!(screen.form().email, "user@example.com");
        assert_eq!(screen.form().password, "secret");
        assert_eq!(screen.form().focused_field, Some(FocusedField::Password));
    }

    #[test]
    fn test_focus_cycle() {
        let mut screen = LoginScreen::new(Theme::default(), false);
        let mut seen = vec![screen.focus()];
        for _ in 0..5 {
            screen.handle_key(&press(KeyCode::Tab));
            seen.push(screen.focus());
        }
        assert_eq!(
            seen,
            vec![
                LoginFocus::Email,
                LoginFocus::Password,
                LoginFocus::SignIn,
                LoginFocus::ForgotPassword,
                LoginFocus::SignUp,
                LoginFocus::Email,
            ]
        );

        screen.handle_key(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(screen.focus(), LoginFocus::SignUp);
        assert_eq!(screen.form().focused_field, None);
    }

    #[test]
    fn test_enter_on_email_moves_to_password() {
        let mut screen = LoginScreen::new(Theme::default(), false);
        type_str(&mut screen, "user@example.com");

        assert_eq!(screen.handle_key(&press(KeyCode::Enter)), LoginAction::None);
        assert_eq!(screen.focus(), LoginFocus::Password);
        assert_eq!(screen.form().focused_field, Some(FocusedField::Password));
        assert!(!screen.form().is_submitting());
        assert_eq!(screen.form().validation_error, None);
    }

    #[test]
    fn test_invalid_submit_shows_error_and_flashes() {
        let mut screen = filled("not-an-email", "secret");
        let action = screen.handle_key(&press(KeyCode::Enter));

        assert_eq!(
            action,
            LoginAction::Effects(vec![LoginEffect::Haptic(HapticKind::Error)])
        );
        assert_eq!(
            screen.form().validation_error,
            Some(ValidationError::InvalidEmail)
        );
        assert!(!screen.form().is_submitting());
        assert!(screen.is_error_flashing());
        assert!(render_text(&screen).contains("Please enter a valid email address."));

        screen.tick(ERROR_FLASH);
        assert!(!screen.is_error_flashing());
    }

    #[test]
    fn test_valid_submit_disables_button() {
        let mut screen = filled("user@example.com", "secret");
        let action = screen.handle_key(&press(KeyCode::Enter));

        let LoginAction::Effects(effects) = action else {
            panic!("expected effects");
        };
        assert_eq!(effects[0], LoginEffect::Haptic(HapticKind::Impact));
        assert!(matches!(
            &effects[1],
            LoginEffect::BeginSubmission { credentials, .. }
                if *credentials == Credentials::new("user@example.com", "secret")
        ));
        assert!(screen.sign_in_button().is_disabled());
        assert_eq!(screen.sign_in_button().title(), SIGNING_IN);

        assert_eq!(screen.handle_key(&press(KeyCode::Enter)), LoginAction::None);
    }

    #[test]
    fn test_completion_re_enables_and_shows_message() {
        let mut screen = filled("user@example.com", "secret");
        screen.handle_key(&press(KeyCode::Enter));
        let id = screen.form().submitting.expect("submitting");

        let acknowledgement =
            LoginAcknowledgement::for_credentials(&Credentials::new("user@example.com", "secret"));
        let effects = screen.complete_submission(SubmitResponse {
            id,
            acknowledgement: acknowledgement.clone(),
            elapsed: Duration::from_millis(1200),
        });

        assert_eq!(
            effects,
            vec![LoginEffect::ShowMessage {
                title: acknowledgement.title,
                body: acknowledgement.body,
            }]
        );
        assert!(!screen.sign_in_button().is_disabled());
        assert_eq!(screen.sign_in_button().title(), SIGN_IN);
    }

    #[test]
    fn test_toggle_visibility_twice() {
        let mut screen = filled("user@example.com", "secret");
        let toggle = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);

        screen.handle_key(&toggle);
        assert!(screen.form().password_visible);
        assert!(render_text(&screen).contains("secret"));

        screen.handle_key(&toggle);
        assert!(!screen.form().password_visible);
        assert!(!render_text(&screen).contains("secret"));
        assert_eq!(screen.form().password, "secret");
    }

    #[test]
    fn test_links_show_dialogs() {
        let mut screen = LoginScreen::new(Theme::default(), false);
        for _ in 0..3 {
            screen.handle_key(&press(KeyCode::Tab));
        }
        assert_eq!(screen.focus(), LoginFocus::ForgotPassword);
        let LoginAction::Effects(effects) = screen.handle_key(&press(KeyCode::Enter)) else {
            panic!("expected effects");
        };
        assert!(effects.contains(&LoginEffect::ShowMessage {
            title: "Forgot Password".to_string(),
            body: "Password reset flow goes here.".to_string(),
        }));

        screen.handle_key(&press(KeyCode::Down));
        let LoginAction::Effects(effects) = screen.handle_key(&press(KeyCode::Enter)) else {
            panic!("expected effects");
        };
        assert!(effects.contains(&LoginEffect::ShowMessage {
            title: "Sign Up".to_string(),
            body: "Sign up flow goes here.".to_string(),
        }));
    }

    #[test]
    fn test_escape_and_quit() {
        let mut screen = LoginScreen::new(Theme::default(), false);
        assert_eq!(screen.handle_key(&press(KeyCode::Esc)), LoginAction::Back);
        assert_eq!(
            screen.handle_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            LoginAction::Quit
        );
        // Plain characters go to the field, not to the app.
        assert_eq!(screen.handle_key(&press(KeyCode::Char('q'))), LoginAction::None);
        assert_eq!(screen.form().email, "q");
    }

    #[test]
    fn test_render_reserves_error_line() {
        let screen = LoginScreen::new(Theme::default(), false);
        let text = render_text(&screen);
        assert!(text.contains("Sign In"));
        assert!(text.contains("Forgot Password?"));
        assert!(text.contains("Sign Up"));
    }
}
