use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Back,

    // Focus
    FocusNext,
    FocusPrevious,

    // Controls
    Activate,
    OpenLogin,
    TogglePasswordVisibility,

    // Dialogs
    DismissDialog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code,
            modifiers,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    pub fn plain(code: KeyCode, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(code, KeyModifiers::NONE, action, label)
    }

    pub fn ctrl(c: char, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL, action, label)
    }

    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Shift is ignored for keys whose code already encodes it.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let mut modifiers = key.modifiers;
        if matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        self.code == key.code && self.modifiers == modifiers
    }
}

/// Ordered set of bindings for one screen. First match wins.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    binds: Vec<Keybind>,
}

impl Keymap {
    #[must_use]
    pub fn new(binds: Vec<Keybind>) -> Self {
        Self { binds }
    }

    #[must_use]
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        self.binds
            .iter()
            .find(|bind| bind.matches(key))
            .map(|bind| bind.action)
    }

    /// Labels for the footer hint bar, one per action.
    #[must_use]
    pub fn hints(&self) -> Vec<(&str, Action)> {
        let mut seen = Vec::new();
        self.binds
            .iter()
            .filter(|bind| bind.visible_in_bar)
            .filter(|bind| {
                if seen.contains(&bind.action) {
                    false
                } else {
                    seen.push(bind.action);
                    true
                }
            })
            .map(|bind| (bind.label.as_ref(), bind.action))
            .collect()
    }

    #[must_use]
    pub fn splash() -> Self {
        Self::new(vec![Keybind::ctrl('c', Action::Quit, "Ctrl+C: Quit").hidden()])
    }

    #[must_use]
    pub fn welcome() -> Self {
        Self::new(vec![
            Keybind::plain(KeyCode::Enter, Action::Activate, "Enter: Select"),
            Keybind::plain(KeyCode::Tab, Action::FocusNext, "Tab: Next"),
            Keybind::plain(KeyCode::Down, Action::FocusNext, "Tab: Next").hidden(),
            Keybind::plain(KeyCode::BackTab, Action::FocusPrevious, "Shift+Tab").hidden(),
            Keybind::plain(KeyCode::Up, Action::FocusPrevious, "Up").hidden(),
            Keybind::plain(KeyCode::Char('l'), Action::OpenLogin, "l: Log in"),
            Keybind::plain(KeyCode::Char('q'), Action::Quit, "q: Quit"),
            Keybind::plain(KeyCode::Esc, Action::Quit, "Esc: Quit").hidden(),
            Keybind::ctrl('c', Action::Quit, "Ctrl+C: Quit").hidden(),
        ])
    }

    /// Plain characters are not bound here so they reach the text fields.
    #[must_use]
    pub fn login() -> Self {
        Self::new(vec![
            Keybind::plain(KeyCode::Enter, Action::Activate, "Enter: Next/Sign In"),
            Keybind::plain(KeyCode::Tab, Action::FocusNext, "Tab: Next"),
            Keybind::plain(KeyCode::Down, Action::FocusNext, "Tab: Next").hidden(),
            Keybind::plain(KeyCode::BackTab, Action::FocusPrevious, "Shift+Tab").hidden(),
            Keybind::plain(KeyCode::Up, Action::FocusPrevious, "Up").hidden(),
            Keybind::ctrl('t', Action::TogglePasswordVisibility, "Ctrl+T: Show/Hide"),
            Keybind::plain(KeyCode::Esc, Action::Back, "Esc: Back"),
            Keybind::ctrl('c', Action::Quit, "Ctrl+C: Quit"),
        ])
    }

    #[must_use]
    pub fn dialog() -> Self {
        Self::new(vec![
            Keybind::plain(KeyCode::Enter, Action::DismissDialog, "Enter: OK"),
            Keybind::plain(KeyCode::Esc, Action::DismissDialog, "Esc: OK").hidden(),
            Keybind::ctrl('c', Action::Quit, "Ctrl+C: Quit").hidden(),
        ])
    }
}
