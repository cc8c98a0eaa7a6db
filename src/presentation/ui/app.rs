//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::application::{
    DeferredTask, DialogManager, SubmitLoginUseCase, SubmitRequest, SubmitResponse,
};
use crate::domain::keybinding::{Action as KeyAction, Keymap};
use crate::domain::ports::{DialogPort, HapticPort};
use crate::domain::services::LoginEffect;
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    DialogPopup, LoginAction, MountId, Route, Router, Screen, SplashScreen, WelcomeAction,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug)]
enum Action {
    SubmissionFinished {
        mount: MountId,
        response: SubmitResponse,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Splash,
    Running,
    Exiting,
}

enum CurrentScreen {
    Splash(SplashScreen),
    Main(Router),
}

pub struct App {
    state: AppState,
    screen: CurrentScreen,
    theme: Theme,
    animations: bool,
    dialogs: DialogManager,
    submit_use_case: SubmitLoginUseCase,
    dialog_port: Arc<dyn DialogPort>,
    haptic_port: Arc<dyn HapticPort>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    splash_keymap: Keymap,
    dialog_keymap: Keymap,
}

impl App {
    #[must_use]
    pub fn new(
        config: &AppConfig,
        dialog_port: Arc<dyn DialogPort>,
        haptic_port: Arc<dyn HapticPort>,
    ) -> Self {
        let theme = Theme::new(&config.theme.accent_color);
        let animations = config.ui.enable_animations;
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let (state, screen) = if config.ui.show_splash {
            (AppState::Splash, CurrentScreen::Splash(SplashScreen::new(theme)))
        } else {
            (AppState::Running, CurrentScreen::Main(Router::new(theme, animations)))
        };

        Self {
            state,
            screen,
            theme,
            animations,
            dialogs: DialogManager::new(),
            submit_use_case: SubmitLoginUseCase::new(config.login.submit_delay()),
            dialog_port,
            haptic_port,
            action_tx,
            action_rx,
            splash_keymap: Keymap::splash(),
            dialog_keymap: Keymap::dialog(),
        }
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(
            splash = self.state == AppState::Splash,
            submit_delay_ms = self.submit_use_case.delay().as_millis(),
            "Starting event loop"
        );

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);
        animation_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_tick = Instant::now();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    let now = Instant::now();
                    self.tick(now - last_tick);
                    last_tick = now;
                    terminal.draw(|frame| self.render(frame))?;
                }

                event = terminal_events.next() => {
                    match event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(&event) == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.state = AppState::Exiting,
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        EventHandler::key_press(event).map_or(EventResult::Continue, |key| self.handle_key(&key))
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if self.state == AppState::Splash {
            if self.splash_keymap.resolve(key) == Some(KeyAction::Quit) {
                return EventResult::Exit;
            }
            debug!(code = ?key.code, "Ignoring input during splash");
            return EventResult::Continue;
        }

        if self.dialogs.is_open() {
            match self.dialog_keymap.resolve(key) {
                Some(KeyAction::DismissDialog) => {
                    self.dialogs.dismiss();
                }
                Some(KeyAction::Quit) => return EventResult::Exit,
                _ => {}
            }
            return EventResult::Continue;
        }

        let CurrentScreen::Main(router) = &mut self.screen else {
            return EventResult::Continue;
        };
        let mount = router.current_mount();

        let effects = match router.current_mut() {
            Screen::Welcome(welcome) => match welcome.handle_key(key) {
                WelcomeAction::NavigateToLogin => {
                    router.navigate(Route::Login);
                    return EventResult::Continue;
                }
                WelcomeAction::Quit => return EventResult::Exit,
                WelcomeAction::None => return EventResult::Continue,
            },
            Screen::Login(login) => match login.handle_key(key) {
                LoginAction::Back => {
                    router.back();
                    return EventResult::Continue;
                }
                LoginAction::Quit => return EventResult::Exit,
                LoginAction::Effects(effects) => effects,
                LoginAction::None => return EventResult::Continue,
            },
        };

        self.apply_login_effects(mount, effects);
        EventResult::Continue
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SubmissionFinished { mount, response } => {
                let CurrentScreen::Main(router) = &mut self.screen else {
                    return;
                };
                let Some(login) = router.login_mut(mount) else {
                    debug!(
                        mount = %mount,
                        submission = %response.id,
                        "Dropping completion for unmounted login screen"
                    );
                    return;
                };

                info!(
                    submission = %response.id,
                    elapsed_ms = response.elapsed.as_millis(),
                    "Submission finished"
                );
                let effects = login.complete_submission(response);
                self.apply_login_effects(mount, effects);
            }
        }
    }

    fn tick(&mut self, elapsed: Duration) {
        match &mut self.screen {
            CurrentScreen::Splash(splash) => {
                if splash.tick(elapsed) {
                    self.finish_splash();
                }
            }
            CurrentScreen::Main(router) => {
                let navigate = match router.current_mut() {
                    Screen::Welcome(welcome) => {
                        welcome.tick(elapsed) == WelcomeAction::NavigateToLogin
                    }
                    Screen::Login(login) => {
                        login.tick(elapsed);
                        false
                    }
                };
                if navigate {
                    router.navigate(Route::Login);
                }
            }
        }
    }

    fn finish_splash(&mut self) {
        info!("Splash finished, mounting navigation stack");
        self.state = AppState::Running;
        self.screen = CurrentScreen::Main(Router::new(self.theme, self.animations));
    }

    fn apply_login_effects(&mut self, mount: MountId, effects: Vec<LoginEffect>) {
        for effect in effects {
            match effect {
                LoginEffect::Haptic(kind) => self.haptic_port.notify(kind),
                LoginEffect::BeginSubmission { id, credentials } => {
                    self.begin_submission(mount, SubmitRequest::new(id, credentials));
                }
                LoginEffect::ShowMessage { title, body } => self.show_message(&title, &body),
                // Consumed by the login screen.
                LoginEffect::FocusError => {}
            }
        }
    }

    fn begin_submission(&mut self, mount: MountId, request: SubmitRequest) {
        info!(mount = %mount, submission = %request.id, "Submission started");

        let use_case = self.submit_use_case;
        let tx = self.action_tx.clone();
        let task = DeferredTask::spawn("login-submit", async move {
            let response = use_case.execute(request).await;
            let _ = tx.send(Action::SubmissionFinished { mount, response });
        });

        if let CurrentScreen::Main(router) = &mut self.screen
            && let Some(login) = router.login_mut(mount)
        {
            login.attach_submission(task);
        }
    }

    fn show_message(&mut self, title: &str, body: &str) {
        debug!(title, "Showing dialog");
        self.dialogs.show(title, body);
        self.dialog_port.show_message(title, body);
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match &mut self.screen {
            CurrentScreen::Splash(splash) => frame.render_widget(&*splash, area),
            CurrentScreen::Main(router) => match router.current_mut() {
                Screen::Welcome(welcome) => frame.render_widget(welcome, area),
                Screen::Login(login) => frame.render_widget(&**login, area),
            },
        }

        if let Some(dialog) = self.dialogs.current() {
            frame.render_widget(
                DialogPopup::new(dialog, &self.theme).queued(self.dialogs.len() - 1),
                area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::HapticKind;
    use crate::domain::ports::mocks::{MockDialogPort, MockHapticPort};
    use crate::presentation::ui::{LoginScreen, splash_screen::SplashSequence};
    use crossterm::event::{KeyCode, KeyModifiers};
    use mockall::predicate::eq;

    fn config(show_splash: bool) -> AppConfig {
        let mut config = AppConfig::default();
        config.ui.show_splash = show_splash;
        config.ui.enable_animations = false;
        config
    }

    fn app(show_splash: bool, dialog: MockDialogPort, haptics: MockHapticPort) -> App {
        App::new(&config(show_splash), Arc::new(dialog), Arc::new(haptics))
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn open_filled_login(app: &mut App, email: &str, password: &str) {
        press(app, KeyCode::Char('l'));
        type_str(app, email);
        press(app, KeyCode::Tab);
        type_str(app, password);
    }

    fn route(app: &App) -> Option<Route> {
        match &app.screen {
            CurrentScreen::Main(router) => Some(router.current_route()),
            CurrentScreen::Splash(_) => None,
        }
    }

    fn login(app: &mut App) -> &mut LoginScreen {
        let CurrentScreen::Main(router) = &mut app.screen else {
            panic!("splash still showing");
        };
        let mount = router.current_mount();
        router.login_mut(mount).expect("login screen mounted")
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_submit_confirms_once_after_delay() {
        let mut dialog = MockDialogPort::new();
        dialog
            .expect_show_message()
            .withf(|title, body| {
                title == "Login Info" && body == "Email: user@example.com\nPassword: secret"
            })
            .times(1)
            .return_const(());
        let mut haptics = MockHapticPort::new();
        haptics
            .expect_notify()
            .with(eq(HapticKind::Impact))
            .times(1)
            .return_const(());
        let mut app = app(false, dialog, haptics);

        open_filled_login(&mut app, "user@example.com", "secret");
        let started = Instant::now();
        press(&mut app, KeyCode::Enter);
        assert!(login(&mut app).sign_in_button().is_disabled());

        // Edits after submit do not change the acknowledged values.
        type_str(&mut app, "!!");

        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(1100)).await;
        tokio::task::yield_now().await;
        assert!(app.action_rx.try_recv().is_err());

        let action = app.action_rx.recv().await.expect("completion");
        assert!(started.elapsed() >= SubmitLoginUseCase::DEFAULT_DELAY);
        app.handle_action(action);

        assert_eq!(app.dialogs.len(), 1);
        assert!(!login(&mut app).sign_in_button().is_disabled());
        assert!(!login(&mut app).has_pending_submission());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submit_never_confirms() {
        let mut dialog = MockDialogPort::new();
        dialog.expect_show_message().times(0);
        let mut haptics = MockHapticPort::new();
        haptics
            .expect_notify()
            .with(eq(HapticKind::Error))
            .times(1)
            .return_const(());
        let mut app = app(false, dialog, haptics);

        open_filled_login(&mut app, "user@example", "secret");
        press(&mut app, KeyCode::Enter);
        assert!(!login(&mut app).form().is_submitting());

        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(app.action_rx.try_recv().is_err());
        assert!(!app.dialogs.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_while_submitting_drops_result() {
        let mut dialog = MockDialogPort::new();
        dialog.expect_show_message().times(0);
        let mut haptics = MockHapticPort::new();
        haptics.expect_notify().times(1).return_const(());
        let mut app = app(false, dialog, haptics);

        open_filled_login(&mut app, "user@example.com", "secret");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(route(&app), Some(Route::Welcome));

        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert!(app.action_rx.try_recv().is_err());
        assert!(!app.dialogs.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_for_old_mount_is_ignored() {
        let mut dialog = MockDialogPort::new();
        dialog.expect_show_message().times(0);
        let mut app = app(false, dialog, MockHapticPort::new());
        press(&mut app, KeyCode::Char('l'));

        let response = SubmitLoginUseCase::new(Duration::ZERO)
            .execute(SubmitRequest::new(
                crate::domain::entities::SubmissionId::new(1),
                crate::domain::entities::Credentials::new("a@b.co", "pw"),
            ))
            .await;
        app.handle_action(Action::SubmissionFinished {
            mount: MountId::new(),
            response,
        });

        assert!(!app.dialogs.is_open());
    }

    #[tokio::test]
    async fn test_dialog_captures_input_until_dismissed() {
        let mut dialog = MockDialogPort::new();
        dialog
            .expect_show_message()
            .withf(|title, _| title == "Sign Up")
            .times(1)
            .return_const(());
        let mut haptics = MockHapticPort::new();
        haptics
            .expect_notify()
            .with(eq(HapticKind::Selection))
            .times(1)
            .return_const(());
        let mut app = app(false, dialog, haptics);

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        assert!(app.dialogs.is_open());

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.dialogs.is_open());
        assert_eq!(route(&app), Some(Route::Login));
        assert_eq!(login(&mut app).form().email, "");
    }

    #[test]
    fn test_splash_ignores_input_then_finishes() {
        let mut app = app(true, MockDialogPort::new(), MockHapticPort::new());
        assert_eq!(app.state, AppState::Splash);

        for code in [KeyCode::Enter, KeyCode::Char('l'), KeyCode::Esc, KeyCode::Char('q')] {
            assert_eq!(press(&mut app, code), EventResult::Continue);
        }
        assert_eq!(route(&app), None);

        app.tick(SplashSequence::total());
        assert_eq!(app.state, AppState::Running);
        assert_eq!(route(&app), Some(Route::Welcome));

        press(&mut app, KeyCode::Char('l'));
        app.tick(SplashSequence::total());
        assert_eq!(route(&app), Some(Route::Login));
    }

    #[test]
    fn test_get_started_navigates_after_press_feedback() {
        let mut config = config(false);
        config.ui.enable_animations = true;
        let mut app = App::new(
            &config,
            Arc::new(MockDialogPort::new()),
            Arc::new(MockHapticPort::new()),
        );

        press(&mut app, KeyCode::Enter);
        assert_eq!(route(&app), Some(Route::Welcome));

        app.tick(Duration::from_millis(33));
        assert_eq!(route(&app), Some(Route::Welcome));
        app.tick(crate::presentation::widgets::PRESS_FEEDBACK);
        assert_eq!(route(&app), Some(Route::Login));
    }

    #[test]
    fn test_ctrl_c_quits_during_splash() {
        let mut app = app(true, MockDialogPort::new(), MockHapticPort::new());
        let result = app.handle_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(result, EventResult::Exit);
    }

    #[test]
    fn test_welcome_quit() {
        let mut app = app(false, MockDialogPort::new(), MockHapticPort::new());
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Exit);
    }
}
