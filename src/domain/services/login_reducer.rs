//! Login form state machine.
//!
//! `Idle --Submit--> Validating --> (Rejected | Submitting --SubmitCompleted--> Idle)`.
//! Validation runs synchronously inside [`reduce`], so only `Idle` and
//! `Submitting` are observable between events. Side effects are returned as
//! [`LoginEffect`] values and carried out by the caller.

use super::credential_validator::validate;
use crate::domain::entities::{
    Credentials, FocusedField, LoginAcknowledgement, LoginFormState, SubmissionId,
};
use crate::domain::ports::HapticKind;

const FORGOT_PASSWORD_TITLE: &str = "Forgot Password";
const FORGOT_PASSWORD_BODY: &str = "Password reset flow goes here.";
const SIGN_UP_TITLE: &str = "Sign Up";
const SIGN_UP_BODY: &str = "Sign up flow goes here.";

/// Input to the login state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    /// Email text changed.
    EmailChanged(String),
    /// Password text changed.
    PasswordChanged(String),
    /// Eye control pressed.
    TogglePasswordVisibility,
    /// A text field gained focus, or focus left both fields.
    FocusChanged(Option<FocusedField>),
    /// Sign In pressed.
    Submit,
    /// The simulated delay for a submission elapsed.
    SubmitCompleted {
        /// Submission the result belongs to.
        id: SubmissionId,
        /// Dialog content to show.
        acknowledgement: LoginAcknowledgement,
    },
    /// Forgot Password link pressed.
    ForgotPassword,
    /// Sign Up link pressed.
    SignUp,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEffect {
    /// Give haptic feedback.
    Haptic(HapticKind),
    /// Move assistive focus to the error message.
    FocusError,
    /// Start the simulated submission for a credential snapshot.
    BeginSubmission {
        /// Id the completion must carry.
        id: SubmissionId,
        /// Values at submit time.
        credentials: Credentials,
    },
    /// Show a dialog.
    ShowMessage {
        /// Dialog title.
        title: String,
        /// Dialog body.
        body: String,
    },
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    /// State after the event.
    pub state: LoginFormState,
    /// Effects to perform, in order.
    pub effects: Vec<LoginEffect>,
}

/// Applies `event` to `state`.
pub fn reduce(mut state: LoginFormState, event: LoginEvent) -> Transition {
    let mut effects = Vec::new();

    match event {
        LoginEvent::EmailChanged(email) => state.email = email,
        LoginEvent::PasswordChanged(password) => state.password = password,
        LoginEvent::TogglePasswordVisibility => {
            state.password_visible = !state.password_visible;
            effects.push(LoginEffect::Haptic(HapticKind::Selection));
        }
        LoginEvent::FocusChanged(field) => state.focused_field = field,
        LoginEvent::Submit => submit(&mut state, &mut effects),
        LoginEvent::SubmitCompleted {
            id,
            acknowledgement,
        } => {
            if state.submitting == Some(id) {
                state.submitting = None;
                effects.push(LoginEffect::ShowMessage {
                    title: acknowledgement.title,
                    body: acknowledgement.body,
                });
            }
        }
        LoginEvent::ForgotPassword => {
            effects.push(LoginEffect::Haptic(HapticKind::Selection));
            effects.push(LoginEffect::ShowMessage {
                title: FORGOT_PASSWORD_TITLE.to_string(),
                body: FORGOT_PASSWORD_BODY.to_string(),
            });
        }
        LoginEvent::SignUp => {
            effects.push(LoginEffect::Haptic(HapticKind::Selection));
            effects.push(LoginEffect::ShowMessage {
                title: SIGN_UP_TITLE.to_string(),
                body: SIGN_UP_BODY.to_string(),
            });
        }
    }

    Transition { state, effects }
}

fn submit(state: &mut LoginFormState, effects: &mut Vec<LoginEffect>) {
    if state.is_submitting() {
        return;
    }

    state.validation_error = None;

    match validate(&state.email, &state.password) {
        Err(error) => {
            state.validation_error = Some(error);
            effects.push(LoginEffect::Haptic(HapticKind::Error));
            effects.push(LoginEffect::FocusError);
        }
        Ok(()) => {
            let id = state.issue_submission_id();
            state.submitting = Some(id);
            effects.push(LoginEffect::Haptic(HapticKind::Impact));
            effects.push(LoginEffect::BeginSubmission {
                id,
                credentials: state.credentials(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;

    fn filled(email: &str, password: &str) -> LoginFormState {
        let state = reduce(
            LoginFormState::new(),
            LoginEvent::EmailChanged(email.to_string()),
        )
        .state;
        reduce(state, LoginEvent::PasswordChanged(password.to_string())).state
    }

    fn begin_id(effects: &[LoginEffect]) -> Option<SubmissionId> {
        effects.iter().find_map(|effect| match effect {
            LoginEffect::BeginSubmission { id, .. } => Some(*id),
            _ => None,
        })
    }

    fn complete(state: LoginFormState, id: SubmissionId) -> Transition {
        let acknowledgement = LoginAcknowledgement::for_credentials(&state.credentials());
        reduce(
            state,
            LoginEvent::SubmitCompleted {
                id,
                acknowledgement,
            },
        )
    }

    #[test]
    fn test_invalid_email_is_rejected_without_submitting() {
        let t = reduce(filled("not-an-email", "secret"), LoginEvent::Submit);

        assert_eq!(t.state.validation_error, Some(ValidationError::InvalidEmail));
        assert_eq!(t.state.error_message(), "Please enter a valid email address.");
        assert!(!t.state.is_submitting());
        assert_eq!(
            t.effects,
            vec![
                LoginEffect::Haptic(HapticKind::Error),
                LoginEffect::FocusError
            ]
        );
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let t = reduce(filled("user@example.com", ""), LoginEvent::Submit);

        assert_eq!(t.state.validation_error, Some(ValidationError::EmptyPassword));
        assert_eq!(t.state.error_message(), "Please enter your password.");
        assert!(!t.state.is_submitting());
        assert!(begin_id(&t.effects).is_none());
    }

    #[test]
    fn test_valid_submit_enters_submitting_with_snapshot() {
        let t = reduce(filled("user@example.com", "secret"), LoginEvent::Submit);

        assert!(t.state.is_submitting());
        assert_eq!(t.state.validation_error, None);
        assert_eq!(t.effects[0], LoginEffect::Haptic(HapticKind::Impact));
        match &t.effects[1] {
            LoginEffect::BeginSubmission { id, credentials } => {
                assert_eq!(Some(*id), t.state.submitting);
                assert_eq!(credentials.email(), "user@example.com");
                assert_eq!(credentials.password(), "secret");
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn test_error_cleared_by_next_successful_submit() {
        let rejected = reduce(filled("bad", "secret"), LoginEvent::Submit).state;
        assert!(rejected.validation_error.is_some());

        let fixed = reduce(rejected, LoginEvent::EmailChanged("user@example.com".into())).state;
        assert!(fixed.validation_error.is_some());

        let t = reduce(fixed, LoginEvent::Submit);
        assert_eq!(t.state.validation_error, None);
        assert!(t.state.is_submitting());
    }

    #[test]
    fn test_error_replaced_on_next_failed_submit() {
        let rejected = reduce(filled("bad", ""), LoginEvent::Submit).state;
        assert_eq!(rejected.validation_error, Some(ValidationError::InvalidEmail));

        let fixed = reduce(rejected, LoginEvent::EmailChanged("user@example.com".into())).state;
        let t = reduce(fixed, LoginEvent::Submit);
        assert_eq!(t.state.validation_error, Some(ValidationError::EmptyPassword));
    }

    #[test]
    fn test_resubmit_while_submitting_is_ignored() {
        let first = reduce(filled("user@example.com", "secret"), LoginEvent::Submit);
        let pending = first.state.submitting;

        let second = reduce(first.state, LoginEvent::Submit);
        assert!(second.effects.is_empty());
        assert_eq!(second.state.submitting, pending);
    }

    #[test]
    fn test_completion_returns_to_idle_with_one_message() {
        let started = reduce(filled("user@example.com", "secret"), LoginEvent::Submit);
        let id = begin_id(&started.effects).unwrap();

        let t = complete(started.state, id);
        assert!(!t.state.is_submitting());
        assert_eq!(
            t.effects,
            vec![LoginEffect::ShowMessage {
                title: "Login Info".to_string(),
                body: "Email: user@example.com\nPassword: secret".to_string(),
            }]
        );
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let started = reduce(filled("user@example.com", "secret"), LoginEvent::Submit);
        let id = begin_id(&started.effects).unwrap();
        let idle = complete(started.state, id).state;

        let t = complete(idle, id);
        assert!(t.effects.is_empty());

        let restarted = reduce(t.state, LoginEvent::Submit);
        let new_id = begin_id(&restarted.effects).unwrap();
        assert_ne!(new_id, id);

        let t = complete(restarted.state, id);
        assert!(t.effects.is_empty());
        assert_eq!(t.state.submitting, Some(new_id));
    }

    #[test]
    fn test_snapshot_ignores_later_typing() {
        let started = reduce(filled("user@example.com", "secret"), LoginEvent::Submit);
        let (id, credentials) = match &started.effects[1] {
            LoginEffect::BeginSubmission { id, credentials } => (*id, credentials.clone()),
            other => panic!("unexpected effect {other:?}"),
        };

        let edited = reduce(started.state, LoginEvent::PasswordChanged("changed".into())).state;
        let acknowledgement = LoginAcknowledgement::for_credentials(&credentials);
        let t = reduce(
            edited,
            LoginEvent::SubmitCompleted {
                id,
                acknowledgement,
            },
        );

        assert_eq!(
            t.effects,
            vec![LoginEffect::ShowMessage {
                title: "Login Info".to_string(),
                body: "Email: user@example.com\nPassword: secret".to_string(),
            }]
        );
    }

    #[test]
    fn test_toggle_visibility_twice_restores_masking() {
        let state = filled("user@example.com", "secret");

        let once = reduce(state, LoginEvent::TogglePasswordVisibility);
        assert!(once.state.password_visible);
        assert_eq!(once.state.password, "secret");
        assert_eq!(once.effects, vec![LoginEffect::Haptic(HapticKind::Selection)]);

        let twice = reduce(once.state, LoginEvent::TogglePasswordVisibility);
        assert!(!twice.state.password_visible);
        assert_eq!(twice.state.password, "secret");
    }

    #[test]
    fn test_focus_tracking() {
        let t = reduce(
            LoginFormState::new(),
            LoginEvent::FocusChanged(Some(FocusedField::Password)),
        );
        assert_eq!(t.state.focused_field, Some(FocusedField::Password));
        assert!(t.effects.is_empty());

        let t = reduce(t.state, LoginEvent::FocusChanged(None));
        assert_eq!(t.state.focused_field, None);
    }

    #[test]
    fn test_stub_links_show_dialogs() {
        let t = reduce(LoginFormState::new(), LoginEvent::ForgotPassword);
        assert_eq!(
            t.effects,
            vec![
                LoginEffect::Haptic(HapticKind::Selection),
                LoginEffect::ShowMessage {
                    title: "Forgot Password".to_string(),
                    body: "Password reset flow goes here.".to_string(),
                }
            ]
        );

        let t = reduce(t.state, LoginEvent::SignUp);
        assert!(matches!(
            &t.effects[1],
            LoginEffect::ShowMessage { title, .. } if title == "Sign Up"
        ));
    }

    #[test]
    fn test_submitting_and_error_never_coexist() {
        let events = [
            LoginEvent::Submit,
            LoginEvent::EmailChanged("user@example.com".into()),
            LoginEvent::Submit,
            LoginEvent::PasswordChanged("pw".into()),
            LoginEvent::Submit,
            LoginEvent::Submit,
            LoginEvent::EmailChanged("broken".into()),
            LoginEvent::Submit,
        ];

        let mut state = LoginFormState::new();
        for event in events {
            state = reduce(state, event).state;
            assert!(!(state.is_submitting() && state.validation_error.is_some()));
        }
    }
}
