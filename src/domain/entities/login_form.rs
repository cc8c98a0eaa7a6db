//! Login form state.

use std::fmt;

use super::Credentials;
use crate::domain::errors::ValidationError;

/// Identifies one accepted submit within a single login screen mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(u64);

impl SubmissionId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Text field that currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusedField {
    /// Email field.
    Email,
    /// Password field.
    Password,
}

/// Everything the login screen remembers while it is mounted.
///
/// `submitting` and `validation_error` are never set at the same time.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    /// Entered email.
    pub email: String,
    /// Entered password.
    pub password: String,
    /// Whether the password is rendered in clear text.
    pub password_visible: bool,
    /// Error from the last rejected submit.
    pub validation_error: Option<ValidationError>,
    /// Pending submission, if any.
    pub submitting: Option<SubmissionId>,
    /// Field with focus, for highlighting.
    pub focused_field: Option<FocusedField>,
    issued_submissions: u64,
}

impl LoginFormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a submission is pending.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Returns the inline error text, empty when there is none.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.validation_error
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    /// Snapshots the current email and password.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    /// Allocates the id for the next accepted submit.
    pub(crate) fn issue_submission_id(&mut self) -> SubmissionId {
        self.issued_submissions += 1;
        SubmissionId::new(self.issued_submissions)
    }
}

impl fmt::Debug for LoginFormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginFormState")
            .field("email", &self.email)
            .field("password_len", &self.password.chars().count())
            .field("password_visible", &self.password_visible)
            .field("validation_error", &self.validation_error)
            .field("submitting", &self.submitting)
            .field("focused_field", &self.focused_field)
            .finish_non_exhaustive()
    }
}
