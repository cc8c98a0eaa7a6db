//! Login form validation errors.

use thiserror::Error;

/// Reasons a login form is rejected before anything is submitted.
///
/// The `Display` text is the inline message shown under the form title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email does not have a `local@domain.tld` shape.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Password field is empty.
    #[error("Please enter your password.")]
    EmptyPassword,
}

impl ValidationError {
    /// Returns the form field the error refers to.
    #[must_use]
    pub const fn field(self) -> crate::domain::entities::FocusedField {
        match self {
            Self::InvalidEmail => crate::domain::entities::FocusedField::Email,
            Self::EmptyPassword => crate::domain::entities::FocusedField::Password,
        }
    }
}
