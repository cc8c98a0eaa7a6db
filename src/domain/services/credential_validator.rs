//! Syntactic checks on login form input.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::errors::ValidationError;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"))
}

/// Returns whether `email` looks like `local@domain.tld`.
///
/// This is a sanity check on shape only. It says nothing about deliverability.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validates the login form. The email is checked before the password.
///
/// # Errors
/// Returns [`ValidationError::InvalidEmail`] when the email shape is wrong,
/// otherwise [`ValidationError::EmptyPassword`] when no password was entered.
pub fn validate(email: &str, password: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}
