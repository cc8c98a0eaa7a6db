//! Credential snapshot taken when the login form is submitted.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Email and password as they were at submit time.
///
/// The password is wiped from memory on drop and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Dialog content acknowledging a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAcknowledgement {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub body: String,
}

impl LoginAcknowledgement {
    const TITLE: &'static str = "Login Info";

    /// Builds the acknowledgement for a credential snapshot.
    #[must_use]
    pub fn for_credentials(credentials: &Credentials) -> Self {
        Self {
            title: Self::TITLE.to_string(),
            body: format!(
                "Email: {}\nPassword: {}",
                credentials.email(),
                credentials.password()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("user@example.com", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_acknowledgement_body() {
        let credentials = Credentials::new("user@example.com", "secret");
        let ack = LoginAcknowledgement::for_credentials(&credentials);
        assert_eq!(ack.title, "Login Info");
        assert_eq!(ack.body, "Email: user@example.com\nPassword: secret");
    }
}
