use std::time::Instant;

/// A modal message waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub body: String,
    pub created_at: Instant,
}

impl Dialog {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            created_at: Instant::now(),
        }
    }

    /// Body split into display lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_creation() {
        let d = Dialog::new("Login Info", "Email: a@b.c\nPassword: x");
        assert_eq!(d.title, "Login Info");
        assert_eq!(d.lines().collect::<Vec<_>>(), vec!["Email: a@b.c", "Password: x"]);
    }
}
