//! Dialog port definition.

/// Port for user-visible message dialogs.
#[cfg_attr(test, mockall::automock)]
pub trait DialogPort: Send + Sync {
    /// Shows a message with a title and a body.
    fn show_message(&self, title: &str, body: &str);
}
