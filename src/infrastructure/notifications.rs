//! Desktop mirror for in-app dialogs.

use notify_rust::Notification;

use crate::domain::ports::DialogPort;

/// Shows dialogs as desktop notifications when enabled.
#[derive(Debug, Clone, Default)]
pub struct DesktopNotificationService {
    enabled: bool,
}

impl DesktopNotificationService {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl DialogPort for DesktopNotificationService {
    fn show_message(&self, title: &str, body: &str) {
        if !self.enabled {
            return;
        }

        let title = title.to_string();
        let body = body.to_string();

        tokio::task::spawn_blocking(move || {
            if let Err(e) = Notification::new()
                .summary(&title)
                .body(&body)
                .appname("Onboard")
                .show()
            {
                tracing::warn!("Failed to show notification: {}", e);
            }
        });
    }
}
