use std::collections::VecDeque;

use tracing::debug;

use crate::domain::Dialog;

/// Queue of modal dialogs. Only the front one is shown.
#[derive(Debug, Default)]
pub struct DialogManager {
    queue: VecDeque<Dialog>,
}

impl DialogManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, title: impl Into<String>, body: impl Into<String>) {
        let dialog = Dialog::new(title, body);
        debug!(title = %dialog.title, queued = self.queue.len(), "Queueing dialog");
        self.queue.push_back(dialog);
    }

    /// Closes the visible dialog and reveals the next one.
    pub fn dismiss(&mut self) -> Option<Dialog> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Dialog> {
        self.queue.front()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
