//! One-shot background work bound to the lifetime of its owner.

use std::future::Future;

use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to a spawned one-shot task.
///
/// Dropping the handle aborts the task if it has not finished, so whatever
/// the task would have done after its owner went away never happens.
#[derive(Debug)]
pub struct DeferredTask {
    label: &'static str,
    handle: JoinHandle<()>,
}

impl DeferredTask {
    /// Spawns `future` on the current tokio runtime.
    pub fn spawn<F>(label: &'static str, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        debug!(task = label, "Spawning deferred task");
        Self {
            label,
            handle: tokio::spawn(future),
        }
    }

    /// Returns whether the task ran to completion or was aborted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DeferredTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!(task = self.label, "Cancelling deferred task");
            self.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn delayed_send(tx: mpsc::UnboundedSender<u32>, value: u32) -> impl Future<Output = ()> {
        async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = tx.send(value);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_to_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = DeferredTask::spawn("test", delayed_send(tx, 7));

        assert_eq!(rx.recv().await, Some(7));
        tokio::task::yield_now().await;
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_prevents_effect() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = DeferredTask::spawn("test", delayed_send(tx, 7));

        tokio::time::advance(Duration::from_millis(50)).await;
        drop(task);
        tokio::time::advance(Duration::from_millis(200)).await;

        // The aborted task drops its sender, closing the channel without a value.
        assert_eq!(rx.recv().await, None);
    }
}
