//! Simulated login submission.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::application::dto::{SubmitRequest, SubmitResponse};
use crate::domain::entities::LoginAcknowledgement;

/// Stands in for the network call a real login would make.
///
/// There is no backend: after a fixed delay the entered values are
/// acknowledged back to the user.
#[derive(Debug, Clone, Copy)]
pub struct SubmitLoginUseCase {
    delay: Duration,
}

impl SubmitLoginUseCase {
    /// Default simulated latency.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1200);

    /// Creates new use case with the given latency.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the simulated latency.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits out the latency and acknowledges the request.
    pub async fn execute(&self, request: SubmitRequest) -> SubmitResponse {
        debug!(
            submission = %request.id,
            delay_ms = self.delay.as_millis(),
            "Simulating login submission"
        );

        let started = Instant::now();
        tokio::time::sleep(self.delay).await;

        let acknowledgement = LoginAcknowledgement::for_credentials(&request.credentials);

        info!(
            submission = %request.id,
            email = %request.credentials.email(),
            "Login submission acknowledged"
        );

        SubmitResponse {
            id: request.id,
            acknowledgement,
            elapsed: started.elapsed(),
        }
    }
}

impl Default for SubmitLoginUseCase {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}
