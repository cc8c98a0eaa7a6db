//! Submission DTOs.

use std::time::Duration;

use crate::domain::entities::{Credentials, LoginAcknowledgement, SubmissionId};

/// Submission request data.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    /// Id issued by the login form.
    pub id: SubmissionId,
    /// Values at submit time.
    pub credentials: Credentials,
}

impl SubmitRequest {
    /// Creates new submit request.
    #[must_use]
    pub const fn new(id: SubmissionId, credentials: Credentials) -> Self {
        Self { id, credentials }
    }
}

/// Submission response data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    /// Id of the request this answers.
    pub id: SubmissionId,
    /// Dialog content for the user.
    pub acknowledgement: LoginAcknowledgement,
    /// Time spent in the simulated call.
    pub elapsed: Duration,
}
