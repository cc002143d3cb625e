//! Trait abstraction for the submission transport to enable mocking in tests

use crate::state::QuerySubmission;
use async_trait::async_trait;

use super::error::TransportError;

/// Response shape of the submission endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitResponse {
    pub success: bool,
}

/// Trait for submitting a contact query, enabling mocking in tests.
///
/// Implementations must eventually resolve to exactly one of a response or
/// an error; a real network implementation should add its own timeout
/// policy so the call cannot hang.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Deliver an assembled submission
    async fn submit(&self, submission: QuerySubmission) -> Result<SubmitResponse, TransportError>;
}
