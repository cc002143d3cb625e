//! Submission transport errors

use thiserror::Error;

/// Failures a transport call can surface. All of them are recoverable by
/// resubmitting; none propagate beyond the page banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The (simulated) network call failed
    #[error("network error")]
    Network,
}
