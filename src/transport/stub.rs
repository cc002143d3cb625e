//! Mocked submission transport
//!
//! Stands in for the real query endpoint: resolves after a fixed delay
//! with a success/failure draw. A production replacement must keep the
//! two-outcome contract and supply its own timeout policy.

use crate::config::TuiConfig;
use crate::state::QuerySubmission;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

use super::error::TransportError;
use super::traits::{SubmitResponse, SubmitTransport};

/// Simulated network delay
const DEFAULT_DELAY: Duration = Duration::from_millis(1500);
/// Probability that a submission succeeds
const DEFAULT_SUCCESS_RATE: f64 = 0.9;

/// Transport stub with a fixed delay and a configurable success rate
pub struct StubTransport {
    delay: Duration,
    success_rate: f64,
}

impl StubTransport {
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        Self {
            delay,
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }

    /// Build a stub honoring the user's config overrides
    pub fn from_config(config: &TuiConfig) -> Self {
        Self::new(
            config
                .stub_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_DELAY),
            config.stub_success_rate.unwrap_or(DEFAULT_SUCCESS_RATE),
        )
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_SUCCESS_RATE)
    }
}

#[async_trait]
impl SubmitTransport for StubTransport {
    async fn submit(&self, submission: QuerySubmission) -> Result<SubmitResponse, TransportError> {
        tokio::time::sleep(self.delay).await;

        match serde_json::to_string(&submission) {
            Ok(payload) => tracing::info!(%payload, "query submitted"),
            Err(err) => tracing::warn!("failed to encode submission payload: {err}"),
        }

        if rand::thread_rng().gen_bool(self.success_rate) {
            Ok(SubmitResponse { success: true })
        } else {
            Err(TransportError::Network)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactForm;

    fn submission() -> QuerySubmission {
        ContactForm::new().submission()
    }

    #[test]
    fn test_always_succeeds_at_rate_one() {
        let stub = StubTransport::new(Duration::from_millis(1), 1.0);
        for _ in 0..20 {
            let result = tokio_test::block_on(stub.submit(submission()));
            assert_eq!(result, Ok(SubmitResponse { success: true }));
        }
    }

    #[test]
    fn test_always_fails_at_rate_zero() {
        let stub = StubTransport::new(Duration::from_millis(1), 0.0);
        for _ in 0..20 {
            let result = tokio_test::block_on(stub.submit(submission()));
            assert_eq!(result, Err(TransportError::Network));
        }
    }

    #[test]
    fn test_out_of_range_rate_is_clamped() {
        let stub = StubTransport::new(Duration::from_millis(1), 7.5);
        // gen_bool would panic on an unclamped rate
        let result = tokio_test::block_on(stub.submit(submission()));
        assert_eq!(result, Ok(SubmitResponse { success: true }));
    }

    #[tokio::test]
    async fn test_delay_is_honored() {
        let stub = StubTransport::new(Duration::from_millis(50), 1.0);
        let started = std::time::Instant::now();
        let _ = stub.submit(submission()).await;
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_from_config_overrides() {
        let config = TuiConfig {
            stub_delay_ms: Some(10),
            stub_success_rate: Some(0.0),
            ..Default::default()
        };
        let stub = StubTransport::from_config(&config);
        assert_eq!(stub.delay, Duration::from_millis(10));
        assert_eq!(stub.success_rate, 0.0);
    }

    #[test]
    fn test_from_config_defaults() {
        let stub = StubTransport::from_config(&TuiConfig::default());
        assert_eq!(stub.delay, DEFAULT_DELAY);
        assert_eq!(stub.success_rate, DEFAULT_SUCCESS_RATE);
    }
}
