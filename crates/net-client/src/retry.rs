//! Retry execution with exponential backoff
//!
//! Re-invokes an outcome-producing operation while it keeps failing at the
//! transport level. Application errors and successes are terminal: they are
//! returned to the caller without another attempt.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::outcome::NetworkOutcome;

/// Backoff policy for [`execute_with_retry`].
///
/// The delay sequence is deterministic: it starts at `initial_delay`, is
/// multiplied by `factor` after every failed attempt, and never exceeds
/// `max_delay`. No jitter is added.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one. At least 1.
    pub times: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound on the delay between attempts.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after every failed attempt. At least 1.
    pub factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            times: 10,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(1),
            factor: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Policy with a given attempt budget and default backoff parameters.
    pub fn new(times: u32) -> Self {
        Self { times: times.max(1), ..Default::default() }
    }

    /// Set the delay before the first retry.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the delay ceiling.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff multiplier. Values below 1 are clamped to 1.
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor.max(1.0);
        self
    }

    /// The delay slept before retry number `retry` (zero-based).
    ///
    /// Monotonically non-decreasing and clamped at `max_delay`: for
    /// `initial=100ms, factor=2.0, max=1s` the sequence is
    /// `100, 200, 400, 800, 1000, 1000, ...` milliseconds.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let mut delay = self.initial_delay;
        for _ in 0..retry {
            delay = self.grow(delay);
        }
        delay
    }

    fn grow(&self, current: Duration) -> Duration {
        current.mul_f64(self.factor.max(1.0)).min(self.max_delay)
    }
}

/// Invoke `operation` under `policy`, retrying only on
/// [`NetworkOutcome::TransportError`].
///
/// The operation runs at most `policy.times` times, strictly sequentially;
/// the outcome of the final permitted attempt is returned as-is. Each call
/// owns its delay state, so concurrent sequences for independent requests do
/// not interfere. Cancellation of the surrounding task takes effect at any
/// await point, during the call or during the backoff sleep, and surfaces no
/// partial result.
///
/// # Examples
/// ```no_run
/// use net_client::{execute_with_retry, NetworkOutcome, RetryPolicy};
///
/// async fn example() -> NetworkOutcome<String, String> {
///     execute_with_retry(&RetryPolicy::new(3), || async {
///         NetworkOutcome::Success("hello".to_string())
///     })
///     .await
/// }
/// ```
pub async fn execute_with_retry<S, E, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> NetworkOutcome<S, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = NetworkOutcome<S, E>>,
{
    let times = policy.times.max(1);
    let mut delay = policy.initial_delay;

    for attempt in 1..times {
        match operation().await {
            NetworkOutcome::TransportError(err) => {
                tracing::debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "transport failure, backing off before the next attempt"
                );
                sleep(delay).await;
                delay = policy.grow(delay);
            }
            terminal => return terminal,
        }
    }

    // Last permitted attempt, returned whatever its variant.
    operation().await
}
