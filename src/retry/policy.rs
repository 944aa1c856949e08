//! Retry Policy Module
//!
//! Immutable per-invocation knobs for the retry executor.

use std::time::Duration;

// == Retry Policy ==
/// Parameters governing one retry sequence.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum retry attempts after the first try. 0 means exactly one attempt.
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Multiplier applied to the delay after each failed attempt, clamped to >= 1
    pub backoff_factor: f64,
    /// Bound for the uniform random perturbation added to each delay
    pub jitter: Duration,
}

impl RetryPolicy {
    // == Constructor ==
    /// Creates a new policy. A backoff factor below 1 is clamped to 1 so the
    /// delay never shrinks between attempts.
    pub fn new(
        max_attempts: u32,
        initial_delay: Duration,
        backoff_factor: f64,
        jitter: Duration,
    ) -> Self {
        Self {
            max_attempts,
            initial_delay,
            backoff_factor: backoff_factor.max(1.0),
            jitter,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            backoff_factor: 1.7,
            jitter: Duration::ZERO,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_default() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.initial_delay, Duration::from_millis(500));
        assert_eq!(policy.backoff_factor, 1.7);
        assert_eq!(policy.jitter, Duration::ZERO);
    }

    #[test]
    fn test_backoff_factor_clamped() {
        let policy = RetryPolicy::new(1, Duration::from_millis(100), 0.5, Duration::ZERO);
        assert_eq!(policy.backoff_factor, 1.0);
    }
}
