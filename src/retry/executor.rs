//! Retry Executor Module
//!
//! Drives a fallible async operation to success or exhaustion under a
//! [`RetryPolicy`], sleeping cooperatively between attempts.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::retry::RetryPolicy;

// == Retried ==
/// A successful outcome together with the retry attempts it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retried<T> {
    /// The value produced by the operation
    pub value: T,
    /// Retry attempts consumed before success; 0 means first-try success
    pub attempts_used: u32,
}

// == Execute ==
/// Runs `operation` until it succeeds or the policy is exhausted.
///
/// The operation receives the 0-based attempt index. On success the result is
/// returned immediately with no further delay charged. On failure the executor
/// sleeps for the current delay perturbed by `± jitter` (clamped to zero),
/// multiplies the delay by the backoff factor, and tries again. The backoff
/// multiplication happens after every retry unconditionally, so the expected
/// delay grows geometrically even with jitter applied. After
/// `max_attempts + 1` total invocations the last error is propagated.
///
/// The sleep is `tokio::time::sleep`, so only the calling task waits.
pub async fn execute<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<Retried<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt: u32 = 0;
    let mut delay_ms = policy.initial_delay.as_millis() as f64;

    loop {
        match operation(attempt).await {
            Ok(value) => {
                return Ok(Retried {
                    value,
                    attempts_used: attempt,
                });
            }
            Err(err) => {
                attempt += 1;
                warn!("Attempt {} failed: {}", attempt, err);
                if attempt > policy.max_attempts {
                    return Err(err);
                }
                tokio::time::sleep(jittered(delay_ms, policy.jitter)).await;
                delay_ms *= policy.backoff_factor;
            }
        }
    }
}

/// Applies `± uniform(jitter)` to a base delay, clamped to zero.
fn jittered(delay_ms: f64, jitter: Duration) -> Duration {
    let base = delay_ms.round() as i64;
    let bound = jitter.as_millis() as i64;
    let perturbed = if bound > 0 {
        base + rand::thread_rng().gen_range(-bound..=bound)
    } else {
        base
    };
    Duration::from_millis(perturbed.max(0) as u64)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(
            max_attempts,
            Duration::from_millis(10),
            2.0,
            Duration::ZERO,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_first_try() {
        let policy = fast_policy(3);

        let result = execute(&policy, |_attempt| async { Ok::<_, String>("rows") }).await;

        let retried = result.unwrap();
        assert_eq!(retried.value, "rows");
        assert_eq!(retried.attempts_used, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_failing_invokes_exactly_n_plus_one_times() {
        let policy = fast_policy(3);
        let calls = Arc::new(AtomicU32::new(0));

        let c = calls.clone();
        let result = execute(&policy, move |_attempt| {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>("upstream unavailable")
            }
        })
        .await;

        assert_eq!(result.unwrap_err(), "upstream unavailable");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_max_attempts_means_single_try() {
        let policy = fast_policy(0);
        let calls = Arc::new(AtomicU32::new(0));

        let c = calls.clone();
        let result = execute(&policy, move |_attempt| {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>("boom")
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_attempt_k_reports_attempts_used() {
        let policy = fast_policy(3);
        let calls = Arc::new(AtomicU32::new(0));

        let c = calls.clone();
        let result = execute(&policy, move |attempt| {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                if attempt < 2 {
                    Err("not yet")
                } else {
                    Ok("rows")
                }
            }
        })
        .await;

        let retried = result.unwrap();
        assert_eq!(retried.value, "rows");
        assert_eq!(retried.attempts_used, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_operation_receives_attempt_index() {
        let policy = fast_policy(2);
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));

        let s = seen.clone();
        let _ = execute(&policy, move |attempt| {
            let s = s.clone();
            async move {
                s.lock().unwrap().push(attempt);
                Err::<(), _>("boom")
            }
        })
        .await;

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delays_grow_geometrically_without_jitter() {
        // 500ms initial, factor 2, three retries: 500 + 1000 + 2000 = 3500ms.
        // With paused time the sleeps auto-advance the clock exactly.
        let policy = RetryPolicy::new(3, Duration::from_millis(500), 2.0, Duration::ZERO);
        let start = tokio::time::Instant::now();

        let result = execute(&policy, |_attempt| async { Err::<(), _>("boom") }).await;

        assert!(result.is_err());
        assert_eq!(start.elapsed(), Duration::from_millis(3500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_charged_on_success() {
        let policy = RetryPolicy::new(3, Duration::from_millis(500), 2.0, Duration::ZERO);
        let start = tokio::time::Instant::now();

        let result = execute(&policy, |_attempt| async { Ok::<_, String>(()) }).await;

        assert!(result.is_ok());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_jittered_clamps_to_zero() {
        // Jitter far larger than the base delay must never go negative
        for _ in 0..100 {
            let d = jittered(10.0, Duration::from_millis(1000));
            assert!(d <= Duration::from_millis(1010));
        }
    }

    #[test]
    fn test_jittered_zero_jitter_is_deterministic() {
        assert_eq!(jittered(500.0, Duration::ZERO), Duration::from_millis(500));
    }
}
