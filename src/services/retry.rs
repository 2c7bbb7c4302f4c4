use std::fmt::{Debug, Display};
use std::future::Future;

use thiserror::Error;

/// Failure classification for a single attempt. Retryable failures feed the
/// bounded loop; fatal failures stop it immediately.
#[derive(Debug)]
pub enum Attempt<R, F> {
    Retryable(R),
    Fatal(F),
}

#[derive(Debug, Error)]
pub enum RetryError<R: Debug + Display, F: Debug + Display> {
    #[error("gave up after {attempts} attempts: {last}")]
    Exhausted { attempts: u32, last: R },

    #[error("{0}")]
    Fatal(F),
}

/// Runs `attempt` up to `max_attempts` times and returns the first success,
/// the first fatal error, or an explicit exhausted outcome carrying the last
/// retryable failure. The attempt callback receives the 1-based attempt
/// number.
pub async fn run_with_retries<T, R, F, A, Fut>(
    max_attempts: u32,
    mut attempt: A,
) -> Result<T, RetryError<R, F>>
where
    R: Debug + Display,
    F: Debug + Display,
    A: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, Attempt<R, F>>>,
{
    let attempts = max_attempts.max(1);
    let mut attempt_number = 1;
    loop {
        match attempt(attempt_number).await {
            Ok(value) => return Ok(value),
            Err(Attempt::Fatal(err)) => return Err(RetryError::Fatal(err)),
            Err(Attempt::Retryable(err)) => {
                if attempt_number >= attempts {
                    return Err(RetryError::Exhausted {
                        attempts,
                        last: err,
                    });
                }
                attempt_number += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type TestResult = Result<u32, RetryError<String, String>>;

    #[tokio::test]
    async fn first_success_ends_the_loop() {
        let calls = Cell::new(0u32);

        let result: TestResult = run_with_retries(3, |_| {
            calls.set(calls.get() + 1);
            async { Ok(7) }
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn retryable_failures_are_retried_until_success() {
        let calls = Cell::new(0u32);

        let result: TestResult = run_with_retries(3, |attempt| {
            calls.set(calls.get() + 1);
            async move {
                if attempt < 3 {
                    Err(Attempt::Retryable(format!("attempt {} failed", attempt)))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn exhaustion_reports_attempt_count_and_last_failure() {
        let calls = Cell::new(0u32);

        let result: TestResult = run_with_retries(3, |attempt| {
            calls.set(calls.get() + 1);
            async move { Err(Attempt::Retryable(format!("attempt {} failed", attempt))) }
        })
        .await;

        assert_eq!(calls.get(), 3);
        match result {
            Err(RetryError::Exhausted { attempts, last }) => {
                assert_eq!(attempts, 3);
                assert_eq!(last, "attempt 3 failed");
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fatal_failure_short_circuits() {
        let calls = Cell::new(0u32);

        let result: TestResult = run_with_retries(3, |_| {
            calls.set(calls.get() + 1);
            async { Err(Attempt::Fatal("transport down".to_string())) }
        })
        .await;

        assert_eq!(calls.get(), 1);
        assert!(matches!(result, Err(RetryError::Fatal(_))));
    }

    #[tokio::test]
    async fn zero_attempts_still_runs_once() {
        let calls = Cell::new(0u32);

        let result: TestResult = run_with_retries(0, |_| {
            calls.set(calls.get() + 1);
            async { Ok(1) }
        })
        .await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(calls.get(), 1);
    }
}
