// src/app/retry.rs
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::error::FetchError;

/// Retry-on-connection-error policy for the TMDb calls.
///
/// Only [`FetchError::Connection`] is retried; every other error is returned on
/// the attempt that produced it. `max_attempts` counts the first try, so the
/// default of 2 means "one immediate retry".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self { max_attempts, delay }
    }

    /// Run `op`, sleeping `delay` and calling `on_retry(attempt, &err)` before each retry.
    pub fn run<T, F, R>(&self, mut op: F, mut on_retry: R) -> Result<T, FetchError>
    where
        F: FnMut() -> Result<T, FetchError>,
        R: FnMut(u32, &FetchError),
    {
        let max = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match op() {
                Ok(v) => return Ok(v),
                Err(e) if e.is_connection() && attempt < max => {
                    warn!("attempt {attempt}/{max} failed: {e}; retrying in {:?}", self.delay);
                    on_retry(attempt, &e);
                    if !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Instant;

    const FAST: RetryPolicy = RetryPolicy::new(2, Duration::ZERO);

    fn conn() -> FetchError {
        FetchError::Connection("refused".into())
    }

    #[test]
    fn first_success_makes_one_call() {
        let calls = Cell::new(0);
        let out = FAST.run(
            || {
                calls.set(calls.get() + 1);
                Ok::<_, FetchError>(7)
            },
            |_, _| panic!("no retry expected"),
        );
        assert_eq!(out, Ok(7));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn connection_error_is_retried_once() {
        let calls = Cell::new(0);
        let retries = Cell::new(0);
        let out = FAST.run(
            || {
                calls.set(calls.get() + 1);
                if calls.get() == 1 { Err(conn()) } else { Ok("second") }
            },
            |_, _| retries.set(retries.get() + 1),
        );
        assert_eq!(out, Ok("second"));
        assert_eq!(calls.get(), 2);
        assert_eq!(retries.get(), 1);
    }

    #[test]
    fn two_connection_errors_give_up() {
        let calls = Cell::new(0);
        let out: Result<(), _> = FAST.run(
            || {
                calls.set(calls.get() + 1);
                Err(conn())
            },
            |_, _| {},
        );
        assert_eq!(out, Err(conn()));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn other_errors_are_not_retried() {
        let calls = Cell::new(0);
        let out: Result<(), _> = FAST.run(
            || {
                calls.set(calls.get() + 1);
                Err(FetchError::Timeout("15s".into()))
            },
            |_, _| panic!("timeouts are not retried"),
        );
        assert!(matches!(out, Err(FetchError::Timeout(_))));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let calls = Cell::new(0);
        let policy = RetryPolicy::new(0, Duration::ZERO);
        let out: Result<(), _> = policy.run(
            || {
                calls.set(calls.get() + 1);
                Err(conn())
            },
            |_, _| {},
        );
        assert!(out.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn retry_waits_the_delay_first() {
        let delay = Duration::from_millis(30);
        let calls = Cell::new(0);
        let start = Instant::now();
        let out = RetryPolicy::new(2, delay).run(
            || {
                calls.set(calls.get() + 1);
                if calls.get() == 1 { Err(conn()) } else { Ok(()) }
            },
            |_, _| {},
        );
        assert_eq!(out, Ok(()));
        assert_eq!(calls.get(), 2);
        assert!(start.elapsed() >= delay);
    }

    #[test]
    fn non_connection_error_returns_without_sleeping() {
        let calls = Cell::new(0);
        let start = Instant::now();
        let out: Result<(), _> = RetryPolicy::new(2, Duration::from_secs(5)).run(
            || {
                calls.set(calls.get() + 1);
                Err(FetchError::Decode("bad json".into()))
            },
            |_, _| panic!("decode errors are not retried"),
        );
        assert!(matches!(out, Err(FetchError::Decode(_))));
        assert_eq!(calls.get(), 1);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn default_is_two_attempts_with_fixed_delay() {
        let p = RetryPolicy::default();
        assert_eq!(p.max_attempts, 2);
        assert_eq!(p.delay, Duration::from_secs(2));
    }
}
