//! Retry strategies for remote fetches.
//!
//! A strategy decides how many attempts to make and how long to wait between
//! them; callers decide which errors are worth retrying.

use std::time::Duration;

use crate::settings::RetrySettings;

pub trait RetryStrategy {
    /// Maximum number of attempts, including the first one.
    fn max_attempts(&self) -> u32;

    /// Delay after the given failed attempt (0-indexed).
    ///
    /// Returns `None` if no delay should be applied.
    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration>;

    /// Call `f` until it succeeds or `max_attempts()` is exhausted.
    fn execute<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
    {
        self.execute_while(f, |_| true)
    }

    /// Like [`execute`](Self::execute), but stops early when `retryable`
    /// returns `false` for an error.
    fn execute_while<T, E, F, P>(&self, mut f: F, retryable: P) -> Result<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
        P: Fn(&E) -> bool,
    {
        let max = self.max_attempts().max(1);
        let mut attempt = 0;
        loop {
            match f(attempt) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if attempt + 1 >= max || !retryable(&e) {
                        return Err(e);
                    }
                    if let Some(delay) = self.delay_for_attempt(attempt) {
                        std::thread::sleep(delay);
                    }
                    attempt += 1;
                }
            }
        }
    }
}

/// Backoff with an explicit delay schedule. Attempts past the end of the
/// schedule reuse its last delay.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    max_attempts: u32,
    delays: Vec<Duration>,
}

impl ExponentialBackoff {
    pub fn new(max_attempts: u32, delays: Vec<Duration>) -> Self {
        Self {
            max_attempts,
            delays,
        }
    }

    pub fn from_settings(settings: &RetrySettings) -> Self {
        Self::new(
            settings.max_attempts,
            settings
                .delays_ms
                .iter()
                .map(|&ms| Duration::from_millis(ms))
                .collect(),
        )
    }
}

impl RetryStrategy for ExponentialBackoff {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        self.delays
            .get(attempt as usize)
            .or_else(|| self.delays.last())
            .copied()
    }
}

/// Waits a constant duration between attempts.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    max_attempts: u32,
    delay: Duration,
}

impl FixedDelay {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl RetryStrategy for FixedDelay {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_for_attempt(&self, _attempt: u32) -> Option<Duration> {
        Some(self.delay)
    }
}

/// Attempt once and return the result.
#[derive(Debug, Clone, Default)]
pub struct NoRetry;

impl RetryStrategy for NoRetry {
    fn max_attempts(&self) -> u32 {
        1
    }

    fn delay_for_attempt(&self, _attempt: u32) -> Option<Duration> {
        None
    }
}
