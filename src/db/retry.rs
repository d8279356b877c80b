//! Retry policy for write operations.
//!
//! Write-ahead logging lets readers proceed while a writer holds the lock, but
//! writers are serialized. A writer that outlasts the connection's busy
//! timeout fails with `SQLITE_BUSY`; the policy here re-runs such writes a
//! bounded number of times with a linearly growing pause in between.
//!
//! ## Usage
//!
//! ```rust
//! use enrollment::db::retry::RetryPolicy;
//! use std::time::Duration;
//!
//! let policy = RetryPolicy::new(3, Duration::from_millis(100));
//! assert_eq!(policy.delay_for(2), Duration::from_millis(200));
//! ```

use super::error::StorageError;
use std::thread;
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BASE_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Pause after the first failed attempt; the n-th pause is `n * base_delay`.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, Duration::from_millis(DEFAULT_BASE_DELAY_MS))
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Backoff before the attempt following failed attempt number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }

    /// Runs `op`, retrying transient storage errors.
    pub fn run<T>(&self, operation: &str, op: impl FnMut() -> Result<T, StorageError>) -> Result<T, StorageError> {
        self.run_with(operation, StorageError::is_transient, op)
    }

    /// Runs `op`, retrying while `is_retryable` accepts the error and attempts remain.
    ///
    /// Errors the predicate rejects are returned at once. The sleep blocks
    /// only the calling thread.
    pub fn run_with<T, E: std::fmt::Display>(
        &self,
        operation: &str,
        is_retryable: impl Fn(&E) -> bool,
        mut op: impl FnMut() -> Result<T, E>,
    ) -> Result<T, E> {
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::debug!(operation, attempt, "write succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) if attempt < self.max_attempts && is_retryable(&err) => {
                    let delay = self.delay_for(attempt);
                    tracing::warn!(
                        operation,
                        attempt,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "database busy, retrying"
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
