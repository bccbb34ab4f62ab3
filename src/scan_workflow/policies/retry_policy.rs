use crate::shared::error::ScanError;
use crate::shared::Result;
use std::time::Duration;

/// Fixed-interval retry policy for polling the processing status
///
/// No backoff: the wait between attempts is always `delay`, and at
/// most `max_attempts` status checks are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

    pub fn new(max_attempts: u32, delay: Duration) -> Result<Self> {
        if max_attempts == 0 {
            return Err(ScanError::Validation {
                message: "Poll attempts must be at least 1".to_string(),
            }
            .into());
        }

        if delay.is_zero() {
            return Err(ScanError::Validation {
                message: "Poll interval must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(Self {
            max_attempts,
            delay,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Attempt numbers, starting at 1
    pub fn attempts(&self) -> impl Iterator<Item = u32> {
        1..=self.max_attempts
    }

    /// Total time spent waiting once every attempt has been used
    pub fn total_wait(&self) -> Duration {
        self.delay * self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay: Self::DEFAULT_DELAY,
        }
    }
}
