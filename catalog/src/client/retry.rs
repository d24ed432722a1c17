//! Retry policy for transient transport failures.

use std::time::Duration;

use reqwest::header::HeaderValue;

use crate::error::is_retryable_status;

/// First backoff interval.
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Bounded exponential retry settings.
///
/// A client without a policy sends each request exactly once.
///
/// ## Examples
///
/// ```
/// use std::time::Duration;
/// use catalog_client::RetryPolicy;
///
/// let policy = RetryPolicy::new(3, Duration::from_secs(4));
/// assert_eq!(policy.backoff(0), Duration::from_secs(1));
/// assert_eq!(policy.backoff(1), Duration::from_secs(2));
/// assert_eq!(policy.backoff(5), Duration::from_secs(4));
/// assert!(RetryPolicy::should_retry_status(503));
/// assert!(!RetryPolicy::should_retry_status(501));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Upper bound for any single delay.
    pub max_interval: Duration,
}

impl RetryPolicy {
    /// Retries used when the environment enables retries without a count.
    pub const DEFAULT_MAX_RETRIES: u32 = 4;

    /// Interval cap used when none is configured.
    pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(30);

    /// Creates a policy.
    pub fn new(max_retries: u32, max_interval: Duration) -> Self {
        Self {
            max_retries,
            max_interval,
        }
    }

    /// Returns `true` for 429 and any 5xx except 501.
    pub fn should_retry_status(status: u16) -> bool {
        is_retryable_status(status)
    }

    /// The delay before retry number `attempt + 1`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2_u32.checked_pow(attempt).unwrap_or(u32::MAX);
        INITIAL_BACKOFF
            .checked_mul(factor)
            .unwrap_or(self.max_interval)
            .min(self.max_interval)
    }

    /// The delay before the next retry, preferring a `Retry-After` header.
    ///
    /// Only the delay-seconds form of `Retry-After` is understood.
    pub fn delay(&self, attempt: u32, retry_after: Option<&HeaderValue>) -> Duration {
        retry_after
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(|secs| Duration::from_secs(secs).min(self.max_interval))
            .unwrap_or_else(|| self.backoff(attempt))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RETRIES, Self::DEFAULT_MAX_INTERVAL)
    }
}
