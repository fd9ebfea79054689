//! Per-client rate limiting for the public write endpoints.

use governor::{
    clock::{Clock, DefaultClock},
    DefaultKeyedRateLimiter, Quota, RateLimiter,
};
use std::num::NonZeroU32;

/// Number of tracked clients above which idle entries are pruned.
const PRUNE_THRESHOLD: usize = 10_000;

/// Keyed limiter shared across all requests, one bucket per client key.
pub struct RateLimiterState {
    limiter: DefaultKeyedRateLimiter<String>,
    clock: DefaultClock,
    rate_limit_per_minute: u32,
}

impl RateLimiterState {
    /// Returns `None` when `rate_limit_per_minute` is 0 (limiting disabled).
    pub fn new(rate_limit_per_minute: u32) -> Option<Self> {
        let per_minute = NonZeroU32::new(rate_limit_per_minute)?;
        Some(Self {
            limiter: RateLimiter::keyed(Quota::per_minute(per_minute)),
            clock: DefaultClock::default(),
            rate_limit_per_minute,
        })
    }

    pub fn rate_limit_per_minute(&self) -> u32 {
        self.rate_limit_per_minute
    }

    /// Checks one request for `key`.
    /// Returns `Err(retry_after_secs)` (at least 1) when the bucket is empty.
    pub fn check(&self, key: &str) -> Result<(), u64> {
        if self.limiter.len() > PRUNE_THRESHOLD {
            self.limiter.retain_recent();
        }

        self.limiter.check_key(&key.to_string()).map_err(|not_until| {
            not_until
                .wait_time_from(self.clock.now())
                .as_secs()
                .max(1)
        })
    }
}

impl std::fmt::Debug for RateLimiterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiterState")
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .field("tracked_clients", &self.limiter.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_disables_limiting() {
        assert!(RateLimiterState::new(0).is_none());
    }

    #[test]
    fn test_allows_up_to_limit() {
        let state = RateLimiterState::new(5).unwrap();
        for i in 0..5 {
            assert!(state.check("10.0.0.1").is_ok(), "Request {} should be allowed", i);
        }
        let retry_after = state.check("10.0.0.1").unwrap_err();
        assert!(retry_after >= 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let state = RateLimiterState::new(1).unwrap();
        assert!(state.check("a").is_ok());
        assert!(state.check("b").is_ok());
        assert!(state.check("a").is_err());
        assert!(state.check("b").is_err());
        assert!(state.check("c").is_ok());
    }

    #[test]
    fn test_debug_output() {
        let state = RateLimiterState::new(30).unwrap();
        state.check("x").unwrap();
        let debug = format!("{:?}", state);
        assert!(debug.contains("rate_limit_per_minute: 30"));
        assert!(debug.contains("tracked_clients: 1"));
    }
}
