//! Fixed-window request limiter for external place lookups
//!
//! The window opens lazily at the first request and closes `window_us`
//! later; the next request after that opens a fresh window with the
//! counter back at zero.

/// Default maximum lookups per window
pub const DEFAULT_MAX_REQUESTS: u32 = 50;

/// Default window length (60 s)
pub const DEFAULT_WINDOW_US: u64 = 60_000_000;

/// Request counter over a fixed window
#[derive(Clone, Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window_us: u64,
    count: u32,
    window_start_us: Option<u64>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW_US)
    }
}

impl RateLimiter {
    pub fn new(max_requests: u32, window_us: u64) -> Self {
        Self {
            max_requests,
            window_us,
            count: 0,
            window_start_us: None,
        }
    }

    /// Count one request if the window has room
    ///
    /// Returns false when the limit is reached; the refused request is
    /// not counted.
    pub fn try_acquire(&mut self, now_us: u64) -> bool {
        self.expire(now_us);
        if self.count >= self.max_requests {
            return false;
        }
        if self.window_start_us.is_none() {
            self.window_start_us = Some(now_us);
        }
        self.count += 1;
        true
    }

    /// Requests left in the current window
    pub fn remaining(&self, now_us: u64) -> u32 {
        match self.window_start_us {
            Some(start) if now_us.saturating_sub(start) >= self.window_us => self.max_requests,
            _ => self.max_requests.saturating_sub(self.count),
        }
    }

    /// Requests counted in the current window
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window_us(&self) -> u64 {
        self.window_us
    }

    fn expire(&mut self, now_us: u64) {
        if let Some(start) = self.window_start_us {
            if now_us.saturating_sub(start) >= self.window_us {
                self.count = 0;
                self.window_start_us = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_max() {
        let mut limiter = RateLimiter::default();
        for i in 0..50 {
            assert!(limiter.try_acquire(i * 1_000_000), "request {i}");
        }
        assert_eq!(limiter.count(), 50);
        assert!(!limiter.try_acquire(59_999_999));
        assert_eq!(limiter.count(), 50);
    }

    #[test]
    fn test_resets_after_window_from_first_request() {
        let mut limiter = RateLimiter::default();
        let first = 5_000_000;
        for _ in 0..50 {
            assert!(limiter.try_acquire(first));
        }
        assert!(!limiter.try_acquire(first + DEFAULT_WINDOW_US - 1));
        assert!(limiter.try_acquire(first + DEFAULT_WINDOW_US));
        assert_eq!(limiter.count(), 1);
    }

    #[test]
    fn test_window_starts_lazily() {
        let mut limiter = RateLimiter::new(2, 1_000);
        // Long idle period before the first request does not shorten the window
        assert!(limiter.try_acquire(10_000));
        assert!(limiter.try_acquire(10_500));
        assert!(!limiter.try_acquire(10_999));
        assert!(limiter.try_acquire(11_000));
    }

    #[test]
    fn test_remaining() {
        let mut limiter = RateLimiter::new(3, 1_000);
        assert_eq!(limiter.remaining(0), 3);
        limiter.try_acquire(0);
        assert_eq!(limiter.remaining(10), 2);
        assert_eq!(limiter.remaining(1_000), 3);
    }

    #[test]
    fn test_zero_max_refuses_everything() {
        let mut limiter = RateLimiter::new(0, 1_000);
        assert!(!limiter.try_acquire(0));
        assert!(!limiter.try_acquire(10_000));
    }
}
