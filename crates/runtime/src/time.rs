//! tokio-backed `TimeSource`
//!
//! Follows `tokio::time::Instant`, so a runtime started with paused time
//! (`#[tokio::test(start_paused = true)]`) drives debounce and rate-limit
//! windows deterministically.

use tokio::time::{Duration, Instant};
use wayfinder_core::traits::TimeSource;

/// Monotonic clock measured from the moment it was created
#[derive(Clone, Copy, Debug)]
pub struct TokioTime {
    origin: Instant,
}

impl TokioTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Convert a `now_us` timestamp back into a tokio instant
    pub fn instant_at(&self, us: u64) -> Instant {
        self.origin + Duration::from_micros(us)
    }
}

impl Default for TokioTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for TokioTime {
    fn now_us(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }
}
