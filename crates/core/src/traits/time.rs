//! Time abstraction traits for platform-agnostic timing operations.
//!
//! This module provides the `TimeSource` trait that abstracts over different
//! time providers (tokio, mock, etc.) so debounce and rate-limit windows can
//! be tested on host without a running executor.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

/// Platform-agnostic monotonic clock.
///
/// This trait abstracts over different time providers:
/// - `TokioTime` (in runtime crate), which follows tokio's pausable clock
/// - `MockTime` for host testing with controllable time
///
/// # Example
///
/// ```
/// use wayfinder_core::traits::{MockTime, TimeSource};
///
/// fn window_expired<T: TimeSource>(time: &T, window_start_us: u64) -> bool {
///     time.elapsed_since(window_start_us) >= 60_000_000
/// }
///
/// let time = MockTime::new();
/// assert!(!window_expired(&time, 0));
/// time.advance(60_000_000);
/// assert!(window_expired(&time, 0));
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Returns current time in milliseconds since the clock started.
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }

    /// Returns current time in microseconds since the clock started.
    fn now_us(&self) -> u64;

    /// Returns elapsed time in microseconds since a reference point.
    ///
    /// Uses saturating subtraction to handle potential overflow.
    fn elapsed_since(&self, reference_us: u64) -> u64 {
        self.now_us().saturating_sub(reference_us)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source for testing with controllable time advancement.
///
/// Clones share the same underlying counter, so a test can hand one clone
/// to the component under test and advance time through another.
///
/// # Example
///
/// ```
/// use wayfinder_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// let shared = time.clone();
///
/// time.advance(1000); // Advance 1ms
/// assert_eq!(shared.now_us(), 1000);
/// assert_eq!(shared.now_ms(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockTime {
    current_us: Arc<AtomicU64>,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `MockTime` starting at the specified time.
    pub fn with_initial(us: u64) -> Self {
        Self {
            current_us: Arc::new(AtomicU64::new(us)),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, us: u64) {
        self.current_us.store(us, Ordering::SeqCst);
    }

    /// Advances the current time by the specified amount.
    pub fn advance(&self, us: u64) {
        self.current_us.fetch_add(us, Ordering::SeqCst);
    }

    /// Advances the current time by whole milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(ms * 1000);
    }
}

impl TimeSource for MockTime {
    fn now_us(&self) -> u64 {
        self.current_us.load(Ordering::SeqCst)
    }
}
