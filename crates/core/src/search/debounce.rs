//! Query debouncing
//!
//! Keeps only the latest free-text query and releases it once input has
//! been idle for the configured delay. The owner drives it with explicit
//! timestamps, so the same type serves tokio timers and `MockTime` tests.

use alloc::string::String;

/// Default idle delay before a query is submitted
pub const DEFAULT_DEBOUNCE_US: u64 = 500_000;

#[derive(Clone, Debug)]
struct Pending {
    text: String,
    deadline_us: u64,
}

/// Idle-timer debouncer for search queries
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay_us: u64,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_US)
    }
}

impl Debouncer {
    pub fn new(delay_us: u64) -> Self {
        Self {
            delay_us,
            pending: None,
        }
    }

    pub fn delay_us(&self) -> u64 {
        self.delay_us
    }

    /// Record an edit; replaces any pending text and restarts the timer
    pub fn input(&mut self, text: impl Into<String>, now_us: u64) {
        self.pending = Some(Pending {
            text: text.into(),
            deadline_us: now_us.saturating_add(self.delay_us),
        });
    }

    /// When the pending query becomes due, if any
    pub fn deadline_us(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline_us)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending query if its deadline has passed
    pub fn poll(&mut self, now_us: u64) -> Option<String> {
        match &self.pending {
            Some(p) if now_us >= p.deadline_us => self.pending.take().map(|p| p.text),
            _ => None,
        }
    }

    /// Drop the pending query without submitting it
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
