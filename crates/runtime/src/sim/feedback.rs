use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use wayfinder_core::navigation::FeedbackDevice;

/// Counts arrival pulses; clones share the counter
#[derive(Clone, Debug, Default)]
pub struct RecordingFeedback {
    pulses: Arc<AtomicU32>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pulses(&self) -> u32 {
        self.pulses.load(Ordering::SeqCst)
    }
}

impl FeedbackDevice for RecordingFeedback {
    fn pulse(&mut self) {
        self.pulses.fetch_add(1, Ordering::SeqCst);
        crate::log_info!("*buzz*");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_count() {
        let observer = RecordingFeedback::new();
        let mut device = observer.clone();
        device.pulse();
        device.pulse();
        assert_eq!(observer.pulses(), 2);
    }
}
