//! Capability traits the navigation session composes against
//!
//! Location, heading and haptic feedback are injected rather than
//! inherited, so tests and the runtime can substitute their own
//! implementations.
//!
//! `LocationSource` and `HeadingSource` are pull-style, for synchronous or
//! embedded hosts that poll sensors from their own loop and hand both to
//! [`NavigationSession::update_from`](super::NavigationSession::update_from).
//! The tokio runtime does not use them: it consumes push-style async feeds
//! (`wayfinder_runtime::feeds`) and calls `on_location_update` and
//! `on_heading_update` directly. `FeedbackDevice` is shared by both.

use super::types::Coordinate;

/// Location authorization as reported by the platform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthorizationStatus {
    /// User has not been asked yet
    #[default]
    NotDetermined,
    /// Location use is restricted by policy
    Restricted,
    /// User declined location access
    Denied,
    /// Location available while the app is in use
    AuthorizedWhenInUse,
    /// Location available at all times
    AuthorizedAlways,
}

impl AuthorizationStatus {
    /// Returns true if location fixes can be expected
    pub fn is_authorized(self) -> bool {
        matches!(
            self,
            AuthorizationStatus::AuthorizedWhenInUse | AuthorizationStatus::AuthorizedAlways
        )
    }
}

/// Provides the user's latest known position
pub trait LocationSource {
    /// Returns the most recent fix, or `None` if none has arrived yet
    fn latest_fix(&self) -> Option<Coordinate>;

    /// Returns the current authorization state
    fn authorization(&self) -> AuthorizationStatus;
}

/// Provides device heading information for navigation
pub trait HeadingSource {
    /// Returns current heading in degrees (0-360, 0 = North)
    ///
    /// Returns `None` if no valid heading is available.
    fn get_heading(&self) -> Option<f64>;

    /// Returns true if heading source is healthy and providing valid data
    fn is_valid(&self) -> bool;
}

/// One-shot device feedback (haptic pulse, chime) fired on arrival
pub trait FeedbackDevice {
    /// Fire a single pulse. Must not block.
    fn pulse(&mut self);
}

impl<F: FeedbackDevice + ?Sized> FeedbackDevice for &mut F {
    fn pulse(&mut self) {
        (**self).pulse();
    }
}
